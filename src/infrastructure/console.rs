//! Input sources backed by a console stream or a prepared script
//!
//! Both split their input on whitespace, so a text value is a single word
//! and several values may share one line.

use crate::application::input::{InputError, InputSource};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Whitespace-token reader over a line-oriented stream, writing prompts to `W`
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self {
            reader,
            prompts,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, prompt: &str) -> Result<String, InputError> {
        if self.pending.is_empty() {
            write!(self.prompts, "{prompt}")?;
            self.prompts.flush()?;
        }

        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Exhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }

        self.pending.pop_front().ok_or(InputError::Exhausted)
    }
}

impl<R, W> std::fmt::Debug for ConsoleInput<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleInput")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_integer(&mut self, prompt: &str) -> Result<i64, InputError> {
        let token = self.next_token(prompt)?;
        parse_integer(token)
    }

    fn read_text(&mut self, prompt: &str) -> Result<String, InputError> {
        self.next_token(prompt)
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

/// Pre-tokenized input, consumed front to back; prompts are recorded
#[derive(Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Split a whole script on whitespace
    pub fn from_script(script: &str) -> Self {
        Self::new(script.split_whitespace())
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    fn next_token(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        self.tokens.pop_front().ok_or(InputError::Exhausted)
    }
}

impl InputSource for ScriptedInput {
    fn read_integer(&mut self, prompt: &str) -> Result<i64, InputError> {
        let token = self.next_token(prompt)?;
        parse_integer(token)
    }

    fn read_text(&mut self, prompt: &str) -> Result<String, InputError> {
        self.next_token(prompt)
    }
}

fn parse_integer(token: String) -> Result<i64, InputError> {
    token.parse().map_err(|_| InputError::Malformed {
        field: "an integer",
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_input_splits_lines_into_tokens() {
        let stdin = Cursor::new("1\n100 5 2\nConcert\n");
        let mut prompts = Vec::new();
        let mut input = ConsoleInput::new(stdin, &mut prompts);

        assert_eq!(input.read_integer("choice: ").unwrap(), 1);
        assert_eq!(input.read_integer("capacity: ").unwrap(), 100);
        assert_eq!(input.read_integer("rows: ").unwrap(), 5);
        assert_eq!(input.read_integer("zones: ").unwrap(), 2);
        assert_eq!(input.read_text("name: ").unwrap(), "Concert");
        assert!(matches!(
            input.read_text("more: "),
            Err(InputError::Exhausted)
        ));
    }

    #[test]
    fn test_console_input_prompts_only_when_waiting() {
        let stdin = Cursor::new("3 4\n");
        let mut prompts = Vec::new();
        {
            let mut input = ConsoleInput::new(stdin, &mut prompts);
            input.read_integer("first: ").unwrap();
            input.read_integer("second: ").unwrap();
        }
        assert_eq!(String::from_utf8(prompts).unwrap(), "first: ");
    }

    #[test]
    fn test_console_input_skips_blank_lines() {
        let stdin = Cursor::new("\n   \n7\n");
        let mut input = ConsoleInput::new(stdin, Vec::new());
        assert_eq!(input.read_integer("> ").unwrap(), 7);
    }

    #[test]
    fn test_malformed_integer_is_reported() {
        let mut input = ScriptedInput::new(["twelve"]);
        match input.read_integer("count: ") {
            Err(InputError::Malformed { token, .. }) => assert_eq!(token, "twelve"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_scripted_input_records_prompts() {
        let mut input = ScriptedInput::from_script("VIP 42");
        assert_eq!(input.read_text("type: ").unwrap(), "VIP");
        assert_eq!(input.read_integer("id: ").unwrap(), 42);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.prompts(), ["type: ", "id: "]);
    }

    #[test]
    fn test_discard_pending_drops_rest_of_line() {
        let stdin = Cursor::new("-5 4 2\n9\n");
        let mut prompts = Vec::new();
        {
            let mut input = ConsoleInput::new(stdin, &mut prompts);
            assert_eq!(input.read_integer("seats: ").unwrap(), -5);
            input.discard_pending();
            assert_eq!(input.read_integer("choice: ").unwrap(), 9);
        }
        assert_eq!(String::from_utf8(prompts).unwrap(), "seats: choice: ");
    }

    #[test]
    fn test_discard_pending_keeps_scripted_tokens() {
        let mut input = ScriptedInput::from_script("1 2");
        input.discard_pending();
        assert_eq!(input.remaining(), 2);
    }
}
