use crate::domain::text_field::FixedText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled event: name, date and time as free-form bounded text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventRecord {
    name: FixedText,
    date: FixedText,
    time: FixedText,
}

impl EventRecord {
    /// Each field is truncate-copied; date and time formats are not checked
    pub fn new(name: &str, date: &str, time: &str) -> Self {
        Self {
            name: FixedText::new(name),
            date: FixedText::new(date),
            time: FixedText::new(time),
        }
    }

    pub fn name(&self) -> &FixedText {
        &self.name
    }

    pub fn date(&self) -> &FixedText {
        &self.date
    }

    pub fn time(&self) -> &FixedText {
        &self.time
    }

    pub fn replace(&mut self, other: &Self) {
        *self = *other;
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event: Name={}, Date={}, Time={}",
            self.name, self.date, self.time
        )
    }
}
