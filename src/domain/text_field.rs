//! Bounded text stored in a fixed-size buffer
//!
//! `FixedText` copies at most [`MAX_CONTENT_BYTES`] bytes of its source and
//! silently drops the rest. The unused tail of the buffer is always zeroed,
//! so comparing the whole buffer is the same as comparing the visible text.

use crate::domain::validation_constants::fixed_text::{CAPACITY, MAX_CONTENT_BYTES};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text value capped at a fixed length, truncated on overflow
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText {
    buf: [u8; CAPACITY],
}

impl FixedText {
    /// Truncating copy of `source`
    ///
    /// Copying stops at the first NUL, and the cut never splits a UTF-8
    /// character.
    pub fn new(source: &str) -> Self {
        let visible = source.split('\0').next().unwrap_or_default();
        let mut end = visible.len().min(MAX_CONTENT_BYTES);
        while !visible.is_char_boundary(end) {
            end -= 1;
        }

        let mut buf = [0u8; CAPACITY];
        buf[..end].copy_from_slice(&visible.as_bytes()[..end]);
        Self { buf }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len()]).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buf.iter().position(|b| *b == 0).unwrap_or(CAPACITY)
    }

    pub fn is_empty(&self) -> bool {
        self.buf[0] == 0
    }

    /// The full backing buffer, padding included
    pub fn as_bytes(&self) -> &[u8; CAPACITY] {
        &self.buf
    }
}

impl Default for FixedText {
    fn default() -> Self {
        Self {
            buf: [0u8; CAPACITY],
        }
    }
}

impl From<&str> for FixedText {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl AsRef<str> for FixedText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FixedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for FixedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedText({:?})", self.as_str())
    }
}

impl Serialize for FixedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FixedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}
