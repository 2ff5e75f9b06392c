//! Source locations and line/column mapping.
//!
//! Declarations carry byte-offset locations (`file`, `start`, `length`).
//! `LineMap` converts an offset into a 0-based line/character position when
//! the source text is available to the sink.

use serde::{Deserialize, Serialize};

/// A byte-offset range inside a named file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub length: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, start: u32, length: u32) -> Self {
        Self {
            file: file.into(),
            start,
            length,
        }
    }

    #[must_use]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

/// A 0-based line/character position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Line start offsets for one source text.
#[derive(Clone, Debug)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the last line.
    #[must_use]
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        Position {
            line: line as u32,
            character: offset - self.line_starts[line],
        }
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
