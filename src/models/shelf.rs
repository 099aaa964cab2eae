//! Shelf model and shelf identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

use super::book::Book;

/// Letter ranges of the shelves every catalog starts with, in listing order.
pub const DEFAULT_RANGES: [(char, char); 4] = [('A', 'G'), ('H', 'J'), ('K', 'T'), ('U', 'Z')];

/// Identifier of a shelf, written `<start>-<end>` (e.g. `A-G`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfId {
    pub start: char,
    pub end: char,
}

impl FromStr for ShelfId {
    type Err = AppError;

    /// Accepts exactly three bytes with `-` in the middle. Non-ASCII input
    /// fails one of the two checks.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let bytes = id.as_bytes();
        if bytes.len() != 3 {
            return Err(AppError::InvalidShelfId("length != 3"));
        }
        if bytes[1] != b'-' {
            return Err(AppError::InvalidShelfId("separator != '-'"));
        }

        Ok(ShelfId {
            start: bytes[0] as char,
            end: bytes[2] as char,
        })
    }
}

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A fixed letter range holding books in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    pub start: char,
    pub end: char,
    pub books: Vec<Book>,
}

impl Shelf {
    pub fn new(start: char, end: char) -> Self {
        Self {
            start,
            end,
            books: Vec::new(),
        }
    }

    /// The four empty shelves `A-G`, `H-J`, `K-T`, `U-Z`
    pub fn defaults() -> Vec<Shelf> {
        DEFAULT_RANGES
            .iter()
            .map(|&(start, end)| Shelf::new(start, end))
            .collect()
    }

    pub fn id(&self) -> ShelfId {
        ShelfId {
            start: self.start,
            end: self.end,
        }
    }

    pub fn matches(&self, id: ShelfId) -> bool {
        self.start == id.start && self.end == id.end
    }

    pub fn position_of(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn == isbn)
    }
}
