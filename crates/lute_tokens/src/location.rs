//! Where a fragment of source text came from

use std::fmt::{Display, Formatter};

/// A fragment of source text along with the line and column it starts at.
///
/// Lines are counted from 1, columns from 0 and in characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    line: usize,
    column: usize,
    text: String,
}

impl Location {
    /// Creates a new location
    pub fn new(line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            column,
            text: text.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The raw source text at this location
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The column directly after the text
    pub fn end_column(&self) -> usize {
        self.column + self.text.chars().count()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_column_counts_chars() {
        let location = Location::new(1, 2, "::=");
        assert_eq!(location.end_column(), 5);
        assert_eq!(location.to_string(), "1:2");
    }
}
