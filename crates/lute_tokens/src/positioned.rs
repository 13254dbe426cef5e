//! Tokens paired with the place they were read from

use crate::location::Location;
use crate::token::Token;
use std::fmt::{Display, Formatter};

/// A token as produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken {
    token: Token,
    location: Location,
}

impl PositionedToken {
    /// Creates a new positioned token
    pub fn new(token: Token, location: Location) -> Self {
        Self { token, location }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn line(&self) -> usize {
        self.location.line()
    }

    /// The raw source text this token was read from
    pub fn text(&self) -> &str {
        self.location.text()
    }

    /// Creates the end of file token that closes a listing ending with `last`
    pub fn eof_after(last: Option<&PositionedToken>) -> Self {
        let location = match last {
            Some(last) => Location::new(last.line(), last.location.end_column(), ""),
            None => Location::new(1, 0, ""),
        };
        Self::new(Token::Eof, location)
    }

    /// Renders this token as a line of a token listing
    /// `[@<ordinal>,<start>:<end>='<text>',<<NAME>>,<line>:<start>]`
    pub fn trace_line(&self, ordinal: usize) -> String {
        let start = self.location.column();
        format!(
            "[@{ordinal},{start}:{end}='{text}',<{name}>,{line}:{start}]",
            end = self.location.end_column(),
            text = self.location.text(),
            name = self.token.name(),
            line = self.location.line(),
        )
    }
}

impl Display for PositionedToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.token.name(), self.location)
    }
}

/// A validated token carrying the logic depth used to indent generated code.
///
/// The token may differ from the one that was read: a sequence terminator that closes a loop body
/// is replaced by an end marker.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    token: Token,
    location: Location,
    depth: i32,
}

impl AnnotatedToken {
    pub fn new(source: &PositionedToken, token: Token, depth: i32) -> Self {
        Self {
            token,
            location: source.location.clone(),
            depth,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The logic depth this token was found at
    pub fn depth(&self) -> i32 {
        self.depth
    }
}
