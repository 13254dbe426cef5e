use crate::lexer::LexingError;
use itertools::Itertools;
use lute_tokens::reserved::Reserved;
use lute_tokens::{LocatedError, Location};

/// Represents an error occurring while reading or validating source.
///
/// Displays as `Line <n> : syntax error : <text>`, pointing at the offending text. The alternate
/// form also gives the reason.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct SyntaxError(#[from] LocatedError<ErrorKind>);

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, location: impl Into<Option<Location>>) -> Self {
        Self(LocatedError::new(kind, location))
    }

    pub fn kind(&self) -> &ErrorKind {
        self.0.error()
    }

    pub fn location(&self) -> Option<&Location> {
        self.0.location()
    }
}

impl From<LexingError> for SyntaxError {
    fn from(value: LexingError) -> Self {
        let location = value.location().cloned();
        Self::new(ErrorKind::Lex(value), location)
    }
}

/// [SyntaxError] kind
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Lex(#[from] LexingError),
    /// A token is not compatible with the tokens around it
    #[error("`{token}` can not appear here")]
    Juxtaposition { token: String },
    /// A control flow keyword does not continue the block it sits in
    #[error("`{token}` must follow {}, found {}", expected_tokens(.expected), found_token(.found))]
    Flow {
        token: Reserved,
        expected: &'static [Reserved],
        found: Option<Reserved>,
    },
    #[error("`{0}` closes a block that was never opened")]
    Unbalanced(Reserved),
}

fn expected_tokens(expected: &[Reserved]) -> String {
    expected
        .iter()
        .map(|reserved| format!("`{reserved}`"))
        .join(" or ")
}

fn found_token(found: &Option<Reserved>) -> String {
    match found {
        Some(reserved) => format!("`{reserved}`"),
        None => "nothing".to_string(),
    }
}

pub type SyntaxResult<T = ()> = Result<T, SyntaxError>;
