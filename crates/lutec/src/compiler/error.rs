//! A lutec compilation error

use lute_parsing::lexer::LexingError;
use lute_parsing::parser::error::SyntaxError;
use std::io;
use thiserror::Error;

/// An error occurred while attempting to compile a source
#[derive(Debug, Error)]
pub enum LutecError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl LutecError {
    /// The syntax error, if this is one
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            LutecError::Syntax(error) => Some(error),
            LutecError::Io(_) => None,
        }
    }
}

impl From<LexingError> for LutecError {
    fn from(value: LexingError) -> Self {
        match value {
            LexingError::Io(error) => LutecError::Io(error),
            other => LutecError::Syntax(SyntaxError::from(other)),
        }
    }
}

/// A type alias for general results in lutec
pub type LutecResult<T> = Result<T, LutecError>;
