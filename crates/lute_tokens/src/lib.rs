#![doc = include_str!("../README.md")]

use std::fmt::{Display, Formatter};

pub mod location;
pub mod positioned;
pub mod reserved;
pub mod token;

pub use location::Location;

/// An error that may point at an offending fragment of source
#[derive(Debug, thiserror::Error)]
pub struct LocatedError<E> {
    error: E,
    location: Option<Location>,
}

impl<E> LocatedError<E> {
    pub fn new(error: E, location: impl Into<Option<Location>>) -> Self {
        Self {
            error,
            location: location.into(),
        }
    }

    /// The underlying error
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Where the error occurred, if it came from source text
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

/// Located errors display as `Line <n> : syntax error : <text>`. The alternate form appends the
/// reason.
impl<E: Display> Display for LocatedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => {
                write!(
                    f,
                    "Line {} : syntax error : {}",
                    location.line(),
                    location.text()
                )?;
                if f.alternate() {
                    write!(f, " ({})", self.error)?;
                }
                Ok(())
            }
            None => write!(f, "{}", self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("bad token")]
    struct BadToken;

    #[test]
    fn test_located_error_display() {
        let error = LocatedError::new(BadToken, Location::new(3, 4, "else"));
        assert_eq!(error.to_string(), "Line 3 : syntax error : else");
        assert_eq!(format!("{error:#}"), "Line 3 : syntax error : else (bad token)");
    }

    #[test]
    fn test_unlocated_error_display() {
        let error = LocatedError::new(BadToken, None);
        assert_eq!(error.to_string(), "bad token");
        assert!(error.location().is_none());
    }
}
