//! Responsible with converting a [io::Read] obj into a token stream

use lute_tokens::positioned::PositionedToken;
use lute_tokens::Location;
use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

mod scanner;
mod token_parsing;

pub use token_parsing::classify;

/// Responsible with converting a [Read] obj into a token stream.
///
/// Source is read a line at a time. Once an error has been returned no more tokens are produced.
#[derive(Debug)]
pub struct Lexer<R> {
    reader: BufReader<R>,
    line: usize,
    pending: VecDeque<PositionedToken>,
    finished: bool,
}

impl Lexer<File> {
    /// Creates a new lexer from a path
    pub fn read_path(path: &Path) -> io::Result<Self> {
        let reader = File::open(path)?;
        Ok(Self::new(reader))
    }
}

impl<R: Read> Lexer<R> {
    /// Creates a new lexer
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Reads every remaining token
    #[instrument(skip_all)]
    pub fn tokenize(self) -> LexResult<Vec<PositionedToken>> {
        let tokens = self.collect::<LexResult<Vec<_>>>()?;
        debug!("read {} tokens", tokens.len());
        Ok(tokens)
    }

    fn next_token(&mut self) -> LexResult<Option<PositionedToken>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.finished {
                return Ok(None);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                self.finished = true;
                continue;
            }
            self.line += 1;
            self.pending.extend(scanner::scan_line(&line, self.line)?);
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<PositionedToken, LexingError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(option) => option.map(Ok),
            Err(e) => {
                self.finished = true;
                self.pending.clear();
                Some(Err(e))
            }
        }
    }
}

pub type LexResult<T> = Result<T, LexingError>;

#[derive(Debug, Error)]
pub enum LexingError {
    /// A run of characters could not be split into tokens
    #[error("no token can be read from {rest:?}")]
    Unresolved { rest: String, location: Location },
    /// Reading the source failed, including when it was not valid UTF-8
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LexingError {
    /// The first unresolved character, if this error came from source text
    pub fn location(&self) -> Option<&Location> {
        match self {
            LexingError::Unresolved { location, .. } => Some(location),
            LexingError::Io(_) => None,
        }
    }
}
