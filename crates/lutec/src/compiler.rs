//! Responsible with compiling lute sources into target code

use crate::codegen::CodeGenerator;
use lute_parsing::lexer::Lexer;
use lute_parsing::parser;
use lute_tokens::positioned::PositionedToken;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

pub mod error;

pub use error::{LutecError, LutecResult};

/// The runtime header included by generated code unless configured otherwise
pub const DEFAULT_HEADER: &str = "ml-c.h";
/// Spaces per indentation level unless configured otherwise
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Responsible with compiling lute sources into target code.
///
/// Must be configured using a [LutecBuilder].
#[derive(Debug, Clone)]
pub struct Lutec {
    header: String,
    indent_width: usize,
}

impl Lutec {
    /// Creates the default LutecBuilder
    #[inline]
    pub fn builder() -> LutecBuilder {
        LutecBuilder::new()
    }

    /// Compiles a whole source. Nothing is generated if the source has a syntax error.
    pub fn compile<R: Read>(&self, reader: R) -> LutecResult<String> {
        let tokens = self.tokenize(reader)?;
        self.compile_tokens(&tokens)
    }

    /// Compiles source text
    #[inline]
    pub fn compile_str(&self, source: &str) -> LutecResult<String> {
        self.compile(source.as_bytes())
    }

    /// Compile a file at a given path
    #[instrument(skip(self))]
    pub fn compile_path(&self, path: &Path) -> LutecResult<String> {
        let file = File::open(path)?;
        self.compile(file)
    }

    /// Reads every token of a source without validating them
    pub fn tokenize<R: Read>(&self, reader: R) -> LutecResult<Vec<PositionedToken>> {
        Ok(Lexer::new(reader).tokenize()?)
    }

    /// Validates and compiles tokens that were already read
    #[instrument(skip_all)]
    pub fn compile_tokens(&self, tokens: &[PositionedToken]) -> LutecResult<String> {
        let annotated = parser::validate(tokens)?;
        debug!("validated {} tokens", annotated.len());
        Ok(CodeGenerator::new(&self.header, self.indent_width).generate(&annotated))
    }
}

/// Builder for creating a [Lutec] instance.
#[derive(Debug)]
pub struct LutecBuilder {
    pub header: String,
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl LutecBuilder {
    /// Creates a LutecBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime header generated code includes
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Builds a [Lutec] instance from this builder
    pub fn build(self) -> Result<Lutec, BuildLutecError> {
        if self.indent_width == 0 {
            return Err(BuildLutecError::ZeroIndent);
        }
        if self.header.trim().is_empty() {
            return Err(BuildLutecError::EmptyHeader);
        }
        Ok(Lutec {
            header: self.header,
            indent_width: self.indent_width,
        })
    }
}

impl Default for LutecBuilder {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// An error occurred while building a [Lutec] instance
#[derive(Debug, Error)]
pub enum BuildLutecError {
    #[error("Generated code can't be indented by zero spaces")]
    ZeroIndent,
    #[error("A runtime header must be named")]
    EmptyHeader,
}
