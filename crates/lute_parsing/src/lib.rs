#![doc = include_str!("../README.md")]

use crate::lexer::Lexer;
use crate::parser::error::SyntaxResult;
use lute_tokens::positioned::AnnotatedToken;
use std::io::Read;

pub mod lexer;
pub mod parser;

/// Reads and validates source, producing the depth annotated token sequence.
pub fn parse<R: Read>(reader: R) -> SyntaxResult<Vec<AnnotatedToken>> {
    let tokens = Lexer::new(reader).tokenize()?;
    parser::validate(&tokens)
}
