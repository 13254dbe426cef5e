#![doc = include_str!("../README.md")]

pub mod codegen;
mod compiler;
pub use compiler::*;
