/*!
# Rust Language Module

This Rust module splits source text into rows of tokens.

*/

#[macro_use]
mod error;
mod lex;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{lex, lex_line};
pub use line::Line;

/// Row labels are parsed as 32-bit integers but the program
/// counter is free to wander past them.
pub type RowNumber = i64;
