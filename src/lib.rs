//! # rowscript
//!
//! A tiny line-numbered command language.
//!
//! Every line of a program starts with a row number, then a command
//! keyword, then its arguments. Rows run in order unless a `JUMP` or
//! `IF ... JUMP` sends execution somewhere else, and `END` stops it.
//! ```text
//! 10 RESERVE NAME _ TEXT
//! 20 NAME IS ASK "What is your name?"
//! 30 PRINT "Hello, "
//! 40 SAY NAME
//! 50 END
//! ```
//!
//! Run a file with `rowscript hello.row`, or start `rowscript` with no
//! arguments and type the program in followed by `RUN`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
#[doc(hidden)]
pub mod term;
