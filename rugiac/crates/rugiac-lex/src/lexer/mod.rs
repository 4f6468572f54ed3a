//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch loop
//! - `identifier` - Keyword resolution and identifier continuation
//! - `number` - Integer literal lexing
//! - `string` - Interpreted and raw string literal lexing
//! - `operator` - Operator lexing with two-byte longest match
//! - `comment` - Line and block comments, and the divide operator

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
