//! rugiac-lex - Lexical Analyzer for the Rugia Programming Language
//!
//! This crate turns a source buffer into the token stream consumed by the
//! parser. Scanning is a single pass over bytes, followed by two passes that
//! infer statement terminators from line breaks.
//!
//! # Example Usage
//!
//! ```
//! use rugiac_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize(b"package main\n\nx := 42\n");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Package,
//!         TokenKind::Identifier,
//!         TokenKind::SemiColon,
//!         TokenKind::Identifier,
//!         TokenKind::ShortAssign,
//!         TokenKind::IntLit,
//!         TokenKind::SemiColon,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the operator/keyword vocabularies
//! - [`lexer`] - The scanner producing the raw stream
//! - [`cursor`] - Byte cursor with line/column tracking
//! - [`terminator`] - Statement terminator inference over the raw stream
//! - [`config`] - Scan settings, loadable from TOML
//! - [`source`] - Reading a source fully into memory
//! - [`error`] - Error type for the fallible entry points
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `break`, `case`, `const`, `continue`, `default`, `else`, `for`, `func`,
//! `goto`, `if`, `import`, `map`, `package`, `range`, `return`, `struct`,
//! `switch`, `type`, `var`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`. A byte the scanner does not otherwise
//! recognize also starts an identifier.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`
//! - **String**: `"hello"`, with no escape sequences
//! - **Raw string**: `` `may span lines` ``
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`, `:=`
//! - **Bitwise**: `&`, `|`, `^`, `<<`, `>>`
//!
//! ## Delimiters
//!
//! `()`, `{}`, `[]`, `,`, `:`, `.`, `;`
//!
//! # Failure Model
//!
//! Scanning never fails. An unterminated string or block comment consumes
//! the rest of the input and, for strings, emits nothing. Only reading the
//! source can fail, see [`tokenize_reader`].

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod terminator;
pub mod token;

mod edge_cases;

use std::io::Read;

use tracing::debug;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use token::{Token, TokenKind, Vocabulary};

/// Scans `source` with the default configuration and infers statement
/// terminators.
///
/// The result always ends in a SemiColon.
pub fn tokenize(source: &[u8]) -> Vec<Token> {
    tokenize_with_config(source, &LexerConfig::default())
}

/// Scans `source` using `config`.
///
/// With `insert_terminators` off, the raw stream is returned as scanned,
/// EndOfLine tokens included.
pub fn tokenize_with_config(source: &[u8], config: &LexerConfig) -> Vec<Token> {
    let raw = Lexer::with_config(source, config).scan();
    if !config.insert_terminators {
        return raw;
    }
    let tokens = terminator::terminate(raw);
    debug!(tokens = tokens.len(), "tokenized");
    tokens
}

/// Reads all of `reader` into memory, then tokenizes it.
///
/// # Errors
///
/// Fails if reading fails or the source is larger than
/// `config.max_source_bytes`.
pub fn tokenize_reader<R: Read>(reader: R, config: &LexerConfig) -> Result<Vec<Token>> {
    let source = source::read_source(reader, config.max_source_bytes)?;
    Ok(tokenize_with_config(&source, config))
}
