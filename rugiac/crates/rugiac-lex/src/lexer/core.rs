//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use rugiac_util::ascii::{is_digit, is_whitespace};
use rugiac_util::Position;
use tracing::{debug, trace, warn};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Single-pass scanner over an in-memory source buffer.
///
/// The lexer consumes one logical unit per step until input runs out and
/// appends every token it recognizes to an ordered accumulator. The result
/// is the raw stream: line breaks appear as [`TokenKind::EndOfLine`] tokens
/// and no statement terminators have been inferred yet.
///
/// # Example
///
/// ```
/// use rugiac_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new(b"x := 1\n").scan();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::ShortAssign, TokenKind::IntLit, TokenKind::EndOfLine]
/// );
/// ```
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens recognized so far.
    tokens: Vec<Token>,

    /// Position where the unit being scanned starts.
    pub(crate) token_start: Position,

    /// Whether truncated literals and comments are logged.
    warn_unterminated: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    /// Creates a new lexer using `config`.
    pub fn with_config(source: &'a [u8], config: &LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            token_start: Position::start(),
            warn_unterminated: config.warn_unterminated,
        }
    }

    /// Scans the whole source and returns the raw token stream.
    pub fn scan(mut self) -> Vec<Token> {
        debug!(bytes = self.cursor.source().len(), "scan started");

        while let Some(b) = self.cursor.current() {
            self.token_start = self.cursor.location();
            self.scan_unit(b);
        }

        debug!(
            tokens = self.tokens.len(),
            lines = self.cursor.line(),
            "scan finished"
        );
        self.tokens
    }

    /// Consumes one logical unit starting with `b`.
    fn scan_unit(&mut self, b: u8) {
        match b {
            b'\n' => self.lex_newline(),
            b if is_whitespace(b) => {
                self.cursor.advance();
            }
            b'/' => self.lex_slash(),
            b'"' => self.lex_interpreted_string(),
            b'`' => self.lex_raw_string(),
            b';' => {
                self.cursor.advance();
                self.emit(TokenKind::SemiColon);
            }
            b if is_digit(b) => self.lex_integer(),
            _ => self.lex_identifier_operator_or_keyword(),
        }
    }

    /// Consumes a line feed and emits an EndOfLine at the start of the new
    /// line.
    pub(crate) fn lex_newline(&mut self) {
        self.cursor.advance();
        self.token_start = self.cursor.location();
        self.emit(TokenKind::EndOfLine);
    }

    /// Emits a token of `kind` spanning from the unit start to the cursor.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.token_start, self.cursor.location());
        self.push(token);
    }

    /// Emits a literal-bearing token that starts at `pos` and ends at the
    /// cursor.
    pub(crate) fn emit_literal(&mut self, kind: TokenKind, literal: Vec<u8>, pos: Position) {
        let token = Token::with_literal(kind, literal, pos, self.cursor.location());
        self.push(token);
    }

    fn push(&mut self, token: Token) {
        trace!(token = %token, "emit");
        self.tokens.push(token);
    }

    /// Notes that `what`, opened at `opened_at`, ran to the end of input.
    ///
    /// Nothing is emitted for the truncated construct.
    pub(crate) fn report_unterminated(&self, what: &str, opened_at: Position) {
        if self.warn_unterminated {
            warn!(construct = what, at = %opened_at, "unterminated at end of input");
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte offset in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Tokens recognized so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
