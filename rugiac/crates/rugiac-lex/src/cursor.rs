//! Byte cursor for traversing source buffers.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a fully materialized source buffer one byte at a time. It
//! keeps line/column information current so that every token can be stamped
//! with the position it starts at.
//!
//! Two different "nothing there" answers exist:
//!
//! - [`Cursor::current`] returning `None` means input is exhausted and the
//!   scan is over.
//! - [`Cursor::peek`] returning `None` only means no lookahead is available;
//!   the byte under the cursor is still there to be consumed.

use rugiac_util::Position;

/// A cursor over a source buffer.
///
/// The position never moves backwards.
///
/// # Example
///
/// ```
/// use rugiac_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"x\ny");
/// assert_eq!(cursor.current(), Some(b'x'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.column(), 0);
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Index of the next unread byte.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, reset on every new line).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the first byte of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// Returns the byte `offset` positions ahead of the cursor.
    ///
    /// `peek(0)` is the same as [`Cursor::current`].
    ///
    /// ```
    /// use rugiac_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"<=");
    /// assert_eq!(cursor.peek(1), Some(b'='));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Consumes and returns the byte under the cursor.
    ///
    /// A line feed moves to column 0 of the next line; any other byte moves one
    /// column right. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.current()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// Consumes up to `count` bytes.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes bytes while `predicate` holds and returns them.
    ///
    /// ```
    /// use rugiac_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"123+4");
    /// assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), b"123");
    /// assert_eq!(cursor.current(), Some(b'+'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> &'a [u8] {
        let start = self.position;
        while let Some(b) = self.current() {
            if !predicate(b) {
                break;
            }
            self.advance();
        }
        self.slice_from(start)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the line/column of the byte under the cursor.
    #[inline]
    pub fn location(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the current byte offset in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// Returns the unread remainder of the source.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// Returns the full source buffer.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}
