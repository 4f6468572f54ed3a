//! Span module - Source location tracking.
//!
//! Tokens carry a [`Position`]: a 1-based line and a column that starts at 0
//! and resets to 0 on every new line.
//!
//! # Examples
//!
//! ```
//! use rugiac_util::span::Position;
//!
//! let pos = Position::start();
//! assert_eq!(pos.line, 1);
//! assert_eq!(pos.column, 0);
//!
//! let next = pos.offset_columns(3);
//! assert_eq!(next, Position::new(1, 3));
//! ```

use std::fmt;

/// A line/column location in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0-based, reset on every new line)
    pub column: u32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first byte of any source.
    #[inline]
    pub const fn start() -> Self {
        Self::new(1, 0)
    }

    /// The same line, `n` columns further right.
    #[inline]
    pub const fn offset_columns(self, n: u32) -> Self {
        Self::new(self.line, self.column + n)
    }

    /// The first column of the following line.
    #[inline]
    pub const fn next_line(self) -> Self {
        Self::new(self.line + 1, 0)
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}, C{}", self.line, self.column)
    }
}
