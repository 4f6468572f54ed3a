//! ASCII byte classification for the rugiac lexer.
//!
//! The lexer works on raw bytes and recognizes only the ASCII letter, digit
//! and underscore ranges for identifiers. Bytes outside these ranges never
//! continue an identifier.

/// Checks if a byte is an ASCII decimal digit: `0-9`.
///
/// # Example
///
/// ```
/// use rugiac_util::ascii::is_digit;
///
/// assert!(is_digit(b'7'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is an ASCII letter: `a-z`, `A-Z`.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if a byte is the underscore.
#[inline]
pub const fn is_underscore(b: u8) -> bool {
    b == b'_'
}

/// Checks if a byte may continue an identifier: letter, digit or underscore.
///
/// # Example
///
/// ```
/// use rugiac_util::ascii::is_ident_continue;
///
/// assert!(is_ident_continue(b'x'));
/// assert!(is_ident_continue(b'_'));
/// assert!(is_ident_continue(b'9'));
/// assert!(!is_ident_continue(b'+'));
/// assert!(!is_ident_continue(0xCE)); // first byte of a UTF-8 'α'
/// ```
#[inline]
pub const fn is_ident_continue(b: u8) -> bool {
    is_alpha(b) || is_digit(b) || is_underscore(b)
}

/// Checks if a byte is insignificant whitespace.
///
/// Space, horizontal tab, carriage return, vertical tab and form feed.
/// The line feed is not whitespace here: it ends a line.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}
