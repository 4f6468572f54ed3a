//! Number literal lexing.

use rugiac_util::ascii::is_digit;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal.
    ///
    /// Only runs of `0-9` are recognized: no sign, radix prefix, separator or
    /// fraction.
    pub(crate) fn lex_integer(&mut self) {
        let digits = self.cursor.eat_while(is_digit);
        self.emit_literal(TokenKind::IntLit, digits.to_vec(), self.token_start);
    }
}
