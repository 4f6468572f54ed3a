//! Comment lexing.
//!
//! A `/` opens a line comment, a block comment, or is the divide operator,
//! decided by one byte of lookahead.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes whatever starts with `/`.
    ///
    /// Handles: `//...`, `/* ... */`, `/`
    pub(crate) fn lex_slash(&mut self) {
        match self.cursor.peek(1) {
            Some(b'/') => self.skip_line_comment(),
            Some(b'*') => self.skip_block_comment(),
            _ => {
                self.cursor.advance();
                self.emit(TokenKind::Divide);
            }
        }
    }

    /// Skips a line comment up to, but not including, the line feed.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_while(|b| b != b'\n');
    }

    /// Skips a block comment. The first `*/` closes it.
    ///
    /// Every line feed inside the comment still produces an EndOfLine.
    fn skip_block_comment(&mut self) {
        let opened_at = self.token_start;
        self.cursor.advance_n(2);

        loop {
            match self.cursor.current() {
                None => {
                    self.report_unterminated("block comment", opened_at);
                    return;
                }
                Some(b'*') if self.cursor.peek(1) == Some(b'/') => {
                    self.cursor.advance_n(2);
                    return;
                }
                Some(b'\n') => self.lex_newline(),
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }
}
