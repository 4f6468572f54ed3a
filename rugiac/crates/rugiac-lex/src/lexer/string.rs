//! String literal lexing.
//!
//! Both string forms are taken verbatim: there are no escape sequences, and
//! the emitted literal excludes the delimiters.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"`-delimited string.
    pub(crate) fn lex_interpreted_string(&mut self) {
        self.lex_delimited(b'"', "string literal");
    }

    /// Lexes a `` ` ``-delimited raw string.
    pub(crate) fn lex_raw_string(&mut self) {
        self.lex_delimited(b'`', "raw string literal");
    }

    /// Consumes everything up to the next `delim`.
    ///
    /// Line feeds inside the literal move the cursor to the next line but do
    /// not produce EndOfLine tokens. If input runs out first, nothing is
    /// emitted.
    fn lex_delimited(&mut self, delim: u8, what: &str) {
        let opened_at = self.token_start;
        self.cursor.advance();

        let content_start = self.cursor.location();
        let content = self.cursor.eat_while(|b| b != delim);

        if self.cursor.current().is_none() {
            self.report_unterminated(what, opened_at);
            return;
        }

        self.cursor.advance();
        self.emit_literal(TokenKind::StringLit, content.to_vec(), content_start);
    }
}
