//! Identifier and keyword lexing.
//!
//! Anything the dispatch loop does not claim lands here. Operators are tried
//! first, then keywords; whatever a failed keyword attempt accumulated seeds
//! an identifier.

use rugiac_util::ascii::is_ident_continue;

use crate::token::{TokenKind, Vocabulary};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator, a keyword, or an identifier.
    pub(crate) fn lex_identifier_operator_or_keyword(&mut self) {
        if self.lex_operator() {
            return;
        }
        if let Some(seed) = self.lex_keyword() {
            self.lex_identifier(seed);
        }
    }

    /// Tries to read a keyword.
    ///
    /// Bytes are consumed only while the accumulated literal remains a
    /// keyword or a keyword prefix. A keyword followed by an identifier
    /// continuation byte is not a keyword (`returnX`).
    ///
    /// # Returns
    ///
    /// `None` if a keyword was emitted, otherwise the consumed bytes.
    fn lex_keyword(&mut self) -> Option<Vec<u8>> {
        let keywords = Vocabulary::keywords();
        let mut literal = Vec::new();

        while let Some(b) = self.cursor.current() {
            literal.push(b);
            let found = keywords.matches(&literal);

            if found.exact {
                self.cursor.advance();
                if self.cursor.current().is_some_and(is_ident_continue) {
                    return Some(literal);
                }
                return match keywords.kind_of(&literal) {
                    Some(kind) => {
                        self.emit(kind);
                        None
                    }
                    None => Some(literal),
                };
            }

            if !found.prefix {
                literal.pop();
                break;
            }
            self.cursor.advance();
        }

        Some(literal)
    }

    /// Extends `seed` with every following identifier byte and emits an
    /// Identifier.
    ///
    /// An empty seed takes the byte under the cursor, whatever it is.
    pub(crate) fn lex_identifier(&mut self, mut seed: Vec<u8>) {
        if seed.is_empty() {
            if let Some(b) = self.cursor.advance() {
                seed.push(b);
            }
        }
        seed.extend_from_slice(self.cursor.eat_while(is_ident_continue));
        self.emit_literal(TokenKind::Identifier, seed, self.token_start);
    }
}
