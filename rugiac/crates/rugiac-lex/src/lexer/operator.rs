//! Operator and punctuation lexing.
//!
//! Operators are looked up in the operator vocabulary with greedy
//! longest-match, capped at two bytes.

use crate::token::Vocabulary;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator at the cursor.
    ///
    /// Returns false, consuming nothing, if the byte under the cursor does
    /// not start any operator.
    ///
    /// Handles: `<` `<<` `<=`, `>` `>>` `>=`, `=` `==`, `!` `!=`, `:` `:=`,
    /// `&` `&&`, `|` `||`, and every single-byte operator.
    pub(crate) fn lex_operator(&mut self) -> bool {
        let operators = Vocabulary::operators();
        let Some(first) = self.cursor.current() else {
            return false;
        };

        let single = operators.matches(&[first]);
        if !single.is_viable() {
            return false;
        }

        if single.prefix {
            if let Some(second) = self.cursor.peek(1) {
                let pair = [first, second];
                if operators.matches(&pair).exact {
                    if let Some(kind) = operators.kind_of(&pair) {
                        self.cursor.advance_n(2);
                        self.emit(kind);
                        return true;
                    }
                }
            }
        }

        match operators.kind_of(&[first]) {
            Some(kind) => {
                self.cursor.advance();
                self.emit(kind);
                true
            }
            None => false,
        }
    }
}
