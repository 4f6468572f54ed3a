//! Statement terminator inference.
//!
//! The raw stream from [`Lexer::scan`](crate::Lexer::scan) keeps every line
//! break as an [`EndOfLine`](TokenKind::EndOfLine) token. Two passes turn it
//! into the stream a parser consumes:
//!
//! 1. [`infer_boundaries`] rewrites a line break into a SemiColon when the
//!    token before it can end a statement, drops every other line break, and
//!    merges adjacent SemiColons.
//! 2. [`terminate_final`] makes sure the stream ends in a SemiColon.
//!
//! Both passes are iterative and run in time linear in the stream length.

use rugiac_util::Position;
use tracing::debug;

use crate::token::{Token, TokenKind};

/// Pass 1: infers statement boundaries at line breaks.
///
/// The output contains no EndOfLine tokens and no two adjacent SemiColons,
/// so running this pass on its own output changes nothing.
///
/// # Example
///
/// ```
/// use rugiac_lex::{terminator, Lexer, TokenKind};
///
/// let raw = Lexer::new(b"x = 1\n\n\ny = 2\n").scan();
/// let kinds: Vec<_> = terminator::infer_boundaries(raw).iter().map(|t| t.kind).collect();
/// assert_eq!(kinds.iter().filter(|k| **k == TokenKind::SemiColon).count(), 2);
/// ```
pub fn infer_boundaries(tokens: Vec<Token>) -> Vec<Token> {
    let raw = tokens.len();
    let mut out: Vec<Token> = Vec::with_capacity(raw);
    let mut inserted = 0usize;

    for mut token in tokens {
        match token.kind {
            TokenKind::EndOfLine => {
                let Some(prev) = out.last() else {
                    continue;
                };
                if !prev.kind.ends_statement() {
                    continue;
                }
                let at = prev.end;
                token.kind = TokenKind::SemiColon;
                token.pos = at;
                token.end = at;
                out.push(token);
                inserted += 1;
            }
            TokenKind::SemiColon if out.last().is_some_and(|t| t.is(TokenKind::SemiColon)) => {
                if let Some(last) = out.last_mut() {
                    *last = token;
                }
            }
            _ => out.push(token),
        }
    }

    debug!(raw, out = out.len(), inserted, "boundaries inferred");
    out
}

/// Pass 2: guarantees the stream ends in a SemiColon.
///
/// A missing terminator is placed just past the last token. An empty stream
/// gets one at the start of the source.
pub fn terminate_final(mut tokens: Vec<Token>) -> Vec<Token> {
    match tokens.last() {
        Some(last) if last.is(TokenKind::SemiColon) => {}
        Some(last) => {
            let at = last.end;
            debug!(at = %at, "trailing terminator appended");
            tokens.push(Token::terminator_at(at));
        }
        None => tokens.push(Token::terminator_at(Position::start())),
    }
    tokens
}

/// Runs both passes.
pub fn terminate(tokens: Vec<Token>) -> Vec<Token> {
    terminate_final(infer_boundaries(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexer;

    fn tok(kind: TokenKind, line: u32, column: u32, width: u32) -> Token {
        let pos = Position::new(line, column);
        Token::new(kind, pos, pos.offset_columns(width))
    }

    fn eol(line: u32) -> Token {
        tok(TokenKind::EndOfLine, line, 0, 0)
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_leading_line_breaks_dropped() {
        let out = infer_boundaries(vec![eol(2), eol(3), tok(TokenKind::Return, 3, 0, 6)]);
        assert_eq!(kinds(&out), vec![TokenKind::Return]);
    }

    #[test]
    fn test_line_break_after_terminating_kind() {
        let out = infer_boundaries(vec![tok(TokenKind::CloseBrace, 1, 4, 1), eol(2)]);
        assert_eq!(kinds(&out), vec![TokenKind::CloseBrace, TokenKind::SemiColon]);
        assert_eq!(out[1].pos, Position::new(1, 5));
        assert_eq!(out[1].end, Position::new(1, 5));
    }

    #[test]
    fn test_line_break_after_other_kind_dropped() {
        let out = infer_boundaries(vec![
            tok(TokenKind::Plus, 1, 0, 1),
            eol(2),
            tok(TokenKind::OpenBrace, 2, 0, 1),
            eol(3),
        ]);
        assert_eq!(kinds(&out), vec![TokenKind::Plus, TokenKind::OpenBrace]);
    }

    #[test]
    fn test_blank_lines_collapse_to_one_terminator() {
        let out = infer_boundaries(vec![
            tok(TokenKind::Identifier, 1, 0, 1),
            eol(2),
            eol(3),
            eol(4),
        ]);
        assert_eq!(kinds(&out), vec![TokenKind::Identifier, TokenKind::SemiColon]);
    }

    #[test]
    fn test_explicit_semicolons_merge() {
        let out = infer_boundaries(vec![
            tok(TokenKind::Identifier, 1, 0, 1),
            tok(TokenKind::SemiColon, 1, 1, 1),
            tok(TokenKind::SemiColon, 1, 2, 1),
            eol(2),
        ]);
        assert_eq!(kinds(&out), vec![TokenKind::Identifier, TokenKind::SemiColon]);
        assert_eq!(out[1].pos, Position::new(1, 2));
    }

    #[test]
    fn test_explicit_semicolon_after_inferred_one() {
        let out = infer_boundaries(vec![
            tok(TokenKind::IntLit, 1, 0, 1),
            eol(2),
            tok(TokenKind::SemiColon, 2, 0, 1),
        ]);
        assert_eq!(kinds(&out), vec![TokenKind::IntLit, TokenKind::SemiColon]);
    }

    #[test]
    fn test_every_terminating_kind() {
        for kind in [
            TokenKind::Identifier,
            TokenKind::IntLit,
            TokenKind::RuneLit,
            TokenKind::FloatLit,
            TokenKind::StringLit,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Return,
            TokenKind::CloseBrace,
            TokenKind::CloseBracket,
            TokenKind::CloseParen,
        ] {
            let out = infer_boundaries(vec![tok(kind, 1, 0, 1), eol(2)]);
            assert_eq!(out.len(), 2, "{:?}", kind);
        }
    }

    #[test]
    fn test_terminate_final_appends_past_last_token() {
        let out = terminate_final(vec![tok(TokenKind::Identifier, 4, 2, 3)]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].kind, TokenKind::SemiColon);
        assert_eq!(out[1].pos, Position::new(4, 5));
    }

    #[test]
    fn test_terminate_final_keeps_existing_terminator() {
        let input = vec![tok(TokenKind::Identifier, 1, 0, 1), tok(TokenKind::SemiColon, 1, 1, 0)];
        assert_eq!(terminate_final(input.clone()), input);
    }

    #[test]
    fn test_terminate_final_on_empty_stream() {
        let out = terminate_final(Vec::new());
        assert_eq!(out, vec![Token::terminator_at(Position::start())]);
    }

    #[test]
    fn test_terminate_on_scanned_source() {
        let out = terminate(Lexer::new(b"x = 1\ny = 2\n").scan());
        assert_eq!(
            kinds(&out),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntLit,
                TokenKind::SemiColon,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntLit,
                TokenKind::SemiColon,
            ]
        );
        assert_eq!(out[3].pos, Position::new(1, 5));
        assert_eq!(out[7].pos, Position::new(2, 5));
    }

    proptest::proptest! {
        #[test]
        fn test_property_infer_boundaries_is_idempotent(source in "[a-z0-9 +(){};\n]{0,64}") {
            let once = infer_boundaries(Lexer::new(source.as_bytes()).scan());
            let twice = infer_boundaries(once.clone());
            proptest::prop_assert_eq!(&once, &twice);
            proptest::prop_assert!(once.iter().all(|t| !t.is(TokenKind::EndOfLine)));
            proptest::prop_assert!(once
                .windows(2)
                .all(|w| !(w[0].is(TokenKind::SemiColon) && w[1].is(TokenKind::SemiColon))));
        }

        #[test]
        fn test_property_terminate_ends_in_semicolon(source in "[a-z0-9 +(){};\n]{0,64}") {
            let out = terminate(Lexer::new(source.as_bytes()).scan());
            proptest::prop_assert!(out.last().is_some_and(|t| t.is(TokenKind::SemiColon)));
        }
    }
}
