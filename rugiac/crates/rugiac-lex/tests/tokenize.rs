//! End-to-end tokenization tests.

use rugiac_lex::{terminator, tokenize, Lexer, Token, TokenKind};
use rugiac_util::Position;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_unrecognized_input_yields_only_trailing_terminator() {
    for source in [&b""[..], b"   ", b"\n\n", b"// just a comment", b"/* block */"] {
        let tokens = tokenize(source);
        assert_eq!(kinds(&tokens), vec![TokenKind::SemiColon], "{:?}", source);
    }
}

#[test]
fn test_pass_one_is_idempotent() {
    let raw = Lexer::new(b"a := b\n\n(c)\n}\n;\n;x\n").scan();
    let once = terminator::infer_boundaries(raw);
    let twice = terminator::infer_boundaries(once.clone());
    assert_eq!(once, twice);
    assert!(once.iter().all(|t| !t.is(TokenKind::EndOfLine)));
}

#[test]
fn test_shift_and_comparison_operators() {
    assert_eq!(kinds(&Lexer::new(b"<<").scan()), vec![TokenKind::LeftShift]);
    assert_eq!(kinds(&Lexer::new(b"<=").scan()), vec![TokenKind::LtEq]);

    let tokens = Lexer::new(b"<x").scan();
    assert_eq!(kinds(&tokens), vec![TokenKind::Lt, TokenKind::Identifier]);
    assert_eq!(tokens[1].literal_str(), Some("x"));
}

#[test]
fn test_return_versus_identifier() {
    assert_eq!(kinds(&Lexer::new(b"return").scan()), vec![TokenKind::Return]);

    let tokens = Lexer::new(b"returnX").scan();
    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier]);
    assert_eq!(tokens[0].literal_str(), Some("returnX"));
}

#[test]
fn test_two_statements_get_one_terminator_each() {
    let raw = Lexer::new(b"x = 1\ny = 2\n").scan();
    let inferred = terminator::infer_boundaries(raw);
    assert_eq!(
        kinds(&inferred),
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

    let finished = terminator::terminate_final(inferred.clone());
    assert_eq!(finished, inferred);
}

#[test]
fn test_three_line_raw_string_advances_two_lines() {
    let tokens = tokenize(b"s := `first\nsecond\nthird`\nnext");
    let raw = tokens
        .iter()
        .find(|t| t.is(TokenKind::StringLit))
        .map(|t| t.row());
    let next = tokens
        .iter()
        .find(|t| t.literal_str() == Some("next"))
        .map(|t| t.row());
    assert_eq!(raw, Some(1));
    assert_eq!(next, Some(1 + 2 + 1));

    let tokens = Lexer::new(b"`a\nb\nc` z").scan();
    assert_eq!(tokens[1].row(), tokens[0].row() + 2);
}

#[test]
fn test_line_comment_counts_one_line() {
    let tokens = tokenize(b"// header comment\nx := 1");
    assert_eq!(tokens[0].literal_str(), Some("x"));
    assert_eq!(tokens[0].pos, Position::new(2, 0));
    assert!(tokens.iter().all(|t| t.row() <= 2));
}

#[test]
fn test_stream_always_ends_in_terminator() {
    for source in [
        &b"x"[..],
        b"x;",
        b"if x {",
        b"f(\n",
        b"\"unterminated",
        b"/* unterminated",
    ] {
        let tokens = tokenize(source);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::SemiColon));
    }
}

#[test]
fn test_token_display_dump() {
    let dump: Vec<String> = tokenize(b"x := \"hi\"").iter().map(ToString::to_string).collect();
    assert_eq!(
        dump,
        vec![
            "(Identifier, \"x\", L1, C0)",
            "(ShortAssign, L1, C2)",
            "(StringLit, \"hi\", L1, C6)",
            "(SemiColon, L1, C9)",
        ]
    );
}
