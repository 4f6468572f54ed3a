//! Edge case tests for rugiac-lex
