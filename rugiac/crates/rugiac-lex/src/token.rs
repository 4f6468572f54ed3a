//! Token definitions and the operator/keyword vocabularies.
//!
//! Every token produced by the lexer carries a [`TokenKind`], an optional
//! literal payload copied out of the source buffer, and the position where
//! it starts and ends. Operator and keyword lexemes are recognized through
//! two process-wide [`Vocabulary`] values, each backed by a [`PrefixTrie`].

use std::fmt;
use std::sync::OnceLock;

use rugiac_util::trie::{PrefixTrie, TrieMatch};
use rugiac_util::{FxHashMap, Position};

/// Classification of a lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Arithmetic
    Plus,
    Minus,
    Mul,
    Divide,
    Mod,

    // Assignment
    Assign,
    ShortAssign,

    // Comparison
    Eq,
    Not,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Terminators
    SemiColon,
    /// Source line break. Only present in the raw stream; the statement
    /// terminator removes every one of them.
    EndOfLine,

    // Brackets
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,

    // Punctuation
    Comma,
    Colon,
    Period,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LeftShift,
    RightShift,

    // Boolean
    And,
    Or,

    // Keywords
    Break,
    Case,
    Const,
    Continue,
    Default,
    Else,
    For,
    Func,
    Goto,
    If,
    Import,
    Map,
    Package,
    Range,
    Return,
    Struct,
    Switch,
    Type,
    Var,

    // Literals
    RuneLit,
    StringLit,
    IntLit,
    /// Reserved. No scanning path produces float literals.
    FloatLit,

    Identifier,
}

/// Every kind spelled by an operator lexeme.
pub const OPERATOR_KINDS: [TokenKind; 31] = [
    TokenKind::Period,
    TokenKind::Comma,
    TokenKind::ShortAssign,
    TokenKind::Colon,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Mul,
    TokenKind::Mod,
    TokenKind::SemiColon,
    TokenKind::Divide,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::OpenBracket,
    TokenKind::CloseBracket,
    TokenKind::OpenBrace,
    TokenKind::CloseBrace,
    TokenKind::LeftShift,
    TokenKind::LtEq,
    TokenKind::Lt,
    TokenKind::RightShift,
    TokenKind::GtEq,
    TokenKind::Gt,
    TokenKind::Eq,
    TokenKind::Assign,
    TokenKind::NotEq,
    TokenKind::Not,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::BitwiseAnd,
    TokenKind::BitwiseOr,
    TokenKind::BitwiseXor,
];

/// Every kind spelled by a keyword lexeme.
///
/// No keyword is a byte-extension of another; keyword resolution stops at the
/// first exact match and relies on this.
pub const KEYWORD_KINDS: [TokenKind; 19] = [
    TokenKind::Break,
    TokenKind::Case,
    TokenKind::Const,
    TokenKind::Continue,
    TokenKind::Default,
    TokenKind::Else,
    TokenKind::For,
    TokenKind::Func,
    TokenKind::Goto,
    TokenKind::If,
    TokenKind::Import,
    TokenKind::Map,
    TokenKind::Package,
    TokenKind::Range,
    TokenKind::Return,
    TokenKind::Struct,
    TokenKind::Switch,
    TokenKind::Type,
    TokenKind::Var,
];

impl TokenKind {
    /// The fixed spelling of operator and keyword kinds.
    pub const fn lexeme(self) -> Option<&'static str> {
        use TokenKind::*;
        let text = match self {
            Plus => "+",
            Minus => "-",
            Mul => "*",
            Divide => "/",
            Mod => "%",
            Assign => "=",
            ShortAssign => ":=",
            Eq => "==",
            Not => "!",
            NotEq => "!=",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            SemiColon => ";",
            OpenParen => "(",
            CloseParen => ")",
            OpenBrace => "{",
            CloseBrace => "}",
            OpenBracket => "[",
            CloseBracket => "]",
            Comma => ",",
            Colon => ":",
            Period => ".",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            LeftShift => "<<",
            RightShift => ">>",
            And => "&&",
            Or => "||",
            Break => "break",
            Case => "case",
            Const => "const",
            Continue => "continue",
            Default => "default",
            Else => "else",
            For => "for",
            Func => "func",
            Goto => "goto",
            If => "if",
            Import => "import",
            Map => "map",
            Package => "package",
            Range => "range",
            Return => "return",
            Struct => "struct",
            Switch => "switch",
            Type => "type",
            Var => "var",
            EndOfLine | RuneLit | StringLit | IntLit | FloatLit | Identifier => return None,
        };
        Some(text)
    }

    /// Returns true if a line break right after a token of this kind ends the
    /// statement.
    pub const fn ends_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntLit
                | TokenKind::RuneLit
                | TokenKind::FloatLit
                | TokenKind::StringLit
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Return
                | TokenKind::CloseBrace
                | TokenKind::CloseBracket
                | TokenKind::CloseParen
        )
    }

    /// Returns true for the reserved words.
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::Break as u8) && (self as u8) <= (TokenKind::Var as u8)
    }

    /// Returns true for kinds whose tokens carry a literal payload.
    pub const fn has_literal(self) -> bool {
        matches!(
            self,
            TokenKind::RuneLit
                | TokenKind::StringLit
                | TokenKind::IntLit
                | TokenKind::FloatLit
                | TokenKind::Identifier
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => f.write_str(text),
            None => write!(f, "{:?}", self),
        }
    }
}

/// A classified lexical unit.
///
/// `literal` is an owned copy of the source bytes, so the source buffer can be
/// dropped once scanning finishes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<Vec<u8>>,
    /// Where the token starts. For string literals this is the first content
    /// byte, after the opening delimiter.
    pub pos: Position,
    /// The position just past the token's last byte.
    pub end: Position,
}

impl Token {
    /// Creates a token without a literal payload.
    pub fn new(kind: TokenKind, pos: Position, end: Position) -> Self {
        Self {
            kind,
            literal: None,
            pos,
            end,
        }
    }

    /// Creates a token carrying `literal`.
    pub fn with_literal(kind: TokenKind, literal: Vec<u8>, pos: Position, end: Position) -> Self {
        Self {
            kind,
            literal: Some(literal),
            pos,
            end,
        }
    }

    /// A zero-width SemiColon inserted at `at`.
    pub fn terminator_at(at: Position) -> Self {
        Self::new(TokenKind::SemiColon, at, at)
    }

    /// 1-based line the token starts on.
    #[inline]
    pub fn row(&self) -> u32 {
        self.pos.line
    }

    /// Column the token starts at, counted from 0 on its line.
    #[inline]
    pub fn col(&self) -> u32 {
        self.pos.column
    }

    /// The literal payload as UTF-8, if present and valid.
    pub fn literal_str(&self) -> Option<&str> {
        self.literal
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}", self.kind)?;
        if let Some(literal) = &self.literal {
            write!(f, ", {:?}", String::from_utf8_lossy(literal))?;
        }
        write!(f, ", {})", self.pos)
    }
}

/// A fixed set of lexemes: the trie that drives longest-match decisions plus
/// the lexeme-to-kind table used once a match is final.
#[derive(Debug)]
pub struct Vocabulary {
    trie: PrefixTrie,
    kinds: FxHashMap<&'static [u8], TokenKind>,
}

impl Vocabulary {
    /// Builds a vocabulary from kinds that all have a lexeme.
    pub fn from_kinds(kinds: &[TokenKind]) -> Self {
        let mut trie = PrefixTrie::new();
        let mut table = FxHashMap::default();
        for (kind, text) in kinds.iter().filter_map(|k| k.lexeme().map(|t| (*k, t))) {
            trie.insert(text.as_bytes());
            table.insert(text.as_bytes(), kind);
        }
        Self { trie, kinds: table }
    }

    /// The operator vocabulary, built on first use and shared afterwards.
    pub fn operators() -> &'static Vocabulary {
        static OPERATORS: OnceLock<Vocabulary> = OnceLock::new();
        OPERATORS.get_or_init(|| Vocabulary::from_kinds(&OPERATOR_KINDS))
    }

    /// The keyword vocabulary, built on first use and shared afterwards.
    pub fn keywords() -> &'static Vocabulary {
        static KEYWORDS: OnceLock<Vocabulary> = OnceLock::new();
        KEYWORDS.get_or_init(|| Vocabulary::from_kinds(&KEYWORD_KINDS))
    }

    #[inline]
    pub fn matches(&self, candidate: &[u8]) -> TrieMatch {
        self.trie.matches(candidate)
    }

    /// The kind spelled exactly by `lexeme`.
    #[inline]
    pub fn kind_of(&self, lexeme: &[u8]) -> Option<TokenKind> {
        self.kinds.get(lexeme).copied()
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
