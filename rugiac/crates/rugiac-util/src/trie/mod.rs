//! PrefixTrie - A byte-keyed prefix tree over a fixed vocabulary.
//!
//! This module provides [`PrefixTrie`], the structure the lexer uses to decide
//! whether a run of bytes spells an operator or keyword, and whether reading
//! further bytes could still produce a longer lexeme.
//!
//! # Example
//!
//! ```
//! use rugiac_util::trie::{PrefixTrie, TrieMatch};
//!
//! let trie = PrefixTrie::from_words(["<", "<<", "<="]);
//!
//! assert_eq!(trie.matches(b"<"), TrieMatch { exact: true, prefix: true });
//! assert_eq!(trie.matches(b"<<"), TrieMatch { exact: true, prefix: false });
//! assert_eq!(trie.matches(b">"), TrieMatch::NONE);
//! ```

use rustc_hash::FxHashMap;

/// Result of looking a candidate byte sequence up in a [`PrefixTrie`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrieMatch {
    /// The candidate spells a stored word exactly.
    pub exact: bool,
    /// The candidate is a strict prefix of at least one longer stored word.
    pub prefix: bool,
}

impl TrieMatch {
    /// Neither an exact match nor a prefix of anything stored.
    pub const NONE: TrieMatch = TrieMatch {
        exact: false,
        prefix: false,
    };

    /// Returns true if the candidate is a word or could still grow into one.
    #[inline]
    pub const fn is_viable(self) -> bool {
        self.exact || self.prefix
    }

    /// Returns true for an exact match that no longer word extends.
    #[inline]
    pub const fn is_final(self) -> bool {
        self.exact && !self.prefix
    }
}

/// Immutable-after-construction prefix tree keyed by bytes.
///
/// Each node maps a byte to a child node and carries a terminal flag that is
/// set when a vocabulary word ends exactly at that node. The tree owns its
/// children recursively; there is no sharing and no interior mutability, so
/// `&PrefixTrie` is `Send + Sync` and may be read by concurrent scans.
#[derive(Clone, Debug, Default)]
pub struct PrefixTrie {
    children: FxHashMap<u8, PrefixTrie>,
    terminal: bool,
}

impl PrefixTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie holding every word of `words`.
    ///
    /// # Example
    ///
    /// ```
    /// use rugiac_util::trie::PrefixTrie;
    ///
    /// let trie = PrefixTrie::from_words(["if", "import"]);
    /// assert!(trie.contains(b"if"));
    /// assert!(!trie.contains(b"im"));
    /// ```
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Adds `word` to the vocabulary.
    ///
    /// Inserting the empty word marks the root as terminal.
    pub fn insert(&mut self, word: &[u8]) {
        let mut node = self;
        for &byte in word {
            node = node.children.entry(byte).or_default();
        }
        node.terminal = true;
    }

    /// Looks `candidate` up and reports whether it is a stored word and/or a
    /// strict prefix of a longer stored word.
    ///
    /// A candidate that leaves the tree at any byte yields [`TrieMatch::NONE`].
    pub fn matches(&self, candidate: &[u8]) -> TrieMatch {
        match self.walk(candidate) {
            Some(node) => TrieMatch {
                exact: node.terminal,
                prefix: !node.children.is_empty(),
            },
            None => TrieMatch::NONE,
        }
    }

    /// Returns true if `word` is stored exactly.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.matches(word).exact
    }

    /// Returns true if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// Number of words stored in the trie.
    pub fn len(&self) -> usize {
        let own = usize::from(self.terminal);
        own + self.children.values().map(PrefixTrie::len).sum::<usize>()
    }

    /// Returns true if some stored word is a strict prefix of another stored
    /// word, e.g. `<` and `<<`.
    pub fn has_nested_words(&self) -> bool {
        if self.terminal && !self.children.is_empty() {
            return true;
        }
        self.children.values().any(PrefixTrie::has_nested_words)
    }

    fn walk(&self, candidate: &[u8]) -> Option<&PrefixTrie> {
        let mut node = self;
        for byte in candidate {
            node = node.children.get(byte)?;
        }
        Some(node)
    }
}

impl<W: AsRef<[u8]>> FromIterator<W> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
