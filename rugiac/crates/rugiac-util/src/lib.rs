//! rugiac-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by the rugiac compiler phases:
//!
//! - [`trie`] - immutable byte-keyed prefix tree used to recognize operator
//!   and keyword lexemes with greedy longest-match
//! - [`ascii`] - ASCII byte classification for identifiers, digits and
//!   whitespace
//! - [`span`] - source positions carried by tokens
//!
//! None of these types hold shared mutable state. A [`PrefixTrie`] is built
//! once and only read afterwards, so a single instance can be shared by any
//! number of concurrent scans.

pub mod ascii;
pub mod span;
pub mod trie;

pub use span::Position;
pub use trie::{PrefixTrie, TrieMatch};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
