//! Error types for the rugiac lexer.
//!
//! Scanning itself never fails: running out of input simply ends the scan.
//! Errors only come from the surroundings of a scan, such as reading the
//! source or loading configuration.

use thiserror::Error;

/// Error type for lexer front-end operations.
#[derive(Error, Debug)]
pub enum LexError {
    /// Reading the source or a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is longer than the configured limit.
    #[error("Source exceeds the configured limit of {limit} bytes")]
    SourceTooLarge { limit: u64 },

    /// A configuration file could not be parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using LexError.
pub type Result<T> = std::result::Result<T, LexError>;
