//! Lexer configuration.
//!
//! [`LexerConfig`] can be built in code or loaded from a TOML file. Every
//! field has a default, so a partial (or empty) file is valid:
//!
//! ```toml
//! insert_terminators = true
//! warn_unterminated = false
//! max_source_bytes = 1048576
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LexError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "rugiac-lex.toml";

/// Settings for a single scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Run the statement terminator over the raw stream. When false,
    /// `tokenize` returns the raw stream with EndOfLine markers intact.
    #[serde(default = "default_true")]
    pub insert_terminators: bool,

    /// Log a warning when a string, raw string or block comment runs to the
    /// end of input. The token stream is the same either way.
    #[serde(default = "default_true")]
    pub warn_unterminated: bool,

    /// Largest source accepted by the reader wrapper, in bytes.
    #[serde(default)]
    pub max_source_bytes: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            insert_terminators: true,
            warn_unterminated: true,
            max_source_bytes: None,
        }
    }
}

impl LexerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| LexError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            LexError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }
}
