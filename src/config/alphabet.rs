//! Alphabet configuration module.
//!
//! This module defines which input bytes become trie symbols.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Alphabet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetConfig {
    /// Bytes of the alphabet; the position of a byte is its symbol index
    pub symbols: String,

    /// Whether ASCII letters of either case share a symbol
    pub case_insensitive: bool,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            symbols: "abcdefghijklmnopqrstuvwxyz".to_string(),
            case_insensitive: true,
        }
    }
}

impl Validate for AlphabetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.symbols.is_empty() {
            return Err(ConfigError::ValidationError(
                "alphabet.symbols must not be empty".to_string(),
            ));
        }

        if self.symbols.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::ValueOutOfRange {
                key: "alphabet.symbols".to_string(),
                message: format!("{} bytes, at most 256 allowed", self.symbols.len()),
            });
        }

        Ok(())
    }
}
