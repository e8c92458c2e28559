//! Trie limits configuration module.
//!
//! The limits themselves are [`BlockTrieConfig`]; this module hooks them into
//! configuration validation.

use super::{ConfigResult, Validate};
use crate::data_structures::block_trie::BlockTrieConfig;
use crate::error::config::ConfigError;

impl Validate for BlockTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        BlockTrieConfig::validate(self)
            .map_err(|e| ConfigError::ValidationError(format!("trie: {e}")))
    }
}
