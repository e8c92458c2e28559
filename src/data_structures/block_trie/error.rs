// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Block Trie.

/// Errors that can occur in Block Trie operations.
///
/// A missing key is not an error: lookups report it as `None`.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BlockTrieError {
    /// Every block the trie may reserve is full, so no node could be created
    #[error("Block allocator exhausted: all {max_blocks} blocks are in use")]
    Exhausted {
        /// The configured block limit that was reached.
        max_blocks: usize,
    },

    /// The trie limits or alphabet size are unusable
    #[error("Invalid trie configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for Block Trie operations
pub type Result<T> = std::result::Result<T, BlockTrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlockTrieError::Exhausted { max_blocks: 4 };
        assert_eq!(
            err.to_string(),
            "Block allocator exhausted: all 4 blocks are in use"
        );

        let err = BlockTrieError::InvalidConfiguration("bad".to_string());
        assert_eq!(err.to_string(), "Invalid trie configuration: bad");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            BlockTrieError::Exhausted { max_blocks: 1 },
            BlockTrieError::Exhausted { max_blocks: 1 }
        );
        assert_ne!(
            BlockTrieError::Exhausted { max_blocks: 1 },
            BlockTrieError::Exhausted { max_blocks: 2 }
        );
    }
}
