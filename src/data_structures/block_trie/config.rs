// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Block Trie.

use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::data_structures::block_trie::error::{BlockTrieError, Result};

/// Default upper bound on the alphabet size of a trie.
pub const DEFAULT_MAX_SYMBOLS: usize = 32;

/// Default number of nodes reserved per block.
pub const DEFAULT_BLOCK_CAPACITY: usize = 1_600;

/// Default maximum number of blocks a trie may reserve.
pub const DEFAULT_MAX_BLOCKS: usize = 4_096;

/// Largest single block a trie may reserve, in bytes.
pub const MAX_BLOCK_BYTES: usize = 1 << 30;

/// Storage limits for a Block Trie.
///
/// The limits are captured by each trie instance at construction, so tries
/// with different limits can coexist in one process. Together they bound the
/// worst-case memory of a trie: `max_blocks * block_capacity * node size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTrieConfig {
    /// Largest alphabet a trie built from this configuration accepts.
    pub max_symbols: usize,

    /// Number of node slots in every block.
    pub block_capacity: usize,

    /// Maximum number of blocks the allocator may reserve.
    pub max_blocks: usize,
}

impl BlockTrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest alphabet size accepted by the trie.
    pub fn with_max_symbols(mut self, max_symbols: usize) -> Self {
        self.max_symbols = max_symbols;
        self
    }

    /// Sets the number of nodes per block.
    pub fn with_block_capacity(mut self, block_capacity: usize) -> Self {
        self.block_capacity = block_capacity;
        self
    }

    /// Sets the maximum number of blocks.
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    /// Total node slots the allocator can ever hand out, root included.
    pub fn max_nodes(&self) -> usize {
        self.block_capacity.saturating_mul(self.max_blocks)
    }

    /// Checks the limits, and that a trie over `symbols` fits them.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the configuration can back a trie of that alphabet size.
    /// * `Err(BlockTrieError::InvalidConfiguration)` - Otherwise.
    pub fn validate_for(&self, symbols: usize) -> Result<()> {
        self.validate()?;

        if symbols == 0 {
            return Err(BlockTrieError::InvalidConfiguration(
                "alphabet size must be greater than 0".to_string(),
            ));
        }

        if symbols > self.max_symbols {
            return Err(BlockTrieError::InvalidConfiguration(format!(
                "alphabet size {} exceeds max_symbols {}",
                symbols, self.max_symbols
            )));
        }

        Ok(())
    }

    /// Checks the limits independently of any alphabet size.
    pub fn validate(&self) -> Result<()> {
        if self.max_symbols == 0 {
            return Err(BlockTrieError::InvalidConfiguration(
                "max_symbols must be greater than 0".to_string(),
            ));
        }

        if self.block_capacity == 0 {
            return Err(BlockTrieError::InvalidConfiguration(
                "block_capacity must be greater than 0".to_string(),
            ));
        }

        if self.max_blocks == 0 {
            return Err(BlockTrieError::InvalidConfiguration(
                "max_blocks must be greater than 0".to_string(),
            ));
        }

        // Node references are u32 indices.
        match self.block_capacity.checked_mul(self.max_blocks) {
            Some(total) if total <= u32::MAX as usize => {}
            _ => {
                return Err(BlockTrieError::InvalidConfiguration(format!(
                    "block_capacity * max_blocks exceeds {} nodes",
                    u32::MAX
                )))
            }
        }

        match self.max_block_bytes() {
            Some(bytes) if bytes <= MAX_BLOCK_BYTES => Ok(()),
            _ => Err(BlockTrieError::InvalidConfiguration(format!(
                "a block of {} nodes over {} symbols exceeds {} bytes",
                self.block_capacity, self.max_symbols, MAX_BLOCK_BYTES
            ))),
        }
    }

    /// Bytes of one block when the alphabet has `max_symbols` symbols.
    ///
    /// `None` if the size overflows `usize`.
    pub fn max_block_bytes(&self) -> Option<usize> {
        let node_bytes = self
            .max_symbols
            .checked_mul(size_of::<u32>())?
            .checked_add(size_of::<Option<u32>>())?;
        self.block_capacity.checked_mul(node_bytes)
    }
}

impl Default for BlockTrieConfig {
    fn default() -> Self {
        Self {
            max_symbols: DEFAULT_MAX_SYMBOLS,
            block_capacity: DEFAULT_BLOCK_CAPACITY,
            max_blocks: DEFAULT_MAX_BLOCKS,
        }
    }
}
