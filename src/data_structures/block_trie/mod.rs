// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Block Trie: a fixed-alphabet trie backed by a block allocator.
//!
//! The trie associates `u32` values with symbol sequences. Its nodes are
//! handed out from large, zero-initialized blocks instead of being allocated
//! one by one, which keeps insertion free of per-node heap traffic and keeps
//! nodes created together close in memory.
//!
//! # Features
//!
//! - Per-instance limits: alphabet size, nodes per block, maximum block count.
//! - Forward, reverse, NUL-terminated and pair-sequence key variants sharing one traversal.
//! - Allocation failure surfaces as [`BlockTrieError::Exhausted`]; lookups never fail.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use jivaro_lib::data_structures::block_trie::{BlockTrie, BlockTrieConfig, Pair};
//!
//! let config = BlockTrieConfig::new().with_block_capacity(64).with_max_blocks(4);
//! let mut trie = BlockTrie::with_config(4, config).unwrap();
//!
//! trie.define(&[1, 2, 3], 42).unwrap();
//! trie.define_reverse(&[0, 1], 7).unwrap();
//!
//! assert_eq!(trie.defined(&[1, 2, 3]), Some(42));
//! assert_eq!(trie.defined_reverse(&[0, 1]), Some(7));
//! assert_eq!(trie.defined(&[0, 1]), None);
//!
//! // Pair sequences are read through their symbol index.
//! let pairs = [Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")];
//! assert_eq!(trie.defined_pair(&pairs), Some(42));
//! ```

// Module declarations
mod block;
mod config;
mod error;
mod shared;
mod symbol;
mod trie;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::{
    BlockTrieConfig, DEFAULT_BLOCK_CAPACITY, DEFAULT_MAX_BLOCKS, DEFAULT_MAX_SYMBOLS, MAX_BLOCK_BYTES,
};
pub use error::{BlockTrieError, Result};
pub use shared::SharedBlockTrie;
pub use symbol::{Pair, SymbolIndexed};
pub use trie::{BlockTrie, TrieStats};
