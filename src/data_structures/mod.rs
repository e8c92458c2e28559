//! Data structures for Jivaro.
//!
//! This module contains specialized data structures optimized for
//! high-throughput matching components. All implementations adhere to
//! the project requirements:
//! - No unsafe code
//! - No per-operation heap allocation on hot paths
//! - Cache-aware memory layout

pub mod block_trie;

// Re-export common data structures
pub use block_trie::{BlockTrie, BlockTrieConfig, BlockTrieError, SharedBlockTrie};
