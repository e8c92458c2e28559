//! Jivaro Library
//!
//! This library contains a block-allocated, fixed-alphabet trie together with
//! the pieces needed to feed it: an alphabet that maps bytes to symbols, a
//! dictionary loader, and a configuration layer. The library is designed to
//! be used by the `jivaro` binary, but can also be used as a dependency by
//! matching components that need cheap inserts and cache-friendly lookups.
//!
//! # Architecture
//!
//! - [`data_structures::block_trie`]: block allocator and trie engine
//! - [`alphabet`]: byte to symbol mapping, validated before insertion
//! - [`dictionary`]: `key value` text files loaded into a trie
//! - [`config`]: file and environment configuration
//! - [`error`]: crate-level error type

pub mod alphabet;
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Jivaro.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use alphabet::Alphabet;
use config::JivaroConfig;
use data_structures::block_trie::BlockTrie;
use error::JivaroResult;

/// Builds an empty trie and its alphabet from a validated configuration.
///
/// The trie's alphabet size is the number of alphabet symbols.
pub fn build_trie(config: &JivaroConfig) -> JivaroResult<(BlockTrie, Alphabet)> {
    let alphabet = Alphabet::from_config(&config.alphabet)?;
    let trie = BlockTrie::with_config(alphabet.len(), config.trie.clone())?;
    Ok((trie, alphabet))
}
