//! Dictionary error module.
//!
//! This module defines error types that may occur while reading a dictionary
//! file into a trie.

use thiserror::Error;

use super::alphabet::AlphabetError;
use crate::data_structures::block_trie::BlockTrieError;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when a line cannot be parsed as `key value`.
    #[error("Malformed dictionary line {line}: {reason}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },

    /// Error when a key contains bytes outside the alphabet.
    #[error("Dictionary line {line}: {source}")]
    Key {
        /// One-based line number.
        line: usize,
        /// The alphabet failure.
        #[source]
        source: AlphabetError,
    },

    /// Error when the trie cannot store a key.
    #[error("Dictionary line {line}: {source}")]
    Trie {
        /// One-based line number.
        line: usize,
        /// The trie failure.
        #[source]
        source: BlockTrieError,
    },

    /// Error when the alphabet has more symbols than the trie.
    #[error("Dictionary alphabet does not fit the trie: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Error when a line cannot be read, e.g. invalid UTF-8.
    #[error("Failed to read dictionary line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// The read failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when the dictionary cannot be opened.
    #[error("Failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}
