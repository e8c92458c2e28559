//! Alphabet error module.
//!
//! This module defines error types raised while building an alphabet or
//! mapping input bytes to trie symbols.

use thiserror::Error;

/// Errors that can occur while defining or applying an alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Error when the alphabet defines no symbol at all.
    #[error("Alphabet is empty")]
    Empty,

    /// Error when the same byte is listed twice.
    #[error("Byte {byte:#04x} appears more than once in the alphabet")]
    DuplicateByte {
        /// The repeated byte.
        byte: u8,
    },

    /// Error when the alphabet has more symbols than a trie can index.
    #[error("Alphabet has {size} symbols but the trie accepts at most {max}")]
    TooLarge {
        /// Number of symbols in the alphabet.
        size: usize,
        /// Largest alphabet accepted.
        max: usize,
    },

    /// Error when an input byte has no symbol.
    #[error("Byte {byte:#04x} at position {position} is not in the alphabet")]
    UnmappedByte {
        /// The rejected byte.
        byte: u8,
        /// Offset of the byte in its key.
        position: usize,
    },
}
