//! Byte to symbol mapping.
//!
//! A trie only understands symbol indices in `[0, symbols)`. An [`Alphabet`]
//! turns raw input bytes into such indices and rejects bytes it does not
//! know, so out-of-range symbols never reach the trie.

use crate::config::AlphabetConfig;
use crate::error::AlphabetError;

/// A total, deterministic map from bytes to trie symbols.
///
/// The symbol of a byte is its position in the alphabet definition.
///
/// # Examples
///
/// ```
/// use jivaro_lib::alphabet::Alphabet;
///
/// let alphabet = Alphabet::new(b"acgt", true).unwrap();
/// assert_eq!(alphabet.encode(b"GATTACA").unwrap(), vec![2, 0, 3, 3, 0, 1, 0]);
/// assert!(alphabet.encode(b"GATTAXA").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    table: [Option<u8>; 256],
    size: usize,
}

impl Alphabet {
    /// Builds an alphabet from its symbol bytes.
    ///
    /// With `case_insensitive`, both cases of an ASCII letter map to the
    /// symbol of whichever case is listed.
    pub fn new(symbols: &[u8], case_insensitive: bool) -> Result<Self, AlphabetError> {
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        if symbols.len() > 256 {
            return Err(AlphabetError::TooLarge {
                size: symbols.len(),
                max: 256,
            });
        }

        let mut table = [None; 256];
        for (index, &byte) in symbols.iter().enumerate() {
            let symbol = Some(index as u8);

            let mut bytes = vec![byte];
            if case_insensitive && byte.is_ascii_alphabetic() {
                bytes.push(byte ^ 0x20);
            }

            for b in bytes {
                if table[b as usize].is_some() {
                    return Err(AlphabetError::DuplicateByte { byte });
                }
                table[b as usize] = symbol;
            }
        }

        Ok(Self {
            table,
            size: symbols.len(),
        })
    }

    /// Builds the alphabet described by a configuration section.
    pub fn from_config(config: &AlphabetConfig) -> Result<Self, AlphabetError> {
        Self::new(config.symbols.as_bytes(), config.case_insensitive)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always false; an alphabet has at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the symbol of `byte`, if it belongs to the alphabet.
    pub fn symbol(&self, byte: u8) -> Option<u8> {
        self.table[byte as usize]
    }

    /// Maps every byte of `key` to its symbol.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The symbol sequence, ready for the trie.
    /// * `Err(AlphabetError::UnmappedByte)` - For the first byte outside the alphabet.
    pub fn encode(&self, key: &[u8]) -> Result<Vec<u8>, AlphabetError> {
        key.iter()
            .enumerate()
            .map(|(position, &byte)| {
                self.symbol(byte)
                    .ok_or(AlphabetError::UnmappedByte { byte, position })
            })
            .collect()
    }

    /// Checks that every symbol is a valid index for a trie of `symbols` symbols.
    pub fn check_fits(&self, symbols: usize) -> Result<(), AlphabetError> {
        if self.size > symbols {
            return Err(AlphabetError::TooLarge {
                size: self.size,
                max: symbols,
            });
        }
        Ok(())
    }
}
