//! Dictionary files.
//!
//! A dictionary is a text file with one `key value` pair per line, separated
//! by whitespace. Blank lines and lines starting with `#` are skipped. Keys
//! are mapped to symbols through an [`Alphabet`] before they reach the trie.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::{debug, info};

use crate::alphabet::Alphabet;
use crate::data_structures::block_trie::BlockTrie;
use crate::error::DictionaryError;

/// One `key value` line of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Raw key bytes, before symbol mapping.
    pub key: String,

    /// Value associated with the key.
    pub value: u32,

    /// One-based line number in the source.
    pub line: usize,
}

/// Iterator over the entries of a dictionary source.
#[derive(Debug)]
pub struct Dictionary<R> {
    lines: Lines<R>,
    line: usize,
}

impl Dictionary<BufReader<File>> {
    /// Opens a dictionary file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "Opened dictionary");
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Dictionary<R> {
    /// Reads a dictionary from any buffered source.
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Dictionary<R> {
    type Item = Result<DictionaryEntry, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let read = self.lines.next()?;
            self.line += 1;

            let line = match read {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(DictionaryError::Read {
                        line: self.line,
                        source,
                    }))
                }
            };

            if let Some(entry) = parse_line(&line, self.line) {
                return Some(entry);
            }
        }
    }
}

/// Parses one dictionary line.
///
/// Returns `None` for blank and comment lines.
pub fn parse_line(line: &str, number: usize) -> Option<Result<DictionaryEntry, DictionaryError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut fields = trimmed.split_whitespace();
    let malformed = |reason: &str| DictionaryError::Malformed {
        line: number,
        reason: reason.to_string(),
    };

    let entry = match (fields.next(), fields.next(), fields.next()) {
        (Some(key), Some(value), None) => value
            .parse::<u32>()
            .map(|value| DictionaryEntry {
                key: key.to_string(),
                value,
                line: number,
            })
            .map_err(|e| malformed(&format!("invalid value {value:?}: {e}"))),
        (Some(_), None, _) => Err(malformed("missing value")),
        _ => Err(malformed("expected exactly two fields")),
    };

    Some(entry)
}

/// Defines every entry of `entries` in `trie`.
///
/// Keys are encoded with `alphabet` and defined in reverse when `reverse` is
/// set. Loading stops at the first failing entry; entries before it stay
/// defined.
///
/// # Returns
///
/// * `Ok(usize)` - Number of entries defined.
/// * `Err(DictionaryError)` - The first parse, alphabet or trie failure.
pub fn load_into<I>(
    trie: &mut BlockTrie,
    alphabet: &Alphabet,
    entries: I,
    reverse: bool,
) -> Result<usize, DictionaryError>
where
    I: IntoIterator<Item = Result<DictionaryEntry, DictionaryError>>,
{
    alphabet.check_fits(trie.symbols())?;

    let mut loaded = 0;
    for entry in entries {
        let entry = entry?;
        let line = entry.line;

        let key = alphabet
            .encode(entry.key.as_bytes())
            .map_err(|source| DictionaryError::Key { line, source })?;

        let defined = if reverse {
            trie.define_reverse(&key, entry.value)
        } else {
            trie.define(&key, entry.value)
        };
        defined.map_err(|source| DictionaryError::Trie { line, source })?;

        loaded += 1;
    }

    info!(
        loaded,
        defined = trie.len(),
        memory_used = trie.memory_used(),
        "Dictionary loaded"
    );

    Ok(loaded)
}
