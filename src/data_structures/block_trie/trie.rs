// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie engine on top of the block allocator.
//!
//! Every operation reduces to walking a symbol sequence from the root. Inserts
//! create missing children on the way down; lookups stop at the first missing
//! child. The public variants only differ in how they derive the symbol
//! sequence from their input and in which direction they read it.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::data_structures::block_trie::block::{BlockAllocator, NodeRef};
use crate::data_structures::block_trie::config::BlockTrieConfig;
use crate::data_structures::block_trie::error::Result;
use crate::data_structures::block_trie::symbol::SymbolIndexed;

/// A snapshot of a trie's size and memory footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Alphabet size of the trie.
    pub symbols: usize,

    /// Number of keys carrying a value.
    pub defined: usize,

    /// Number of nodes created, root included.
    pub nodes: usize,

    /// Number of blocks reserved.
    pub blocks: usize,

    /// Block limit of the trie.
    pub max_blocks: usize,

    /// Nodes per block.
    pub block_capacity: usize,

    /// Bytes reserved by all blocks.
    pub memory_used: usize,
}

/// A fixed-alphabet trie mapping symbol sequences to `u32` values.
///
/// Nodes are carved out of large zero-initialized blocks, so inserting a key
/// allocates at most once per `block_capacity` new nodes, and nodes created
/// together sit next to each other in memory.
///
/// The trie is single-threaded. Wrap it in a
/// [`SharedBlockTrie`](crate::data_structures::block_trie::SharedBlockTrie)
/// when several threads need it.
///
/// # Examples
///
/// ```
/// use jivaro_lib::data_structures::block_trie::BlockTrie;
///
/// let mut trie = BlockTrie::new(4).unwrap();
/// trie.define(&[1, 2, 3], 42).unwrap();
///
/// assert_eq!(trie.defined(&[1, 2, 3]), Some(42));
/// assert_eq!(trie.defined(&[1, 2]), None);
/// assert_eq!(trie.defined(&[1, 2, 3, 0]), None);
/// ```
pub struct BlockTrie {
    /// Node storage. Slot 0 is the root.
    nodes: BlockAllocator,

    /// Alphabet size.
    symbols: usize,

    /// Number of nodes carrying a value.
    defined: usize,
}

impl BlockTrie {
    /// Creates an empty trie over `symbols` symbols with the default limits.
    ///
    /// # Returns
    ///
    /// * `Ok(BlockTrie)` - A trie holding only its root.
    /// * `Err(BlockTrieError::InvalidConfiguration)` - If `symbols` is 0 or above the default maximum.
    pub fn new(symbols: usize) -> Result<Self> {
        Self::with_config(symbols, BlockTrieConfig::default())
    }

    /// Creates an empty trie over `symbols` symbols with the given limits.
    ///
    /// The first block is reserved immediately and its first slot becomes the root.
    pub fn with_config(symbols: usize, config: BlockTrieConfig) -> Result<Self> {
        config.validate_for(symbols)?;

        let mut nodes = BlockAllocator::new(symbols, &config);
        let root = nodes.reserve_node()?;
        debug_assert_eq!(root, NodeRef::ROOT);

        debug!(
            symbols,
            block_capacity = config.block_capacity,
            max_blocks = config.max_blocks,
            "Created block trie"
        );

        Ok(Self {
            nodes,
            symbols,
            defined: 0,
        })
    }

    /// Follows `symbols` from the root, creating every missing node.
    ///
    /// Nodes created before an allocation failure stay linked into the trie.
    fn walk_or_create<I>(&mut self, symbols: I) -> Result<NodeRef>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut node = NodeRef::ROOT;

        for symbol in symbols {
            node = match self.nodes.child(node, symbol) {
                Some(child) => child,
                None => {
                    let child = self.nodes.reserve_node()?;
                    self.nodes.set_child(node, symbol, child);
                    child
                }
            };
        }

        Ok(node)
    }

    /// Follows `symbols` from the root without creating anything.
    fn walk<I>(&self, symbols: I) -> Option<NodeRef>
    where
        I: IntoIterator<Item = usize>,
    {
        symbols
            .into_iter()
            .try_fold(NodeRef::ROOT, |node, symbol| self.nodes.child(node, symbol))
    }

    fn define_symbols<I>(&mut self, symbols: I, value: u32) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        let node = self.walk_or_create(symbols)?;

        if self.nodes.set_value(node, value).is_none() {
            self.defined += 1;
        }

        Ok(())
    }

    fn defined_symbols<I>(&self, symbols: I) -> Option<u32>
    where
        I: IntoIterator<Item = usize>,
    {
        self.walk(symbols).and_then(|node| self.nodes.value(node))
    }

    /// Associates `value` with `key`, read first byte to last.
    ///
    /// Each byte is a symbol index. Defining a key twice keeps the last value.
    /// The empty key is the root.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the key now maps to `value`.
    /// * `Err(BlockTrieError::Exhausted)` - If a node was needed and no block was left.
    ///   Nodes created before the failure are kept.
    ///
    /// # Panics
    ///
    /// Panics if a byte is not below the alphabet size.
    pub fn define(&mut self, key: &[u8], value: u32) -> Result<()> {
        self.define_symbols(key.iter().map(SymbolIndexed::symbol_index), value)
    }

    /// Associates `value` with `key`, read last byte to first.
    ///
    /// Keys defined this way are found by [`defined_reverse`](Self::defined_reverse).
    pub fn define_reverse(&mut self, key: &[u8], value: u32) -> Result<()> {
        self.define_symbols(key.iter().rev().map(SymbolIndexed::symbol_index), value)
    }

    /// Associates `value` with the symbol indices carried by `pairs`, in order.
    pub fn define_pair<P: SymbolIndexed>(&mut self, pairs: &[P], value: u32) -> Result<()> {
        self.define_symbols(pairs.iter().map(SymbolIndexed::symbol_index), value)
    }

    /// Returns the value of `key`, read first byte to last.
    ///
    /// A key that is only a prefix of defined keys has no value.
    ///
    /// # Panics
    ///
    /// Panics if a byte visited during the walk is not below the alphabet size.
    pub fn defined(&self, key: &[u8]) -> Option<u32> {
        self.defined_symbols(key.iter().map(SymbolIndexed::symbol_index))
    }

    /// Returns the value of `key`, read last byte to first.
    pub fn defined_reverse(&self, key: &[u8]) -> Option<u32> {
        self.defined_symbols(key.iter().rev().map(SymbolIndexed::symbol_index))
    }

    /// Returns the value of a NUL-terminated key.
    ///
    /// The key is every byte before the first `0`, or the whole buffer if it
    /// holds no `0`.
    pub fn defined_all(&self, buf: &[u8]) -> Option<u32> {
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        self.defined(&buf[..end])
    }

    /// Returns the value of the key spelled by the symbol indices in `pairs`.
    pub fn defined_pair<P: SymbolIndexed>(&self, pairs: &[P]) -> Option<u32> {
        self.defined_symbols(pairs.iter().map(SymbolIndexed::symbol_index))
    }

    /// Number of keys carrying a value.
    pub fn len(&self) -> usize {
        self.defined
    }

    /// Whether no key carries a value.
    pub fn is_empty(&self) -> bool {
        self.defined == 0
    }

    /// Alphabet size.
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Bytes reserved by the trie's blocks.
    pub fn memory_used(&self) -> usize {
        self.nodes.memory_used()
    }

    /// Returns a snapshot of the trie's counters.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            symbols: self.symbols,
            defined: self.defined,
            nodes: self.nodes.nodes(),
            blocks: self.nodes.blocks(),
            max_blocks: self.nodes.max_blocks(),
            block_capacity: self.nodes.block_capacity(),
            memory_used: self.nodes.memory_used(),
        }
    }

    /// Releases every block. The trie cannot be used afterwards.
    pub fn destroy(self) {
        let stats = self.stats();
        drop(self);

        debug!(
            blocks = stats.blocks,
            memory_used = stats.memory_used,
            "Destroyed block trie"
        );
    }
}

impl fmt::Debug for BlockTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockTrie")
            .field("symbols", &self.symbols)
            .field("defined", &self.defined)
            .field("nodes", &self.nodes.nodes())
            .field("blocks", &self.nodes.blocks())
            .finish()
    }
}
