// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Block allocator for trie nodes.
//!
//! Nodes live in fixed-capacity blocks that are reserved whole and never
//! moved or freed individually. The allocator bump-allocates slots inside the
//! most recent block and appends a new block when it fills up, until the
//! configured block count is reached.
//!
//! A node is addressed by a flat `u32` index (`block * capacity + slot`), so
//! resolving a [`NodeRef`] is a division and two slice lookups.

use std::mem::size_of;

use tracing::{debug, warn};

use crate::data_structures::block_trie::config::BlockTrieConfig;
use crate::data_structures::block_trie::error::{BlockTrieError, Result};

/// Child slot content for "no node".
///
/// The root occupies index 0 and is never anyone's child, so a zero-filled
/// block starts with every child absent.
const NO_NODE: u32 = 0;

/// Stable handle to a node owned by a [`BlockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeRef(u32);

impl NodeRef {
    /// The first slot of the first block.
    pub(crate) const ROOT: NodeRef = NodeRef(0);

    /// Flat index of this node across all blocks.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A contiguous run of `capacity` nodes.
///
/// Child references for slot `s` occupy `children[s * symbols..(s + 1) * symbols]`.
#[derive(Debug)]
struct Block {
    children: Box<[u32]>,
    values: Box<[Option<u32>]>,
}

impl Block {
    fn new(capacity: usize, symbols: usize) -> Self {
        Self {
            children: vec![NO_NODE; capacity * symbols].into_boxed_slice(),
            values: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// Bytes reserved by one block of the given shape.
    fn size_in_bytes(capacity: usize, symbols: usize) -> usize {
        capacity * (symbols * size_of::<u32>() + size_of::<Option<u32>>())
    }
}

/// Bump allocator handing out zero-initialized nodes from large blocks.
#[derive(Debug)]
pub(crate) struct BlockAllocator {
    /// Reserved blocks, in reservation order. The last one is being filled.
    blocks: Vec<Block>,

    /// Next free slot in the last block.
    next_slot: usize,

    /// Children per node.
    symbols: usize,

    /// Nodes per block.
    block_capacity: usize,

    /// Cap on `blocks.len()`.
    max_blocks: usize,

    /// Bytes reserved by all blocks so far.
    memory_used: usize,
}

impl BlockAllocator {
    /// Creates an allocator with no blocks reserved yet.
    ///
    /// The limits are expected to have been validated by the caller.
    pub(crate) fn new(symbols: usize, config: &BlockTrieConfig) -> Self {
        Self {
            blocks: Vec::with_capacity(config.max_blocks.min(64)),
            next_slot: 0,
            symbols,
            block_capacity: config.block_capacity,
            max_blocks: config.max_blocks,
            memory_used: 0,
        }
    }

    /// Hands out the next free node, reserving a new block if the current one is full.
    ///
    /// The returned node has no children and no value.
    ///
    /// # Returns
    ///
    /// * `Ok(NodeRef)` - The freshly reserved node.
    /// * `Err(BlockTrieError::Exhausted)` - If every allowed block is full.
    pub(crate) fn reserve_node(&mut self) -> Result<NodeRef> {
        if self.blocks.is_empty() || self.next_slot == self.block_capacity {
            self.reserve_block()?;
        }

        let index = (self.blocks.len() - 1) * self.block_capacity + self.next_slot;
        self.next_slot += 1;

        Ok(NodeRef(index as u32))
    }

    fn reserve_block(&mut self) -> Result<()> {
        if self.blocks.len() >= self.max_blocks {
            warn!(
                max_blocks = self.max_blocks,
                memory_used = self.memory_used,
                "Block allocator exhausted"
            );
            return Err(BlockTrieError::Exhausted {
                max_blocks: self.max_blocks,
            });
        }

        self.blocks
            .push(Block::new(self.block_capacity, self.symbols));
        self.next_slot = 0;
        self.memory_used += Block::size_in_bytes(self.block_capacity, self.symbols);

        debug!(
            block = self.blocks.len() - 1,
            memory_used = self.memory_used,
            "Reserved trie block"
        );

        Ok(())
    }

    /// Splits a node reference into its block and slot.
    fn locate(&self, node: NodeRef) -> (usize, usize) {
        let index = node.index();
        (index / self.block_capacity, index % self.block_capacity)
    }

    /// Position of `symbol`'s child reference inside a block's child array.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside the alphabet.
    fn child_offset(&self, slot: usize, symbol: usize) -> usize {
        assert!(
            symbol < self.symbols,
            "symbol {} out of range for alphabet of {} symbols",
            symbol,
            self.symbols
        );
        slot * self.symbols + symbol
    }

    /// Returns the child of `node` along `symbol`, if one exists.
    pub(crate) fn child(&self, node: NodeRef, symbol: usize) -> Option<NodeRef> {
        let (block, slot) = self.locate(node);
        let offset = self.child_offset(slot, symbol);

        match self.blocks[block].children[offset] {
            NO_NODE => None,
            raw => Some(NodeRef(raw)),
        }
    }

    /// Records `child` as the child of `node` along `symbol`.
    pub(crate) fn set_child(&mut self, node: NodeRef, symbol: usize, child: NodeRef) {
        debug_assert_ne!(child, NodeRef::ROOT, "the root cannot be a child");

        let (block, slot) = self.locate(node);
        let offset = self.child_offset(slot, symbol);
        self.blocks[block].children[offset] = child.0;
    }

    /// Returns the value stored at `node`.
    pub(crate) fn value(&self, node: NodeRef) -> Option<u32> {
        let (block, slot) = self.locate(node);
        self.blocks[block].values[slot]
    }

    /// Stores `value` at `node` and returns the previous value.
    pub(crate) fn set_value(&mut self, node: NodeRef, value: u32) -> Option<u32> {
        let (block, slot) = self.locate(node);
        self.blocks[block].values[slot].replace(value)
    }

    /// Number of nodes handed out so far.
    pub(crate) fn nodes(&self) -> usize {
        match self.blocks.len() {
            0 => 0,
            n => (n - 1) * self.block_capacity + self.next_slot,
        }
    }

    /// Number of blocks reserved so far.
    pub(crate) fn blocks(&self) -> usize {
        self.blocks.len()
    }

    pub(crate) fn max_blocks(&self) -> usize {
        self.max_blocks
    }

    pub(crate) fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    /// Bytes reserved by all blocks so far.
    pub(crate) fn memory_used(&self) -> usize {
        self.memory_used
    }
}
