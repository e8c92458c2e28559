// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Serialized access to a Block Trie from several threads.
//!
//! [`BlockTrie`] has no internal synchronization. This wrapper holds it behind
//! a single mutex and takes the lock once per operation, so every insert or
//! lookup runs to completion before the next one starts.

use parking_lot::Mutex;

use crate::data_structures::block_trie::error::Result;
use crate::data_structures::block_trie::symbol::SymbolIndexed;
use crate::data_structures::block_trie::trie::{BlockTrie, TrieStats};

/// A [`BlockTrie`] shareable between threads.
#[derive(Debug)]
pub struct SharedBlockTrie {
    inner: Mutex<BlockTrie>,
}

impl SharedBlockTrie {
    /// Wraps an existing trie.
    pub fn new(trie: BlockTrie) -> Self {
        Self {
            inner: Mutex::new(trie),
        }
    }

    /// See [`BlockTrie::define`].
    pub fn define(&self, key: &[u8], value: u32) -> Result<()> {
        self.inner.lock().define(key, value)
    }

    /// See [`BlockTrie::define_reverse`].
    pub fn define_reverse(&self, key: &[u8], value: u32) -> Result<()> {
        self.inner.lock().define_reverse(key, value)
    }

    /// See [`BlockTrie::define_pair`].
    pub fn define_pair<P: SymbolIndexed>(&self, pairs: &[P], value: u32) -> Result<()> {
        self.inner.lock().define_pair(pairs, value)
    }

    /// See [`BlockTrie::defined`].
    pub fn defined(&self, key: &[u8]) -> Option<u32> {
        self.inner.lock().defined(key)
    }

    /// See [`BlockTrie::defined_reverse`].
    pub fn defined_reverse(&self, key: &[u8]) -> Option<u32> {
        self.inner.lock().defined_reverse(key)
    }

    /// See [`BlockTrie::defined_all`].
    pub fn defined_all(&self, buf: &[u8]) -> Option<u32> {
        self.inner.lock().defined_all(buf)
    }

    /// See [`BlockTrie::defined_pair`].
    pub fn defined_pair<P: SymbolIndexed>(&self, pairs: &[P]) -> Option<u32> {
        self.inner.lock().defined_pair(pairs)
    }

    /// Number of keys carrying a value.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no key carries a value.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// See [`BlockTrie::stats`].
    pub fn stats(&self) -> TrieStats {
        self.inner.lock().stats()
    }

    /// Runs `f` with exclusive access to the trie.
    ///
    /// Useful for batching several operations under one lock.
    pub fn with_trie<R>(&self, f: impl FnOnce(&mut BlockTrie) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the trie.
    pub fn into_inner(self) -> BlockTrie {
        self.inner.into_inner()
    }
}

impl From<BlockTrie> for SharedBlockTrie {
    fn from(trie: BlockTrie) -> Self {
        Self::new(trie)
    }
}
