// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol extraction for indirect key sequences.
//!
//! The trie never decides which symbol an element stands for. Callers hand it
//! elements that already carry a symbol index, and the trie only reads it.

/// An element that carries a symbol index usable as a trie edge.
///
/// The index must lie in `[0, symbols)` for the trie it is used with.
pub trait SymbolIndexed {
    /// The symbol this element contributes to a key.
    fn symbol_index(&self) -> usize;
}

impl SymbolIndexed for u8 {
    fn symbol_index(&self) -> usize {
        *self as usize
    }
}

impl SymbolIndexed for u16 {
    fn symbol_index(&self) -> usize {
        *self as usize
    }
}

impl SymbolIndexed for u32 {
    fn symbol_index(&self) -> usize {
        *self as usize
    }
}

impl SymbolIndexed for usize {
    fn symbol_index(&self) -> usize {
        *self
    }
}

impl<S: SymbolIndexed + ?Sized> SymbolIndexed for &S {
    fn symbol_index(&self) -> usize {
        (**self).symbol_index()
    }
}

/// A symbol index paired with an arbitrary payload.
///
/// Only `index` takes part in trie traversal; `item` rides along for the
/// caller, e.g. the original token the symbol was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<T> {
    /// Symbol index in the trie's alphabet.
    pub index: usize,

    /// Caller payload, ignored by the trie.
    pub item: T,
}

impl<T> Pair<T> {
    /// Creates a pair from a symbol index and a payload.
    pub fn new(index: usize, item: T) -> Self {
        Self { index, item }
    }
}

impl<T> SymbolIndexed for Pair<T> {
    fn symbol_index(&self) -> usize {
        self.index
    }
}
