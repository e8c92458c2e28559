// Copyright (c) 2025 Jivaro Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the Block Trie.

use std::mem::size_of;

use test_case::test_case;

use crate::data_structures::block_trie::{
    BlockTrie, BlockTrieConfig, BlockTrieError, Pair, DEFAULT_MAX_SYMBOLS,
};

fn small_trie(symbols: usize, block_capacity: usize, max_blocks: usize) -> BlockTrie {
    let config = BlockTrieConfig::new()
        .with_block_capacity(block_capacity)
        .with_max_blocks(max_blocks);
    BlockTrie::with_config(symbols, config).unwrap()
}

#[test_case(&[1, 2, 3], Some(42) ; "exact key")]
#[test_case(&[1, 2], None ; "proper prefix")]
#[test_case(&[1, 2, 3, 0], None ; "extension")]
#[test_case(&[1], None ; "first symbol only")]
#[test_case(&[3, 2, 1], None ; "reversed key")]
#[test_case(&[], None ; "empty key")]
fn test_lookup_after_single_define(key: &[u8], expected: Option<u32>) {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define(&[1, 2, 3], 42).unwrap();
    assert_eq!(trie.defined(key), expected);
}

#[test]
fn test_shared_prefixes() {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define(&[0], 1).unwrap();
    trie.define(&[0, 1], 2).unwrap();
    trie.define(&[0, 1, 2], 3).unwrap();
    trie.define(&[0, 2], 4).unwrap();

    assert_eq!(trie.defined(&[0]), Some(1));
    assert_eq!(trie.defined(&[0, 1]), Some(2));
    assert_eq!(trie.defined(&[0, 1, 2]), Some(3));
    assert_eq!(trie.defined(&[0, 2]), Some(4));
    assert_eq!(trie.defined(&[0, 3]), None);
    assert_eq!(trie.len(), 4);
    // Root plus [0], [0,1], [0,1,2], [0,2].
    assert_eq!(trie.stats().nodes, 5);
}

#[test]
fn test_value_zero_is_defined() {
    let mut trie = BlockTrie::new(2).unwrap();
    trie.define(&[1], 0).unwrap();
    assert_eq!(trie.defined(&[1]), Some(0));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_reverse_direction() {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define_reverse(&[1, 2, 3], 9).unwrap();

    assert_eq!(trie.defined_reverse(&[1, 2, 3]), Some(9));
    assert_eq!(trie.defined(&[1, 2, 3]), None);
    // A reverse define is a forward define of the reversed key.
    assert_eq!(trie.defined(&[3, 2, 1]), Some(9));
}

#[test]
fn test_reverse_palindrome_agrees() {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define_reverse(&[1, 2, 1], 5).unwrap();

    assert_eq!(trie.defined(&[1, 2, 1]), Some(5));
    assert_eq!(trie.defined_reverse(&[1, 2, 1]), Some(5));
}

#[test]
fn test_reverse_over_buffer_range() {
    let buf = [0u8, 1, 2, 3, 0];
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define_reverse(&buf[1..4], 11).unwrap();

    assert_eq!(trie.defined_reverse(&buf[1..4]), Some(11));
    assert_eq!(trie.defined_reverse(&buf[0..4]), None);
    assert_eq!(trie.defined_reverse(&buf[1..3]), None);
}

#[test_case(b"\x01\x02\x03\x00", Some(42) ; "terminated")]
#[test_case(b"\x01\x02\x03", Some(42) ; "unterminated slice")]
#[test_case(b"\x01\x02\x03\x00\x01\x01", Some(42) ; "trailing bytes ignored")]
#[test_case(b"\x01\x02\x00\x03", None ; "terminator before end of key")]
#[test_case(b"\x00", None ; "empty string")]
fn test_defined_all(buf: &[u8], expected: Option<u32>) {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define(&[1, 2, 3], 42).unwrap();
    assert_eq!(trie.defined_all(buf), expected);
}

#[test]
fn test_defined_all_empty_key() {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define(&[], 3).unwrap();
    assert_eq!(trie.defined_all(b"\x00\x01"), Some(3));
    assert_eq!(trie.defined_all(b""), Some(3));
}

#[test]
fn test_pair_lookup_matches_bytes() {
    let mut trie = BlockTrie::new(8).unwrap();
    trie.define(&[4, 5, 6], 100).unwrap();

    let pairs = [Pair::new(4, 'x'), Pair::new(5, 'y'), Pair::new(6, 'z')];
    assert_eq!(trie.defined_pair(&pairs), Some(100));
    assert_eq!(trie.defined_pair(&pairs[..2]), None);
    assert_eq!(trie.defined_pair(&[4u32, 5, 6]), Some(100));
}

#[test]
fn test_define_pair() {
    let mut trie = BlockTrie::new(8).unwrap();
    let pairs = [Pair::new(7, 1.5f32), Pair::new(0, 2.5f32)];
    trie.define_pair(&pairs, 12).unwrap();

    assert_eq!(trie.defined(&[7, 0]), Some(12));
    assert_eq!(trie.defined_pair(&pairs), Some(12));
}

#[test]
fn test_full_alphabet() {
    let mut trie = BlockTrie::new(DEFAULT_MAX_SYMBOLS).unwrap();
    for symbol in 0..DEFAULT_MAX_SYMBOLS as u8 {
        trie.define(&[symbol, symbol], u32::from(symbol)).unwrap();
    }

    assert_eq!(trie.len(), DEFAULT_MAX_SYMBOLS);
    assert_eq!(trie.defined(&[31, 31]), Some(31));
    assert_eq!(trie.defined(&[31]), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_symbol_outside_alphabet_panics() {
    let mut trie = BlockTrie::new(4).unwrap();
    let _ = trie.define(&[4], 1);
}

#[test]
fn test_blocks_grow_on_demand() {
    let mut trie = small_trie(2, 4, 8);
    assert_eq!(trie.stats().blocks, 1);

    // Ten distinct single-path nodes: root + 10 = 11 nodes, 3 blocks of 4.
    trie.define(&[0; 10], 1).unwrap();
    let stats = trie.stats();
    assert_eq!(stats.nodes, 11);
    assert_eq!(stats.blocks, 3);
    let block_bytes = 4 * (2 * size_of::<u32>() + size_of::<Option<u32>>());
    assert_eq!(stats.memory_used, 3 * block_bytes);
    assert_eq!(trie.memory_used(), stats.memory_used);
}

#[test]
fn test_exhaustion_preserves_earlier_keys() {
    // 3 blocks of 3 nodes: root + 8 more nodes.
    let mut trie = small_trie(4, 3, 3);
    let keys: [&[u8]; 4] = [&[0, 0], &[1, 1], &[2, 2], &[3, 3]];

    for (value, key) in keys.iter().enumerate() {
        trie.define(key, value as u32).unwrap();
    }
    assert_eq!(trie.stats().nodes, 9);
    assert_eq!(trie.stats().blocks, 3);

    // Existing paths need no node, so they still accept values.
    trie.define(&[0], 50).unwrap();
    assert_eq!(
        trie.define(&[0, 1], 60),
        Err(BlockTrieError::Exhausted { max_blocks: 3 })
    );
    assert_eq!(
        trie.define_reverse(&[2, 1], 61),
        Err(BlockTrieError::Exhausted { max_blocks: 3 })
    );

    for (value, key) in keys.iter().enumerate() {
        assert_eq!(trie.defined(key), Some(value as u32));
    }
    assert_eq!(trie.defined(&[0]), Some(50));
    assert_eq!(trie.defined(&[0, 1]), None);
    assert_eq!(trie.len(), 5);
}

#[test]
fn test_single_node_budget() {
    let mut trie = small_trie(4, 1, 1);
    trie.define(&[], 1).unwrap();
    assert!(matches!(
        trie.define(&[0], 2),
        Err(BlockTrieError::Exhausted { .. })
    ));
    assert_eq!(trie.defined(&[]), Some(1));
}

#[test]
fn test_independent_limits() {
    let narrow = small_trie(2, 2, 1);
    let wide = BlockTrie::with_config(64, BlockTrieConfig::new().with_max_symbols(64)).unwrap();

    assert_eq!(narrow.stats().max_blocks, 1);
    assert_eq!(narrow.symbols(), 2);
    assert_eq!(wide.symbols(), 64);
    assert_eq!(wide.stats().block_capacity, 1_600);
}

#[test]
fn test_destroy() {
    let mut trie = BlockTrie::new(4).unwrap();
    trie.define(&[1], 1).unwrap();
    assert!(!trie.is_empty());
    trie.destroy();
}
