//! End-to-end tests for loading dictionaries into a trie.

use std::collections::HashMap;
use std::io::Cursor;

use proptest::prelude::*;

use crate::build_trie;
use crate::config::JivaroConfig;
use crate::dictionary::{load_into, Dictionary};
use crate::tests::{word_strategy, TestFixture};

/// Test loading a dictionary file through the default configuration.
#[test]
fn test_load_file_with_default_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("words.txt", "# words\nhello 1\nhelp 2\nHELLO 3\nworld 4\n")
        .unwrap();

    let (mut trie, alphabet) = build_trie(&JivaroConfig::default()).unwrap();
    let loaded = load_into(&mut trie, &alphabet, Dictionary::open(&path).unwrap(), false).unwrap();

    assert_eq!(loaded, 4);
    // Case-insensitive alphabet: HELLO redefines hello.
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.defined(&alphabet.encode(b"hello").unwrap()), Some(3));
    assert_eq!(trie.defined(&alphabet.encode(b"help").unwrap()), Some(2));
    assert_eq!(trie.defined(&alphabet.encode(b"hel").unwrap()), None);
    assert_eq!(trie.symbols(), 26);
}

/// Test that opening a missing dictionary fails cleanly.
#[test]
fn test_missing_dictionary() {
    let fixture = TestFixture::new().unwrap();
    assert!(Dictionary::open(fixture.temp_dir.path().join("nope.txt")).is_err());
}

/// Test that a reverse-loaded dictionary answers suffix-first lookups.
#[test]
fn test_reverse_dictionary() {
    let (mut trie, alphabet) = build_trie(&JivaroConfig::default()).unwrap();
    let entries = Dictionary::from_reader(Cursor::new("ing 1\ning 2\ned 3\n"));
    load_into(&mut trie, &alphabet, entries, true).unwrap();

    let ing = alphabet.encode(b"ing").unwrap();
    assert_eq!(trie.defined_reverse(&ing), Some(2));
    assert_eq!(trie.defined(&ing), None);
    assert_eq!(trie.len(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: a loaded dictionary answers like a map where the last line wins
    #[test]
    fn prop_dictionary_matches_model(
        words in prop::collection::vec((word_strategy(), any::<u32>()), 0..40)
    ) {
        let text: String = words
            .iter()
            .map(|(word, value)| format!("{word} {value}\n"))
            .collect();

        let (mut trie, alphabet) = build_trie(&JivaroConfig::default()).unwrap();
        let loaded = load_into(
            &mut trie,
            &alphabet,
            Dictionary::from_reader(Cursor::new(text)),
            false,
        ).unwrap();
        prop_assert_eq!(loaded, words.len());

        let model: HashMap<&str, u32> = words.iter().map(|(w, v)| (w.as_str(), *v)).collect();
        prop_assert_eq!(trie.len(), model.len());

        for (word, value) in model {
            prop_assert_eq!(trie.defined(&alphabet.encode(word.as_bytes()).unwrap()), Some(value));
        }
    }
}
