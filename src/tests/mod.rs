//! Test modules for Jivaro.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary loading end to end, with property-based checks
//! - Shared fixtures and proptest strategies

pub mod dictionary_tests;

pub use test_utils::{word_strategy, TestFixture};
