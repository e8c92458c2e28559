//! Error module for Jivaro.
//!
//! This module gathers the error types of every component behind one
//! crate-level enum, so the binary and integrators can propagate any failure
//! with `?` while keeping the component-specific detail.

use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod alphabet;
pub mod config;
pub mod dictionary;

pub use crate::data_structures::block_trie::BlockTrieError;
pub use alphabet::AlphabetError;
pub use config::ConfigError;
pub use dictionary::DictionaryError;

/// Result type alias used throughout Jivaro.
pub type JivaroResult<T> = Result<T, JivaroError>;

/// Core error enum for Jivaro.
#[derive(Error, Debug)]
pub enum JivaroError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised by the block trie.
    #[error("Trie error: {0}")]
    Trie(#[from] BlockTrieError),

    /// Errors raised while mapping bytes to symbols.
    #[error("Alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Errors raised while loading a dictionary.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: JivaroError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: JivaroError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// Reports errors through the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
