//! Error types for the Book Finder plugin.
//!
//! This module defines the centralized error type [`BookFinderError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Internally the fetch path distinguishes HTTP and decoding failures so
//! traces say what went wrong, but the user only ever sees a single message,
//! [`FETCH_FAILED_MESSAGE`], regardless of the variant.

use thiserror::Error;

/// The one error line shown to the user when a search request fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// The main error type for Book Finder operations.
#[derive(Debug, Error)]
pub enum BookFinderError {
    /// The catalog answered with a non-2xx status code.
    ///
    /// Zellij also reports connectivity failures this way.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code reported by the Zellij web request.
        status: u16,
    },

    /// The response body was not a valid search response.
    ///
    /// Covers malformed JSON as well as documents missing `docs` or `numFound`.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BookFinderError {
    /// Returns `true` for the variants that come out of a search request.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Decode(_))
    }

    /// Message rendered in the error line for this failure.
    ///
    /// Every fetch failure maps to [`FETCH_FAILED_MESSAGE`]; the detail stays in
    /// the trace output.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_fetch_failure() {
            FETCH_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// A specialized `Result` type for Book Finder operations.
pub type Result<T> = std::result::Result<T, BookFinderError>;
