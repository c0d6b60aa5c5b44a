//! Domain layer for the Book Finder plugin.
//!
//! Core types independent of Zellij APIs: the book record, result pages, the
//! search query, and the crate's error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book records, result pages and query state

pub mod book;
pub mod error;

pub use book::{BookSummary, ResultPage, SearchQuery, PAGE_SIZE};
pub use error::{BookFinderError, Result, FETCH_FAILED_MESSAGE};
