//! Infrastructure layer for filesystem interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; these
//! helpers translate user-facing paths into sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
