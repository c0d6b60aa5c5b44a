//! Book Finder: a Zellij plugin for searching the Open Library catalog.
//!
//! Book Finder is a floating-pane plugin that provides:
//! - Title search against Open Library, debounced while typing
//! - Paged results (10 per page) with cover links, authors and year
//! - A detail overlay with subjects and publishers
//! - Keyboard and mouse navigation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host API calls
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, debounce, stale-response guard   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ UI Layer (ui/)    │             │ Catalog (catalog/)│
//! │ - Rendering       │             │ - URL building    │
//! │ - Layout/hit test │             │ - JSON decoding   │
//! │ - Theming         │             └───────────────────┘
//! └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure (infrastructure/)│
//! │  Observability (observability/, OTLP file traces)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the shim is plain Rust with no host calls, so the whole
//! state machine is exercised by native unit tests.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/book-finder.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!         debounce_ms "500"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use book_finder::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for c in "dune".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let mut fetches = vec![];
//! for _ in 0..4 {
//!     fetches.extend(handle_event(&mut state, &Event::DebounceElapsed)?.1);
//! }
//! assert!(matches!(fetches.as_slice(), [Action::FetchPage { .. }]));
//! # Ok::<(), book_finder::BookFinderError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, SearchFocus, SearchStatus};
pub use domain::{BookFinderError, BookSummary, Result, ResultPage};
pub use ui::Theme;

use app::{Debouncer, DEFAULT_DEBOUNCE_MS};
use catalog::CatalogEndpoints;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/book-finder.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/book-finder/theme.toml"
///     trace_level "debug"
///     debounce_ms "300"
///     search_url "https://openlibrary.org/search.json"
///     covers_url "https://covers.openlibrary.org"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` is expanded to `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `book_finder=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Quiet window after the last keystroke before a search is sent.
    pub debounce_ms: u64,

    pub endpoints: CatalogEndpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            endpoints: CatalogEndpoints::default(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Invalid values are logged and replaced by their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use book_finder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let debounce_ms = parse_debounce(config.get("debounce_ms")).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default debounce");
            DEFAULT_DEBOUNCE_MS
        });

        let search_url = parse_url("search_url", config.get("search_url"))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default search endpoint");
                None
            })
            .unwrap_or(defaults.endpoints.search_url);

        let covers_url = parse_url("covers_url", config.get("covers_url"))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default covers endpoint");
                None
            })
            .unwrap_or(defaults.endpoints.covers_url);

        Self {
            theme_name: non_empty(config.get("theme")),
            theme_file: non_empty(config.get("theme_file")),
            trace_level: non_empty(config.get("trace_level")),
            debounce_ms,
            endpoints: CatalogEndpoints {
                search_url,
                covers_url,
            },
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn parse_debounce(raw: Option<&String>) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DEBOUNCE_MS);
    };
    raw.trim()
        .parse::<u64>()
        .map_err(|e| BookFinderError::Config(format!("debounce_ms '{raw}': {e}")))
}

fn parse_url(key: &str, raw: Option<&String>) -> Result<Option<String>> {
    let Some(url) = non_empty(raw) else {
        return Ok(None);
    };
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(Some(url))
    } else {
        Err(BookFinderError::Config(format!(
            "{key} '{url}' is not an http(s) URL"
        )))
    }
}

/// Builds the initial application state from configuration.
///
/// Theme precedence: `theme_file`, then `theme`, then the default. A theme
/// that fails to load is logged and replaced by the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        debounce_ms = config.debounce_ms,
        search_url = %config.endpoints.search_url,
        "initializing book-finder plugin"
    );

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|e| {
                    tracing::warn!(theme_name = %theme_name, error = %e, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(
        theme,
        config.endpoints.clone(),
        Debouncer::new(config.debounce_ms),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/t.toml"),
            ("trace_level", "debug"),
            ("debounce_ms", " 300 "),
            ("search_url", "http://localhost:8080/search.json"),
            ("covers_url", "http://localhost:8081/"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.endpoints.search_url, "http://localhost:8080/search.json");
        assert_eq!(config.endpoints.covers_url, "http://localhost:8081/");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = Config::from_zellij(&map(&[
            ("debounce_ms", "soon"),
            ("search_url", "openlibrary.org/search.json"),
            ("theme", "  "),
        ]));

        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.endpoints, CatalogEndpoints::default());
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn bad_debounce_is_config_error() {
        let raw = "-1".to_string();
        assert!(matches!(
            parse_debounce(Some(&raw)),
            Err(BookFinderError::Config(_))
        ));
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            theme_name: Some("catppuccin-macchiato".to_string()),
            debounce_ms: 120,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-macchiato");
        assert_eq!(state.debouncer.delay_ms(), 120);
        assert_eq!(state.focus, SearchFocus::Typing);
    }

    #[test]
    fn initialize_prefers_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "from-file");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("nord".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
