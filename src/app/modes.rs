//! Focus and request status types for the application.
//!
//! These enums drive keybinding interpretation and the status line above the
//! result cards.
//!
//! # State Machine
//!
//! Keyboard focus is either on the search input or on the result list:
//! - **Typing**: characters edit the query (the default after load)
//! - **Browsing**: `j`/`k` move the card cursor, `h`/`l` page, Enter opens details
//!
//! The request status follows a fetch through its lifecycle:
//!
//! ```text
//! Idle ──fetch──▶ Loading ──2xx + valid JSON──▶ Loaded
//!   ▲                │
//!   │                └──any failure──▶ Failed(message)
//!   └── blank query (from any state)
//! ```
//!
//! The detail overlay is not a mode: it is open exactly when
//! `AppState::selected_book` is `Some`.

/// Which part of the UI receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input.
    ///
    /// Accepts printable characters, backspace and `Ctrl+u`. Enter, Tab, Down
    /// and Esc move focus to the results.
    Typing,

    /// User is moving through the result cards.
    ///
    /// Accepts j/k for movement, h/l for paging, enter to open details and
    /// `/` to return to the input.
    Browsing,
}

/// Lifecycle of the most recent search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// No request has been made for the current text (or the text is blank).
    Idle,

    /// A request is in flight. Pagination controls are disabled.
    Loading,

    /// The latest request failed. Previous results, if any, stay on screen.
    Failed(String),

    /// The latest request succeeded and its results are displayed.
    Loaded,
}

impl SearchStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error message to display, if the status is `Failed`.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
