//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the Zellij host API. It returns a
//! `Vec<Action>` and the shim in `main.rs` executes each one in order:
//!
//! - [`Action::ScheduleDebounce`] → `set_timeout`
//! - [`Action::FetchPage`] → `web_request`
//! - [`Action::CloseFocus`] → `hide_self`
//!
//! # Example
//!
//! ```rust
//! use book_finder::Action;
//!
//! let actions = vec![
//!     Action::ScheduleDebounce { delay_ms: 500 },
//!     Action::FetchPage {
//!         request_id: 1,
//!         url: "https://openlibrary.org/search.json?title=dune&page=1".to_string(),
//!     },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms one debounce timer.
    ///
    /// The timer comes back as [`Event::DebounceElapsed`](crate::app::Event::DebounceElapsed).
    ScheduleDebounce {
        /// Timer length in milliseconds.
        delay_ms: u64,
    },

    /// Issues a GET request against the catalog.
    ///
    /// The shim must echo `request_id` back in
    /// [`Event::FetchCompleted`](crate::app::Event::FetchCompleted) so stale
    /// responses can be recognised.
    FetchPage {
        /// Generation token of this request.
        request_id: u64,
        /// Fully built search URL.
        url: String,
    },
}
