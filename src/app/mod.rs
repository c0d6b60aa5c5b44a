//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain and
//! catalog layers. It never calls the Zellij host API, so everything here runs
//! in native unit tests.
//!
//! # Architecture
//!
//! ```text
//! Key/Mouse/Timer/WebRequestResult → Event → handle_event → AppState transition → Actions
//!                                                                                 ↓
//!                                          set_timeout / web_request / hide_self (shim)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Keystroke coalescing over uncancellable timers
//! - [`handler`]: Event processing and focus rules
//! - [`modes`]: Keyboard focus and request status
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use handler::{handle_event, Event};
pub use modes::{SearchFocus, SearchStatus};
pub use state::AppState;
