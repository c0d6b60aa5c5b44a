//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! truncated strings, highlight ranges, enabled flags and the frame [`Layout`].

use crate::ui::layout::Layout;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// The single status shown above the cards.
    pub status: StatusLine,

    /// Cards in result order, limited to the visible window.
    pub cards: Vec<CardItem>,

    /// Message shown in place of the cards when there are none.
    pub empty_state: Option<EmptyState>,

    pub pagination: PaginationInfo,

    /// Detail overlay, present exactly when a book is selected.
    pub detail: Option<DetailPanel>,

    pub footer: FooterInfo,

    pub layout: Layout,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current focus.
    pub keybindings: String,
}

/// Search input display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Raw query text, exactly as typed.
    pub query: String,

    /// Hint drawn when the query is empty.
    pub placeholder: &'static str,

    /// Whether keystrokes currently go to the input (draws a cursor).
    pub is_focused: bool,
}

/// The one state shown for the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Nothing searched yet.
    Idle(String),
    /// A request is in flight.
    Loading,
    /// The last request failed.
    Error(String),
    /// The last request succeeded.
    Results(String),
}

/// Display information for one result card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Thumbnail URL, `None` when the book has no cover.
    pub cover_url: Option<String>,

    /// Title truncated to the title column.
    pub title: String,

    /// Comma-joined authors truncated to the author column.
    pub authors: Option<String>,

    /// Parenthesized first-publish year.
    pub year: Option<String>,

    /// Whether the keyboard cursor is on this card.
    pub is_selected: bool,

    /// Character ranges of `title` matched by the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown when there are no cards to draw.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Pagination controls.
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    pub page: u64,

    /// Text between the two buttons, e.g. `"  Page 2  "`.
    pub page_label: String,

    pub prev_enabled: bool,
    pub next_enabled: bool,

    /// Total-count label derived from `numFound`, empty before any result.
    pub total_label: String,
}

/// Contents of the detail overlay.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    pub title: String,

    /// Body lines already wrapped to the panel width.
    pub lines: Vec<DetailLine>,
}

/// One wrapped body line of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    /// Field label on the first line of a field, `None` on continuation lines.
    pub label: Option<&'static str>,

    pub text: String,
}
