//! Event handling and state transition logic.
//!
//! The shim in `main.rs` translates Zellij key, mouse, timer and web request
//! events into [`Event`]s. [`handle_event`] applies one to the [`AppState`]
//! and returns whether a re-render is needed plus the side effects to run.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `ClearQuery`
//! - **Focus**: `FocusResults`, `FocusSearch`
//! - **Navigation**: `CursorDown`, `CursorUp`, `PreviousPage`, `NextPage`
//! - **Detail**: `OpenDetail`, `CloseDetail`, `Click`
//! - **System**: `DebounceElapsed`, `FetchCompleted`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use book_finder::app::{handle_event, AppState, Debouncer, Event};
//! use book_finder::catalog::CatalogEndpoints;
//! use book_finder::{Action, Theme};
//!
//! let mut state = AppState::new(Theme::default(), CatalogEndpoints::default(), Debouncer::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('d'))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScheduleDebounce { delay_ms: 500 }]);
//! # Ok::<(), book_finder::BookFinderError>(())
//! ```

use crate::app::modes::{SearchFocus, SearchStatus};
use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::ui::layout::HitTarget;

/// Status message shown when the user refuses network access.
pub const PERMISSION_DENIED_MESSAGE: &str = "Web access permission denied";

/// Events triggered by user input or by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearQuery,

    /// Moves keyboard focus from the input to the result cards.
    FocusResults,
    /// Moves keyboard focus back to the input.
    FocusSearch,

    /// Moves the card cursor down (wraps to top).
    CursorDown,
    /// Moves the card cursor up (wraps to bottom).
    CursorUp,

    /// Opens the detail overlay for the card under the cursor.
    OpenDetail,
    /// Closes the detail overlay.
    CloseDetail,

    PreviousPage,
    NextPage,

    /// Left click at a zero-based screen position.
    Click { line: usize, col: usize },

    /// Hides the plugin pane.
    CloseFocus,

    /// One debounce timer has fired.
    DebounceElapsed,

    /// A search request finished.
    FetchCompleted {
        /// Id echoed back from the request context.
        request_id: u64,
        /// HTTP status reported by Zellij.
        status: u16,
        body: Vec<u8>,
    },

    /// Result of the `WebAccess` permission request.
    PermissionsResult { granted: bool },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Input that does not apply in the
/// current focus (typing while browsing, anything but closing while the
/// detail overlay is open) is swallowed without a re-render.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path in place for
/// transitions that may fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    let overlay_open = state.selected_book.is_some();

    match event {
        Event::Char(c) => {
            if overlay_open || state.focus != SearchFocus::Typing {
                return Ok((false, vec![]));
            }
            let mut text = state.query.text.clone();
            text.push(*c);
            Ok((true, state.set_query_text(text)))
        }
        Event::Backspace => {
            if overlay_open || state.focus != SearchFocus::Typing {
                return Ok((false, vec![]));
            }
            let mut text = state.query.text.clone();
            if text.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, state.set_query_text(text)))
        }
        Event::ClearQuery => {
            if overlay_open || state.query.text.is_empty() {
                return Ok((false, vec![]));
            }
            state.focus = SearchFocus::Typing;
            Ok((true, state.set_query_text(String::new())))
        }
        Event::FocusResults => {
            if overlay_open || state.results.is_empty() {
                return Ok((false, vec![]));
            }
            state.focus = SearchFocus::Browsing;
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            if overlay_open {
                return Ok((false, vec![]));
            }
            state.focus = SearchFocus::Typing;
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            if overlay_open {
                return Ok((false, vec![]));
            }
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            if overlay_open {
                return Ok((false, vec![]));
            }
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            if overlay_open {
                return Ok((false, vec![]));
            }
            Ok((state.select_book(state.cursor), vec![]))
        }
        Event::CloseDetail => Ok((state.close_detail(), vec![])),
        Event::PreviousPage | Event::NextPage => {
            if overlay_open {
                return Ok((false, vec![]));
            }
            let delta = if matches!(event, Event::PreviousPage) { -1 } else { 1 };
            Ok(state
                .go_to_page(delta)
                .map_or_else(|| (false, vec![]), |action| (true, vec![action])))
        }
        Event::Click { line, col } => handle_click(state, *line, *col),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::DebounceElapsed => Ok(state
            .debounce_elapsed()
            .map_or_else(|| (false, vec![]), |action| (true, vec![action]))),
        Event::FetchCompleted {
            request_id,
            status,
            body,
        } => Ok((state.complete_fetch(*request_id, *status, body), vec![])),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
                return Ok((false, vec![]));
            }
            tracing::warn!("web access denied, searches will fail");
            state.status = SearchStatus::Failed(PERMISSION_DENIED_MESSAGE.to_string());
            Ok((true, vec![]))
        }
    }
}

fn handle_click(state: &mut AppState, line: usize, col: usize) -> Result<(bool, Vec<Action>)> {
    let target = state.hit_test(line, col);
    tracing::debug!(line, col, target = ?target, "click");

    match target {
        HitTarget::SearchBox => {
            state.focus = SearchFocus::Typing;
            Ok((true, vec![]))
        }
        HitTarget::Card(index) => {
            if !state.select_book(index) {
                return Ok((false, vec![]));
            }
            state.focus = SearchFocus::Browsing;
            Ok((true, vec![]))
        }
        HitTarget::PreviousPage => handle_event(state, &Event::PreviousPage),
        HitTarget::NextPage => handle_event(state, &Event::NextPage),
        HitTarget::CloseButton | HitTarget::Backdrop => Ok((state.close_detail(), vec![])),
        HitTarget::Panel | HitTarget::Nothing => Ok((false, vec![])),
    }
}

/// Short event label for spans; response bodies stay out of the trace.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ClearQuery => "ClearQuery",
        Event::FocusResults => "FocusResults",
        Event::FocusSearch => "FocusSearch",
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::OpenDetail => "OpenDetail",
        Event::CloseDetail => "CloseDetail",
        Event::PreviousPage => "PreviousPage",
        Event::NextPage => "NextPage",
        Event::Click { .. } => "Click",
        Event::CloseFocus => "CloseFocus",
        Event::DebounceElapsed => "DebounceElapsed",
        Event::FetchCompleted { .. } => "FetchCompleted",
        Event::PermissionsResult { .. } => "PermissionsResult",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Debouncer;
    use crate::catalog::CatalogEndpoints;
    use crate::domain::FETCH_FAILED_MESSAGE;
    use crate::ui::layout::{PanelRect, FIRST_CARD_LINE, SEARCH_BOX_TOP};
    use crate::ui::theme::Theme;

    const ROWS: usize = 30;
    const COLS: usize = 100;

    fn state() -> AppState {
        let mut state =
            AppState::new(Theme::default(), CatalogEndpoints::default(), Debouncer::default());
        state.set_viewport(ROWS, COLS);
        state
    }

    fn body(count: usize, num_found: u64) -> Vec<u8> {
        let docs: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "key": format!("/works/OL{i}W"),
                    "title": format!("Book {i}"),
                    "author_name": [format!("Author {i}")],
                    "first_publish_year": 1900 + i,
                })
            })
            .collect();
        serde_json::json!({ "numFound": num_found, "docs": docs })
            .to_string()
            .into_bytes()
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) -> usize {
        let mut timers = 0;
        for c in text.chars() {
            let (_, actions) = send(state, Event::Char(c));
            timers += actions.len();
        }
        timers
    }

    /// Delivers every armed timer and returns the fetches they produced.
    fn fire_timers(state: &mut AppState, timers: usize) -> Vec<Action> {
        (0..timers)
            .flat_map(|_| send(state, Event::DebounceElapsed).1)
            .collect()
    }

    fn respond(state: &mut AppState, action: &Action, status: u16, body: Vec<u8>) -> bool {
        let Action::FetchPage { request_id, .. } = action else {
            panic!("not a fetch: {action:?}");
        };
        send(
            state,
            Event::FetchCompleted {
                request_id: *request_id,
                status,
                body,
            },
        )
        .0
    }

    fn searched(count: usize, num_found: u64) -> AppState {
        let mut state = state();
        let timers = type_text(&mut state, "book");
        let fetches = fire_timers(&mut state, timers);
        assert!(respond(&mut state, &fetches[0], 200, body(count, num_found)));
        state
    }

    #[test]
    fn burst_of_keystrokes_issues_one_request() {
        let mut state = state();
        let timers = type_text(&mut state, "the hobbit");
        assert_eq!(timers, 10);

        let fetches = fire_timers(&mut state, timers);
        assert_eq!(
            fetches,
            vec![Action::FetchPage {
                request_id: state.latest_request_id,
                url: "https://openlibrary.org/search.json?title=the%20hobbit&page=1".to_string(),
            }]
        );
        assert!(state.status.is_loading());
    }

    #[test]
    fn whitespace_query_issues_no_request() {
        let mut state = state();
        let timers = type_text(&mut state, "   ");
        assert_eq!(timers, 0);
        assert!(fire_timers(&mut state, 3).is_empty());
        assert_eq!(state.query.text, "   ");
    }

    #[test]
    fn backspace_to_empty_resets_results() {
        let mut state = searched(10, 25);
        state.focus = SearchFocus::Typing;
        for _ in 0..4 {
            send(&mut state, Event::Backspace);
        }
        assert!(state.results.is_empty());
        assert_eq!(state.results.num_found, 0);
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(fire_timers(&mut state, 4).is_empty());
    }

    #[test]
    fn clear_query_cancels_pending_fetch() {
        let mut state = state();
        let timers = type_text(&mut state, "dune");
        send(&mut state, Event::ClearQuery);
        assert!(fire_timers(&mut state, timers).is_empty());
        assert_eq!(state.query.text, "");
    }

    #[test]
    fn success_shows_at_most_ten_cards_in_order() {
        let state = searched(12, 312);
        let vm = state.compute_viewmodel(ROWS, COLS);
        assert_eq!(vm.cards.len(), 10);
        assert_eq!(vm.cards[0].title, "Book 0");
        assert_eq!(vm.cards[9].title, "Book 9");
        assert_eq!(vm.pagination.total_label, "312 results");
    }

    #[test]
    fn failure_keeps_previous_cards() {
        let mut state = searched(3, 3);
        state.focus = SearchFocus::Typing;
        let timers = type_text(&mut state, "s");
        let fetches = fire_timers(&mut state, timers);

        assert!(respond(&mut state, &fetches[0], 503, vec![]));
        assert_eq!(state.status.error(), Some(FETCH_FAILED_MESSAGE));
        assert!(!state.status.is_loading());
        assert_eq!(state.results.books.len(), 3);
        assert_eq!(state.compute_viewmodel(ROWS, COLS).cards.len(), 3);
    }

    #[test]
    fn pagination_walks_three_pages_for_25_results() {
        let mut state = searched(10, 25);
        assert_eq!(send(&mut state, Event::PreviousPage), (false, vec![]));

        for expected in 2..=3 {
            let (render, actions) = send(&mut state, Event::NextPage);
            assert!(render);
            let Action::FetchPage { url, .. } = &actions[0] else {
                panic!("expected fetch");
            };
            assert!(url.ends_with(&format!("page={expected}")));
            assert!(respond(&mut state, &actions[0], 200, body(10, 25)));
        }

        assert_eq!(state.query.page, 3);
        assert_eq!(send(&mut state, Event::NextPage), (false, vec![]));
        assert!(state.can_go_previous());
    }

    #[test]
    fn paging_is_blocked_while_loading() {
        let mut state = searched(10, 25);
        let (_, actions) = send(&mut state, Event::NextPage);
        assert_eq!(actions.len(), 1);
        assert_eq!(send(&mut state, Event::NextPage), (false, vec![]));
        assert_eq!(send(&mut state, Event::PreviousPage), (false, vec![]));
    }

    #[test]
    fn out_of_order_response_is_ignored() {
        let mut state = state();
        let timers = type_text(&mut state, "dun");
        let first = fire_timers(&mut state, timers);
        let timers = type_text(&mut state, "e");
        let second = fire_timers(&mut state, timers);

        assert!(respond(&mut state, &second[0], 200, body(2, 2)));
        assert!(!respond(&mut state, &first[0], 200, body(9, 9)));
        assert_eq!(state.results.books.len(), 2);
        assert_eq!(state.results.num_found, 2);
    }

    #[test]
    fn click_on_card_opens_its_detail() {
        let mut state = searched(5, 5);
        let (render, _) = send(&mut state, Event::Click { line: FIRST_CARD_LINE + 2, col: 20 });
        assert!(render);
        assert_eq!(state.selected_book.as_ref(), Some(&state.results.books[2]));
        assert_eq!(state.focus, SearchFocus::Browsing);
    }

    #[test]
    fn selecting_a_then_b_replaces_detail() {
        let mut state = searched(5, 5);
        send(&mut state, Event::Click { line: FIRST_CARD_LINE, col: 20 });
        send(&mut state, Event::CloseDetail);
        send(&mut state, Event::Click { line: FIRST_CARD_LINE + 1, col: 20 });

        let detail = state.compute_viewmodel(ROWS, COLS).detail.unwrap();
        assert_eq!(detail.title, "Book 1");
        assert_eq!(detail.lines[0].text, "Author 1");
        assert_eq!(detail.lines[1].text, "1901");
    }

    #[test]
    fn click_inside_panel_keeps_it_open() {
        let mut state = searched(5, 5);
        send(&mut state, Event::OpenDetail);
        let lines = state.compute_viewmodel(ROWS, COLS).detail.unwrap().lines.len();
        let panel = PanelRect::centered(ROWS, COLS, lines);

        let (render, _) = send(&mut state, Event::Click { line: panel.top + 2, col: panel.left + 3 });
        assert!(!render);
        assert!(state.selected_book.is_some());
    }

    #[test]
    fn bare_record_overlay_keeps_its_bottom_border() {
        let mut state = state();
        let timers = type_text(&mut state, "bare");
        let fetches = fire_timers(&mut state, timers);
        let body = br#"{"numFound": 1, "docs": [{"key": "/works/OL1W", "title": "Bare"}]}"#;
        assert!(respond(&mut state, &fetches[0], 200, body.to_vec()));

        send(&mut state, Event::Click { line: FIRST_CARD_LINE, col: 20 });
        let panel = state.compute_viewmodel(ROWS, COLS).layout.panel.unwrap();
        assert_eq!(panel.body_lines(), 1);

        let bottom_border = panel.top + panel.height - 1;
        let (render, _) = send(&mut state, Event::Click { line: bottom_border, col: panel.left + 5 });
        assert!(!render);
        assert!(state.selected_book.is_some());

        let (render, _) = send(&mut state, Event::Click { line: bottom_border + 1, col: panel.left + 5 });
        assert!(render);
        assert!(state.selected_book.is_none());
    }

    #[test]
    fn backdrop_click_closes_detail() {
        let mut state = searched(5, 5);
        send(&mut state, Event::OpenDetail);

        let (render, _) = send(&mut state, Event::Click { line: 0, col: 0 });
        assert!(render);
        assert!(state.selected_book.is_none());
    }

    #[test]
    fn close_button_closes_detail() {
        let mut state = searched(5, 5);
        send(&mut state, Event::OpenDetail);
        let lines = state.compute_viewmodel(ROWS, COLS).detail.unwrap().lines.len();
        let (line, span) = PanelRect::centered(ROWS, COLS, lines).close_button();

        send(&mut state, Event::Click { line, col: span.start + 1 });
        assert!(state.selected_book.is_none());
    }

    #[test]
    fn overlay_swallows_other_input() {
        let mut state = searched(5, 5);
        send(&mut state, Event::OpenDetail);

        assert_eq!(send(&mut state, Event::Char('x')), (false, vec![]));
        assert_eq!(send(&mut state, Event::NextPage), (false, vec![]));
        assert_eq!(send(&mut state, Event::CursorDown), (false, vec![]));
        assert!(state.selected_book.is_some());
    }

    #[test]
    fn focus_follows_keys_and_search_box_click() {
        let mut state = searched(3, 3);
        assert_eq!(send(&mut state, Event::FocusResults), (true, vec![]));
        assert_eq!(state.focus, SearchFocus::Browsing);
        assert_eq!(send(&mut state, Event::Char('x')), (false, vec![]));

        send(&mut state, Event::Click { line: SEARCH_BOX_TOP + 1, col: 5 });
        assert_eq!(state.focus, SearchFocus::Typing);
    }

    #[test]
    fn focus_results_needs_results() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::FocusResults), (false, vec![]));
        assert_eq!(state.focus, SearchFocus::Typing);
    }

    #[test]
    fn pagination_click_pages() {
        let mut state = searched(10, 25);
        let layout = state.compute_viewmodel(ROWS, COLS).layout;
        let (_, actions) = send(
            &mut state,
            Event::Click {
                line: layout.pagination_line,
                col: layout.next_button.start,
            },
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(state.query.page, 2);
    }

    #[test]
    fn denied_permission_is_reported() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::PermissionsResult { granted: true }), (false, vec![]));
        assert_eq!(send(&mut state, Event::PermissionsResult { granted: false }), (true, vec![]));
        assert_eq!(state.status.error(), Some(PERMISSION_DENIED_MESSAGE));
    }

    #[test]
    fn close_focus_hides_plugin() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
