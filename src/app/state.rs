//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single state record of the plugin.
//! Every change goes through one of its named transitions (`set_query_text`,
//! `fetch_page`, `complete_fetch`, `go_to_page`, `select_book`,
//! `close_detail`, ...); the event handler only decides which one to call.
//!
//! # State Components
//!
//! - **Query**: raw input text and the page last requested
//! - **Results**: the last successfully fetched page and its `numFound`
//! - **Status**: idle, loading, failed or loaded
//! - **Selection**: the book shown in the detail overlay, if any
//! - **Cursor/Focus**: keyboard position over the cards
//! - **Debouncer**: pending typed query waiting for its quiet window
//!
//! # Stale responses
//!
//! Each request gets a fresh `request_id`. Only a response carrying the latest
//! id is applied; anything older is dropped. Clearing the query also bumps the
//! id so a response for the old text cannot repopulate the cleared list.

use super::actions::Action;
use super::debounce::Debouncer;
use super::modes::{SearchFocus, SearchStatus};
use crate::catalog::{self, CatalogEndpoints, CoverSize};
use crate::domain::{BookSummary, ResultPage, SearchQuery};
use crate::ui::helpers::{truncate, wrap_words};
use crate::ui::layout::{CardColumns, HitTarget, Layout, PanelRect, CLOSE_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, DetailLine, DetailPanel, EmptyState, FooterInfo, HeaderInfo, PaginationInfo,
    SearchBarInfo, StatusLine, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Placeholder drawn in the empty search input.
pub const SEARCH_PLACEHOLDER: &str = "Enter book title";

/// Detail overlay body for a record with no optional fields.
pub const NO_DETAILS_MESSAGE: &str = "No further details";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw input text and current page.
    pub query: SearchQuery,

    /// Last successful result page. Kept when a later request fails.
    pub results: ResultPage,

    /// Status of the most recent request.
    pub status: SearchStatus,

    /// Book shown in the detail overlay. The overlay is open iff this is `Some`.
    pub selected_book: Option<BookSummary>,

    /// Zero-based index of the highlighted card.
    pub cursor: usize,

    /// Whether keys edit the query or move over the cards.
    pub focus: SearchFocus,

    pub debouncer: Debouncer,

    /// Id of the newest request issued; responses with other ids are stale.
    pub latest_request_id: u64,

    pub endpoints: CatalogEndpoints,

    pub theme: Theme,

    /// Last rendered `(rows, cols)`, used to resolve mouse clicks.
    pub viewport: (usize, usize),
}

impl AppState {
    /// Creates an empty state focused on the search input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use book_finder::app::{AppState, Debouncer};
    /// use book_finder::catalog::CatalogEndpoints;
    /// use book_finder::Theme;
    ///
    /// let state = AppState::new(Theme::default(), CatalogEndpoints::default(), Debouncer::default());
    /// assert_eq!(state.query.page, 1);
    /// assert!(state.selected_book.is_none());
    /// ```
    #[must_use]
    pub fn new(theme: Theme, endpoints: CatalogEndpoints, debouncer: Debouncer) -> Self {
        Self {
            query: SearchQuery::default(),
            results: ResultPage::default(),
            status: SearchStatus::Idle,
            selected_book: None,
            cursor: 0,
            focus: SearchFocus::Typing,
            debouncer,
            latest_request_id: 0,
            endpoints,
            theme,
            viewport: (0, 0),
        }
    }

    /// Stores the raw input text and schedules a debounced fetch of page 1.
    ///
    /// Blank text clears the results and total count right away, cancels any
    /// pending fetch, and issues no request.
    pub fn set_query_text(&mut self, text: String) -> Vec<Action> {
        self.query.text = text;

        if self.query.is_blank() {
            tracing::debug!("query cleared, resetting results");
            self.debouncer.cancel();
            self.clear_results();
            return vec![];
        }

        let delay_ms = self.debouncer.schedule(self.query.text.clone());
        tracing::trace!(query = %self.query.text, delay_ms, "fetch debounced");
        vec![Action::ScheduleDebounce { delay_ms }]
    }

    /// Empties the list and returns to page 1, so the next search starts
    /// from the first page rather than the one last viewed.
    fn clear_results(&mut self) {
        self.results = ResultPage::default();
        self.query.page = 1;
        self.cursor = 0;
        self.status = SearchStatus::Idle;
        self.selected_book = None;
        self.latest_request_id += 1;
    }

    /// Handles one debounce timer; returns the fetch once the quiet window has elapsed.
    pub fn debounce_elapsed(&mut self) -> Option<Action> {
        let text = self.debouncer.on_timer()?;
        Some(self.fetch_page(&text, 1))
    }

    /// Starts a request for `text` at `page`.
    ///
    /// Marks the state as loading, clears the error and the selection, and
    /// records the page before the request goes out.
    pub fn fetch_page(&mut self, text: &str, page: u64) -> Action {
        self.latest_request_id += 1;
        self.status = SearchStatus::Loading;
        self.selected_book = None;
        self.query.page = page;

        let url = self.endpoints.search_url(text, page);
        tracing::debug!(request_id = self.latest_request_id, page, url = %url, "fetching page");

        Action::FetchPage {
            request_id: self.latest_request_id,
            url,
        }
    }

    /// Applies a finished request.
    ///
    /// Returns `false` when the response is stale and was ignored. On failure
    /// the previous results stay in place and only the status changes.
    pub fn complete_fetch(&mut self, request_id: u64, status: u16, body: &[u8]) -> bool {
        if request_id != self.latest_request_id {
            tracing::debug!(
                request_id,
                latest_request_id = self.latest_request_id,
                "discarding stale response"
            );
            return false;
        }

        match catalog::decode_response(status, body) {
            Ok(page) => {
                tracing::debug!(
                    books = page.books.len(),
                    num_found = page.num_found,
                    page = self.query.page,
                    "results loaded"
                );
                self.results = page;
                self.cursor = 0;
                self.status = SearchStatus::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, request_id, "search request failed");
                self.status = SearchStatus::Failed(e.user_message());
            }
        }
        true
    }

    /// Whether the Previous control is enabled.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.query.page > 1 && !self.status.is_loading()
    }

    /// Whether the Next control is enabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.query.page < self.results.total_pages() && !self.status.is_loading()
    }

    /// Re-fetches the current text at `page + delta`. `None` if the control is disabled.
    pub fn go_to_page(&mut self, delta: i64) -> Option<Action> {
        let enabled = if delta < 0 {
            self.can_go_previous()
        } else {
            self.can_go_next()
        };

        if !enabled || self.query.is_blank() {
            tracing::debug!(delta, page = self.query.page, "pagination disabled");
            return None;
        }

        let page = self.query.page.saturating_add_signed(delta).max(1);
        let text = self.query.text.clone();
        Some(self.fetch_page(&text, page))
    }

    /// Opens the detail overlay for the card at `index`.
    pub fn select_book(&mut self, index: usize) -> bool {
        let Some(book) = self.results.books.get(index) else {
            return false;
        };
        tracing::debug!(key = %book.key, title = %book.title, "book selected");
        self.selected_book = Some(book.clone());
        self.cursor = index;
        true
    }

    /// Closes the detail overlay. Returns `false` if it was not open.
    pub fn close_detail(&mut self) -> bool {
        self.selected_book.take().is_some()
    }

    /// Moves the card cursor down by one position, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.results.books.len();
    }

    /// Moves the card cursor up by one position, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.results.books.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Records the pane size of the frame being rendered.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    /// Resolves a click against the last rendered frame.
    #[must_use]
    pub fn hit_test(&self, line: usize, col: usize) -> HitTarget {
        let (rows, cols) = self.viewport;
        self.compute_viewmodel(rows, cols).layout.hit_test(line, col)
    }

    /// Computes a renderable UI view model for a `rows` x `cols` pane.
    ///
    /// # Windowing Algorithm
    ///
    /// When the pane cannot show every card, the visible window is centered on
    /// the cursor and shifted back when it would run past the last card.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let capacity = Layout::card_capacity(rows);
        let total = self.results.books.len();

        let mut visible_start = self.cursor.saturating_sub(capacity / 2).min(total);
        let visible_end = (visible_start + capacity).min(total);
        if visible_end - visible_start < capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let columns = CardColumns::for_width(cols);
        let matcher = if self.query.is_blank() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let cards: Vec<CardItem> = self.results.books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                self.compute_card(book, visible_start + relative_idx, &columns, matcher.as_ref())
            })
            .collect();

        let pagination = self.compute_pagination();
        let detail = self
            .selected_book
            .as_ref()
            .map(|book| self.compute_detail(book, cols));
        let panel = detail
            .as_ref()
            .map(|d| PanelRect::centered(rows, cols, d.lines.len()));

        let layout = Layout::compute(
            rows,
            cols,
            visible_start,
            cards.len(),
            &pagination.page_label,
            panel,
        );

        UIViewModel {
            header: HeaderInfo {
                title: " Book Finder ".to_string(),
            },
            search_bar: SearchBarInfo {
                query: self.query.text.clone(),
                placeholder: SEARCH_PLACEHOLDER,
                is_focused: self.focus == SearchFocus::Typing && self.selected_book.is_none(),
            },
            status: self.compute_status(),
            cards,
            empty_state: self.compute_empty_state(),
            pagination,
            detail,
            footer: self.compute_footer(),
            layout,
        }
    }

    fn compute_card(
        &self,
        book: &BookSummary,
        absolute_idx: usize,
        columns: &CardColumns,
        matcher: Option<&SkimMatcherV2>,
    ) -> CardItem {
        let title = truncate(&book.title, columns.title.saturating_sub(2));
        let title_len = if title == book.title {
            title.chars().count()
        } else {
            title.chars().count().saturating_sub(3)
        };

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            self.compute_highlight_ranges(&book.title, m)
                .into_iter()
                .filter(|&(start, _)| start < title_len)
                .map(|(start, end)| (start, end.min(title_len)))
                .collect()
        });

        CardItem {
            cover_url: book
                .cover_id
                .map(|id| self.endpoints.cover_url(id, CoverSize::Medium)),
            title,
            authors: book
                .authors_line()
                .map(|a| truncate(&a, columns.authors.saturating_sub(2))),
            year: book.year_label(),
            is_selected: absolute_idx == self.cursor,
            highlight_ranges,
        }
    }

    /// Computes character index ranges of `text` matched by the query.
    ///
    /// Consecutive match indices from the Skim matcher are coalesced into
    /// half-open `(start, end)` ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.query.text.trim()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_status(&self) -> StatusLine {
        match &self.status {
            SearchStatus::Idle => StatusLine::Idle("Type a title to search Open Library".to_string()),
            SearchStatus::Loading => StatusLine::Loading,
            SearchStatus::Failed(message) => StatusLine::Error(message.clone()),
            SearchStatus::Loaded => {
                StatusLine::Results(format!("{} books found", self.results.num_found))
            }
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.results.is_empty() {
            return None;
        }
        match self.status {
            SearchStatus::Idle => Some(EmptyState {
                message: "Search the Open Library catalog".to_string(),
                subtitle: "Start typing a book title".to_string(),
            }),
            SearchStatus::Loaded => Some(EmptyState {
                message: "No books found".to_string(),
                subtitle: format!("Nothing matches \"{}\"", self.query.text.trim()),
            }),
            SearchStatus::Loading | SearchStatus::Failed(_) => None,
        }
    }

    fn compute_pagination(&self) -> PaginationInfo {
        let page = self.query.page;
        let total_label = if self.results.num_found > 0 {
            format!("{} results", self.results.num_found)
        } else {
            String::new()
        };

        PaginationInfo {
            page,
            page_label: format!("  Page {page}  "),
            prev_enabled: self.can_go_previous(),
            next_enabled: self.can_go_next(),
            total_label,
        }
    }

    /// Builds the overlay body, wrapping the title and each present field to
    /// the panel width.
    ///
    /// The first title line shares its row with `[ Close ]`; the rest of the
    /// title opens the body. A record with no optional fields gets a single
    /// placeholder line so the panel always has a body row.
    fn compute_detail(&self, book: &BookSummary, cols: usize) -> DetailPanel {
        let inner_width = PanelRect::width_for(cols).saturating_sub(4);
        let mut title_lines =
            wrap_words(&book.title, inner_width.saturating_sub(CLOSE_LABEL.len() + 1)).into_iter();
        let title = title_lines.next().unwrap_or_default();

        let mut lines: Vec<DetailLine> = title_lines
            .map(|text| DetailLine { label: None, text })
            .collect();
        let title_rows = lines.len();

        if let Some(cover_id) = book.cover_id {
            let url = self.endpoints.cover_url(cover_id, CoverSize::Large);
            push_field(&mut lines, "Cover", &url, inner_width);
        }
        if let Some(authors) = book.authors_line() {
            push_field(&mut lines, "Author(s)", &authors, inner_width);
        }
        if let Some(year) = book.first_publish_year {
            push_field(&mut lines, "First Published", &year.to_string(), inner_width);
        }
        if let Some(subjects) = book.subjects_line() {
            push_field(&mut lines, "Subjects", &subjects, inner_width);
        }
        if let Some(publishers) = book.publishers_line() {
            push_field(&mut lines, "Publisher(s)", &publishers, inner_width);
        }

        if lines.len() == title_rows {
            lines.push(DetailLine {
                label: None,
                text: NO_DETAILS_MESSAGE.to_string(),
            });
        }

        DetailPanel { title, lines }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selected_book.is_some() {
            "Esc/q/Enter: close  Click outside: close"
        } else {
            match self.focus {
                SearchFocus::Typing => {
                    "Type to search  Enter/Tab: results  Ctrl+u: clear  PgUp/PgDn: page"
                }
                SearchFocus::Browsing => {
                    "j/k: move  Enter: details  h/l: page  /: search  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Appends `label: value` wrapped to `width`, continuation lines aligned under the value.
fn push_field(lines: &mut Vec<DetailLine>, label: &'static str, value: &str, width: usize) {
    let indent = label.len() + 2;
    let wrapped = wrap_words(value, width.saturating_sub(indent));

    for (i, text) in wrapped.into_iter().enumerate() {
        if i == 0 {
            lines.push(DetailLine {
                label: Some(label),
                text,
            });
        } else {
            lines.push(DetailLine {
                label: None,
                text: format!("{}{text}", " ".repeat(indent)),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FETCH_FAILED_MESSAGE;

    fn state() -> AppState {
        AppState::new(Theme::default(), CatalogEndpoints::default(), Debouncer::default())
    }

    fn response(count: usize, num_found: u64) -> Vec<u8> {
        let docs: Vec<serde_json::Value> = (0..count)
            .map(|i| serde_json::json!({ "key": format!("/works/OL{i}W"), "title": format!("Dune {i}") }))
            .collect();
        serde_json::json!({ "numFound": num_found, "docs": docs })
            .to_string()
            .into_bytes()
    }

    fn loaded(count: usize, num_found: u64) -> AppState {
        let mut state = state();
        state.set_query_text("dune".to_string());
        let Some(Action::FetchPage { request_id, .. }) = state.debounce_elapsed() else {
            panic!("expected a fetch");
        };
        assert!(state.complete_fetch(request_id, 200, &response(count, num_found)));
        state
    }

    #[test]
    fn typing_schedules_debounce_without_fetching() {
        let mut state = state();
        let actions = state.set_query_text("du".to_string());
        assert_eq!(actions, vec![Action::ScheduleDebounce { delay_ms: 500 }]);
        assert_eq!(state.query.text, "du");
        assert_eq!(state.status, SearchStatus::Idle);
    }

    #[test]
    fn blank_text_clears_results_without_request() {
        let mut state = loaded(5, 42);
        state.query.page = 3;

        let actions = state.set_query_text("   ".to_string());
        assert!(actions.is_empty());
        assert!(state.results.is_empty());
        assert_eq!(state.results.num_found, 0);
        assert_eq!(state.query.page, 1);
        assert_eq!(state.status, SearchStatus::Idle);
        assert_eq!(state.debounce_elapsed(), None);
    }

    #[test]
    fn fetch_records_page_and_clears_selection() {
        let mut state = loaded(5, 42);
        assert!(state.select_book(1));

        let action = state.fetch_page("dune", 4);
        assert_eq!(
            action,
            Action::FetchPage {
                request_id: state.latest_request_id,
                url: "https://openlibrary.org/search.json?title=dune&page=4".to_string(),
            }
        );
        assert_eq!(state.query.page, 4);
        assert!(state.status.is_loading());
        assert!(state.selected_book.is_none());
    }

    #[test]
    fn success_keeps_response_order_and_count() {
        let state = loaded(12, 312);
        assert_eq!(state.results.books.len(), 10);
        assert_eq!(state.results.books[0].title, "Dune 0");
        assert_eq!(state.results.books[9].title, "Dune 9");
        assert_eq!(state.results.num_found, 312);
        assert_eq!(state.status, SearchStatus::Loaded);
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut state = loaded(3, 3);
        let before = state.results.clone();

        let Action::FetchPage { request_id, .. } = state.fetch_page("dune", 1) else {
            unreachable!()
        };
        assert!(state.complete_fetch(request_id, 500, b"oops"));

        assert_eq!(state.status, SearchStatus::Failed(FETCH_FAILED_MESSAGE.to_string()));
        assert!(!state.status.is_loading());
        assert_eq!(state.results, before);
    }

    #[test]
    fn malformed_body_is_a_failure() {
        let mut state = state();
        let Action::FetchPage { request_id, .. } = state.fetch_page("dune", 1) else {
            unreachable!()
        };
        assert!(state.complete_fetch(request_id, 200, b"{\"docs\": 7}"));
        assert_eq!(state.status.error(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = state();
        let Action::FetchPage { request_id: first, .. } = state.fetch_page("dun", 1) else {
            unreachable!()
        };
        let Action::FetchPage { request_id: second, .. } = state.fetch_page("dune", 1) else {
            unreachable!()
        };

        assert!(!state.complete_fetch(first, 200, &response(2, 2)));
        assert!(state.status.is_loading());
        assert!(state.results.is_empty());

        assert!(state.complete_fetch(second, 200, &response(4, 4)));
        assert_eq!(state.results.books.len(), 4);
    }

    #[test]
    fn clearing_query_invalidates_in_flight_request() {
        let mut state = state();
        let Action::FetchPage { request_id, .. } = state.fetch_page("dune", 1) else {
            unreachable!()
        };
        state.set_query_text(String::new());
        assert!(!state.complete_fetch(request_id, 200, &response(3, 3)));
        assert!(state.results.is_empty());
        assert_eq!(state.status, SearchStatus::Idle);
    }

    #[test]
    fn pagination_bounds_follow_num_found() {
        let mut state = loaded(10, 25);
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());

        state.query.page = 2;
        assert!(state.can_go_previous());
        assert!(state.can_go_next());

        state.query.page = 3;
        assert!(state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn pagination_disabled_while_loading() {
        let mut state = loaded(10, 25);
        state.query.page = 2;
        state.status = SearchStatus::Loading;
        assert!(!state.can_go_previous());
        assert!(!state.can_go_next());
        assert_eq!(state.go_to_page(1), None);
        assert_eq!(state.go_to_page(-1), None);
    }

    #[test]
    fn go_to_page_reuses_current_text() {
        let mut state = loaded(10, 25);
        let Some(Action::FetchPage { url, .. }) = state.go_to_page(1) else {
            panic!("expected next page fetch");
        };
        assert_eq!(url, "https://openlibrary.org/search.json?title=dune&page=2");
        assert_eq!(state.query.page, 2);
        assert_eq!(state.go_to_page(-1), None, "loading blocks paging");
    }

    #[test]
    fn previous_disabled_on_first_page() {
        let mut state = loaded(10, 25);
        assert_eq!(state.go_to_page(-1), None);
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn selecting_another_book_replaces_overlay() {
        let mut state = loaded(3, 3);
        state.results.books[0].subjects = Some(vec!["Desert".to_string()]);

        assert!(state.select_book(0));
        assert_eq!(state.selected_book.as_ref().map(|b| b.key.as_str()), Some("/works/OL0W"));

        assert!(state.select_book(2));
        let selected = state.selected_book.as_ref().unwrap();
        assert_eq!(selected, &state.results.books[2]);
        assert_eq!(selected.subjects, None);

        assert!(!state.select_book(7));
        assert!(state.close_detail());
        assert!(!state.close_detail());
    }

    #[test]
    fn cursor_wraps() {
        let mut state = loaded(3, 3);
        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn viewmodel_marks_disabled_controls() {
        let state = loaded(10, 25);
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.cards.len(), 10);
        assert!(!vm.pagination.prev_enabled);
        assert!(vm.pagination.next_enabled);
        assert_eq!(vm.pagination.page_label, "  Page 1  ");
        assert_eq!(vm.pagination.total_label, "25 results");
        assert_eq!(vm.status, StatusLine::Results("25 books found".to_string()));
    }

    #[test]
    fn viewmodel_windows_cards_around_cursor() {
        let mut state = loaded(10, 10);
        state.cursor = 9;
        let vm = state.compute_viewmodel(16, 100);
        assert_eq!(vm.cards.len(), 5);
        assert_eq!(vm.layout.visible_start, 5);
        assert!(vm.cards[4].is_selected);
    }

    #[test]
    fn viewmodel_highlights_query_in_titles() {
        let state = loaded(1, 1);
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.cards[0].highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn detail_shows_only_present_fields() {
        let mut state = loaded(1, 1);
        {
            let book = &mut state.results.books[0];
            book.authors = Some(vec!["Frank Herbert".to_string()]);
            book.cover_id = Some(42);
        }
        state.select_book(0);

        let detail = state.compute_viewmodel(30, 100).detail.unwrap();
        let labels: Vec<_> = detail.lines.iter().filter_map(|l| l.label).collect();
        assert_eq!(labels, vec!["Cover", "Author(s)"]);
        assert_eq!(detail.lines[0].text, "https://covers.openlibrary.org/b/id/42-L.jpg");
    }

    #[test]
    fn viewmodel_shows_loading_then_error_over_old_cards() {
        let mut state = loaded(3, 3);
        let Action::FetchPage { request_id, .. } = state.fetch_page("dune", 1) else {
            unreachable!()
        };
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.status, StatusLine::Loading);
        assert_eq!(vm.cards.len(), 3);
        assert!(vm.empty_state.is_none());

        assert!(state.complete_fetch(request_id, 503, b""));
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.status, StatusLine::Error(FETCH_FAILED_MESSAGE.to_string()));
        assert_eq!(vm.cards.len(), 3);
        assert_eq!(vm.cards[0].title, "Dune 0");
    }

    #[test]
    fn detail_for_bare_record_has_placeholder_line() {
        let mut state = loaded(1, 1);
        state.select_book(0);

        let detail = state.compute_viewmodel(30, 100).detail.unwrap();
        assert_eq!(detail.title, "Dune 0");
        assert_eq!(detail.lines.len(), 1);
        assert_eq!(detail.lines[0].label, None);
        assert_eq!(detail.lines[0].text, NO_DETAILS_MESSAGE);
    }

    #[test]
    fn detail_wraps_long_titles() {
        let mut state = loaded(1, 1);
        let words: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
        let long_title = words.join(" ");
        state.results.books[0].title = long_title.clone();
        state.results.books[0].first_publish_year = Some(1965);
        state.select_book(0);

        let detail = state.compute_viewmodel(30, 100).detail.unwrap();
        let title_rows: Vec<&str> = std::iter::once(detail.title.as_str())
            .chain(
                detail
                    .lines
                    .iter()
                    .take_while(|l| l.label.is_none())
                    .map(|l| l.text.as_str()),
            )
            .collect();
        assert!(title_rows.len() > 1);
        assert_eq!(title_rows.join(" "), long_title);

        let last = detail.lines.last().unwrap();
        assert_eq!(last.label, Some("First Published"));
        assert_eq!(last.text, "1965");
    }

    #[test]
    fn empty_state_depends_on_status() {
        let state = state();
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.empty_state.unwrap().message, "Search the Open Library catalog");

        let loaded = loaded(0, 0);
        let vm = loaded.compute_viewmodel(30, 100);
        assert_eq!(vm.empty_state.unwrap().message, "No books found");
    }
}
