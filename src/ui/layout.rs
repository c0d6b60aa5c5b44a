//! Screen geometry and mouse hit testing.
//!
//! The renderer and the click handler both derive positions from the same
//! [`Layout`], so a click always lands on what was drawn. Lines and columns
//! here are zero-based, matching Zellij mouse events; the renderer adds one
//! when positioning the cursor.
//!
//! ```text
//! 0  (blank)
//! 1  header
//! 2  ────────────────
//! 3  ┌──────────────┐
//! 4  │ Search: ...  │
//! 5  └──────────────┘
//! 6  status line
//! 7  COVER  TITLE  AUTHORS  YEAR
//! 8… cards
//! r-3  [ Prev ]  Page N  [ Next ]      1234 results
//! r-2  ────────────────
//! r-1  footer
//! ```

/// Line of the title bar.
pub const HEADER_LINE: usize = 1;
/// Line of the separator under the header.
pub const HEADER_BORDER_LINE: usize = 2;
/// First line of the three-line search box.
pub const SEARCH_BOX_TOP: usize = 3;
/// Height of the search box including its borders.
pub const SEARCH_BOX_HEIGHT: usize = 3;
/// Line showing loading, error or result summary.
pub const STATUS_LINE: usize = 6;
/// Line of the card table column headers.
pub const TABLE_HEADER_LINE: usize = 7;
/// Line of the first result card.
pub const FIRST_CARD_LINE: usize = 8;

/// Pagination row, bottom border and footer.
const BOTTOM_CHROME: usize = 3;

/// Left margin of the pagination controls.
pub const PAGINATION_MARGIN: usize = 2;
pub const PREV_LABEL: &str = "[ Prev ]";
pub const NEXT_LABEL: &str = "[ Next ]";
pub const CLOSE_LABEL: &str = "[ Close ]";

/// Widest the detail panel gets on large terminals.
const MAX_PANEL_WIDTH: usize = 76;
/// Border, title row, separator and bottom border.
const PANEL_CHROME_LINES: usize = 4;

/// Half-open column range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    #[must_use]
    pub const fn contains(&self, col: usize) -> bool {
        col >= self.start && col < self.end
    }
}

/// Position and size of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl PanelRect {
    /// Centers a panel for `content_lines` body lines inside the viewport.
    #[must_use]
    pub fn centered(rows: usize, cols: usize, content_lines: usize) -> Self {
        let width = Self::width_for(cols);
        let height = (content_lines + PANEL_CHROME_LINES).min(rows.saturating_sub(2).max(PANEL_CHROME_LINES));
        Self {
            top: rows.saturating_sub(height) / 2,
            left: cols.saturating_sub(width) / 2,
            width,
            height,
        }
    }

    /// Panel width for a terminal `cols` wide.
    #[must_use]
    pub fn width_for(cols: usize) -> usize {
        cols.saturating_sub(8).clamp(cols.min(24), MAX_PANEL_WIDTH)
    }

    /// Usable text width between the borders and their padding.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    /// Number of body lines that fit between the chrome.
    #[must_use]
    pub const fn body_lines(&self) -> usize {
        self.height.saturating_sub(PANEL_CHROME_LINES)
    }

    #[must_use]
    pub const fn contains(&self, line: usize, col: usize) -> bool {
        line >= self.top
            && line < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }

    /// Line and columns of the `[ Close ]` control on the title row.
    #[must_use]
    pub fn close_button(&self) -> (usize, Span) {
        let start = (self.left + self.width).saturating_sub(2 + CLOSE_LABEL.len());
        (self.top + 1, Span::new(start, CLOSE_LABEL.len()))
    }
}

/// Column widths of the card table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColumns {
    pub cover: usize,
    pub title: usize,
    pub authors: usize,
    pub year: usize,
}

impl CardColumns {
    const COVER: usize = 10;
    const YEAR: usize = 8;

    /// Splits a `cols` wide pane: fixed cover and year columns, the rest
    /// shared 3:2 between title and authors.
    #[must_use]
    pub const fn for_width(cols: usize) -> Self {
        let rest = cols.saturating_sub(Self::COVER + Self::YEAR + 2);
        let authors = rest * 2 / 5;
        Self {
            cover: Self::COVER,
            title: rest - authors,
            authors,
            year: Self::YEAR,
        }
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    SearchBox,
    /// Result card, by index into the current result page.
    Card(usize),
    PreviousPage,
    NextPage,
    CloseButton,
    /// Inside the detail panel but not on a control.
    Panel,
    /// Outside the detail panel while it is open.
    Backdrop,
    Nothing,
}

/// Geometry of one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    /// Index of the first card drawn.
    pub visible_start: usize,
    /// Number of cards drawn.
    pub visible_cards: usize,
    pub pagination_line: usize,
    pub prev_button: Span,
    pub next_button: Span,
    pub panel: Option<PanelRect>,
}

impl Layout {
    /// Number of card lines a terminal `rows` high can show.
    #[must_use]
    pub const fn card_capacity(rows: usize) -> usize {
        rows.saturating_sub(FIRST_CARD_LINE + BOTTOM_CHROME)
    }

    /// Builds the layout for one frame.
    ///
    /// `page_label` is the text drawn between the two pagination buttons.
    #[must_use]
    pub fn compute(
        rows: usize,
        cols: usize,
        visible_start: usize,
        visible_cards: usize,
        page_label: &str,
        panel: Option<PanelRect>,
    ) -> Self {
        let prev_button = Span::new(PAGINATION_MARGIN, PREV_LABEL.len());
        let next_button = Span::new(prev_button.end + page_label.chars().count(), NEXT_LABEL.len());

        Self {
            rows,
            cols,
            visible_start,
            visible_cards,
            pagination_line: rows.saturating_sub(BOTTOM_CHROME),
            prev_button,
            next_button,
            panel,
        }
    }

    /// Resolves a zero-based click position.
    ///
    /// While the panel is open it captures every click: controls inside it
    /// resolve normally, everything else is the backdrop.
    #[must_use]
    pub fn hit_test(&self, line: usize, col: usize) -> HitTarget {
        if let Some(panel) = &self.panel {
            let (close_line, close_span) = panel.close_button();
            if line == close_line && close_span.contains(col) {
                return HitTarget::CloseButton;
            }
            if panel.contains(line, col) {
                return HitTarget::Panel;
            }
            return HitTarget::Backdrop;
        }

        if (SEARCH_BOX_TOP..SEARCH_BOX_TOP + SEARCH_BOX_HEIGHT).contains(&line) {
            return HitTarget::SearchBox;
        }

        if line >= FIRST_CARD_LINE && line < FIRST_CARD_LINE + self.visible_cards {
            return HitTarget::Card(self.visible_start + line - FIRST_CARD_LINE);
        }

        if line == self.pagination_line {
            if self.prev_button.contains(col) {
                return HitTarget::PreviousPage;
            }
            if self.next_button.contains(col) {
                return HitTarget::NextPage;
            }
        }

        HitTarget::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(panel: Option<PanelRect>) -> Layout {
        Layout::compute(30, 100, 0, 5, "  Page 2  ", panel)
    }

    #[test]
    fn cards_map_to_result_indices() {
        let layout = Layout::compute(30, 100, 3, 4, "  Page 1  ", None);
        assert_eq!(layout.hit_test(FIRST_CARD_LINE, 10), HitTarget::Card(3));
        assert_eq!(layout.hit_test(FIRST_CARD_LINE + 3, 10), HitTarget::Card(6));
        assert_eq!(layout.hit_test(FIRST_CARD_LINE + 4, 10), HitTarget::Nothing);
    }

    #[test]
    fn pagination_buttons_follow_page_label() {
        let layout = layout(None);
        assert_eq!(layout.prev_button, Span { start: 2, end: 10 });
        assert_eq!(layout.next_button, Span { start: 20, end: 28 });
        assert_eq!(layout.hit_test(27, 2), HitTarget::PreviousPage);
        assert_eq!(layout.hit_test(27, 25), HitTarget::NextPage);
        assert_eq!(layout.hit_test(27, 14), HitTarget::Nothing);
    }

    #[test]
    fn search_box_lines_are_clickable() {
        let layout = layout(None);
        for line in SEARCH_BOX_TOP..SEARCH_BOX_TOP + SEARCH_BOX_HEIGHT {
            assert_eq!(layout.hit_test(line, 40), HitTarget::SearchBox);
        }
    }

    #[test]
    fn open_panel_captures_all_clicks() {
        let panel = PanelRect::centered(30, 100, 6);
        let layout = layout(Some(panel));

        assert_eq!(layout.hit_test(panel.top + 3, panel.left + 2), HitTarget::Panel);
        assert_eq!(layout.hit_test(FIRST_CARD_LINE, 0), HitTarget::Backdrop);
        assert_eq!(layout.hit_test(0, 0), HitTarget::Backdrop);

        let (line, span) = panel.close_button();
        assert_eq!(layout.hit_test(line, span.start), HitTarget::CloseButton);
    }

    #[test]
    fn panel_is_centered_and_bounded() {
        let panel = PanelRect::centered(30, 100, 6);
        assert_eq!(panel.width, 76);
        assert_eq!(panel.height, 10);
        assert_eq!(panel.left, 12);
        assert_eq!(panel.top, 10);

        let tall = PanelRect::centered(12, 40, 50);
        assert_eq!(tall.height, 10);
        assert_eq!(tall.width, 32);
        assert_eq!(tall.body_lines(), 6);
    }

    #[test]
    fn card_columns_share_remaining_width() {
        let columns = CardColumns::for_width(100);
        assert_eq!(columns.title, 48);
        assert_eq!(columns.authors, 32);
        assert_eq!(CardColumns::for_width(10).title, 0);
    }

    #[test]
    fn card_capacity_subtracts_chrome() {
        assert_eq!(Layout::card_capacity(24), 13);
        assert_eq!(Layout::card_capacity(5), 0);
    }
}
