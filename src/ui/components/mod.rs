//! Composable UI component renderers.
//!
//! Each component prints one region of the frame at the lines fixed by
//! [`crate::ui::layout`]. Layout lines are zero-based; components take the
//! 1-indexed terminal row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box
//! - [`status`]: Loading, error or result summary line
//! - [`table`]: Result cards (COVER, TITLE, AUTHORS, YEAR)
//! - [`empty`]: Message shown in place of the cards
//! - [`pagination`]: Prev/Next controls and total count
//! - [`detail`]: Modal detail overlay
//! - [`footer`]: Keybinding hints

mod detail;
mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{
    CardColumns, FIRST_CARD_LINE, HEADER_BORDER_LINE, HEADER_LINE, SEARCH_BOX_TOP, STATUS_LINE,
    TABLE_HEADER_LINE,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;
use table::{render_cards, render_table_headers};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Status]
/// [Table Headers]
/// [Cards | Empty state]
/// [Pagination]
/// [Border]
/// [Footer]
/// [Detail overlay, drawn last over everything]
/// ```
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let layout = &vm.layout;

    render_header(HEADER_LINE + 1, &vm.header, theme, cols);
    render_border(HEADER_BORDER_LINE + 1, &theme.colors.border, cols);
    render_search_bar(SEARCH_BOX_TOP + 1, &vm.search_bar, theme, cols);
    render_status(STATUS_LINE + 1, &vm.status, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(FIRST_CARD_LINE + 2, empty, theme, cols);
    } else {
        let columns = CardColumns::for_width(cols);
        render_table_headers(TABLE_HEADER_LINE + 1, &columns, theme);
        render_cards(FIRST_CARD_LINE + 1, &vm.cards, &columns, theme, cols);
    }

    if rows > FIRST_CARD_LINE + 3 {
        render_pagination(layout.pagination_line + 1, &vm.pagination, layout, theme, cols);
        let border_row = render_border(rows.saturating_sub(1), &theme.colors.border, cols);
        render_footer(border_row, &vm.footer, theme, cols);
    }

    if let (Some(detail), Some(panel)) = (&vm.detail, &layout.panel) {
        render_detail(detail, panel, theme);
    }
}
