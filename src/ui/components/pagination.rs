//! Pagination controls renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::layout::{Layout, NEXT_LABEL, PAGINATION_MARGIN, PREV_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders `[ Prev ]  Page N  [ Next ]` at the columns recorded in `layout`,
/// with the total count right-aligned.
///
/// Disabled controls are dimmed; they still occupy their columns so click
/// targets never move.
pub fn render_pagination(
    row: usize,
    pagination: &PaginationInfo,
    layout: &Layout,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(PAGINATION_MARGIN));

    render_control(PREV_LABEL, pagination.prev_enabled, theme);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_normal),
        pagination.page_label,
        Theme::reset()
    );
    render_control(NEXT_LABEL, pagination.next_enabled, theme);

    let used = layout.next_button.end;
    let total_len = width(&pagination.total_label);
    let gap = cols.saturating_sub(used + total_len + PAGINATION_MARGIN);
    print!("{}", " ".repeat(gap));
    if used + total_len + PAGINATION_MARGIN <= cols {
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            pagination.total_label,
            Theme::reset()
        );
    }
    row + 1
}

fn render_control(label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!(
            "{}{}{label}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.search_bar_border),
            Theme::reset()
        );
    } else {
        print!(
            "{}{}{label}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
    }
}
