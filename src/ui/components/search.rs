//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PROMPT: &str = " Search: ";

/// Renders the 3-line search box.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search: the hobbit█  │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// An empty query shows the placeholder dimmed. When the query is wider
/// than the box, its tail is shown so the cursor stays visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = usize::from(search.is_focused);
    let room = inner_width.saturating_sub(width(PROMPT) + cursor);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{PROMPT}");

    let shown_len = if search.query.is_empty() {
        let placeholder: String = search.placeholder.chars().take(room).collect();
        print!("{}{}", Theme::fg(&theme.colors.text_dim), placeholder);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        width(&placeholder)
    } else {
        let len = width(&search.query);
        let tail: String = search.query.chars().skip(len.saturating_sub(room)).collect();
        print!("{tail}");
        width(&tail)
    };

    if search.is_focused {
        print!("{}█{}", Theme::fg(&theme.colors.search_bar_border), Theme::fg(&theme.colors.text_normal));
    }

    let used = width(PROMPT) + shown_len + cursor;
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
