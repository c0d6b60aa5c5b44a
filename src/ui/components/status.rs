//! Status line renderer.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

const MARGIN: &str = "  ";

/// Renders the single status above the cards in its theme color.
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    let (style, text) = match status {
        StatusLine::Idle(hint) => (
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
            hint.as_str(),
        ),
        StatusLine::Loading => (Theme::fg(&theme.colors.loading_fg), "Loading..."),
        StatusLine::Error(message) => (
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg)),
            message.as_str(),
        ),
        StatusLine::Results(summary) => (Theme::fg(&theme.colors.text_normal), summary.as_str()),
    };

    let text = truncate(text, cols.saturating_sub(MARGIN.len()));

    position_cursor(row, 1);
    print!("{MARGIN}{style}{text}{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(MARGIN.len() + width(&text))));
    row + 1
}
