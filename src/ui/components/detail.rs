//! Detail overlay renderer.
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Dune                         [ Close ] │
//! ├────────────────────────────────────────┤
//! │ Cover: https://covers.../b/id/1-L.jpg  │
//! │ Author(s): Frank Herbert               │
//! │ First Published: 1965                  │
//! └────────────────────────────────────────┘
//! ```
//!
//! The panel is drawn last, over the frame, at the rectangle the click
//! handler uses for hit testing. Every row drawn here, borders included, lies
//! inside that rectangle.

use crate::ui::helpers::{hyperlink, position_cursor, truncate, width};
use crate::ui::layout::{PanelRect, CLOSE_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailPanel};

const COVER_FIELD: &str = "Cover";

pub fn render_detail(detail: &DetailPanel, panel: &PanelRect, theme: &Theme) {
    let inner = panel.inner_width();
    let col = panel.left + 1;
    let border = Theme::fg(&theme.colors.overlay_border);
    let fill = theme
        .colors
        .overlay_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    let mut row = panel.top + 1;

    position_cursor(row, col);
    print!("{fill}{border}┌{}┐{}", "─".repeat(panel.width.saturating_sub(2)), Theme::reset());
    row += 1;

    let title_area = inner.saturating_sub(width(CLOSE_LABEL));
    let title = truncate(&detail.title, title_area);
    position_cursor(row, col);
    print!("{fill}{border}│ {}", Theme::reset());
    print!(
        "{fill}{}{}{title}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset()
    );
    print!("{fill}{}", " ".repeat(title_area.saturating_sub(width(&title))));
    print!("{}{CLOSE_LABEL}{}", Theme::fg(&theme.colors.search_bar_border), Theme::reset());
    print!("{fill}{border} │{}", Theme::reset());
    row += 1;

    position_cursor(row, col);
    print!("{fill}{border}├{}┤{}", "─".repeat(panel.width.saturating_sub(2)), Theme::reset());
    row += 1;

    let capacity = panel.body_lines();
    for (i, line) in detail.lines.iter().take(capacity).enumerate() {
        if i + 1 == capacity && detail.lines.len() > capacity {
            let more = DetailLine {
                label: None,
                text: "...".to_string(),
            };
            render_body_line(row, col, &more, inner, theme, &fill);
        } else {
            render_body_line(row, col, line, inner, theme, &fill);
        }
        row += 1;
    }

    let bottom = panel.top + panel.height;
    while row < bottom {
        let blank = DetailLine {
            label: None,
            text: String::new(),
        };
        render_body_line(row, col, &blank, inner, theme, &fill);
        row += 1;
    }

    position_cursor(row, col);
    print!("{fill}{border}└{}┘{}", "─".repeat(panel.width.saturating_sub(2)), Theme::reset());
}

fn render_body_line(
    row: usize,
    col: usize,
    line: &DetailLine,
    inner: usize,
    theme: &Theme,
    fill: &str,
) {
    let border = Theme::fg(&theme.colors.overlay_border);

    position_cursor(row, col);
    print!("{fill}{border}│ {}", Theme::reset());
    print!("{fill}{}", Theme::fg(&theme.colors.text_normal));

    let mut used = 0;
    if let Some(label) = line.label {
        print!("{}{label}: {}{fill}", Theme::bold(), Theme::reset());
        used += width(label) + 2;
    }

    let text = truncate(&line.text, inner.saturating_sub(used));
    if line.label == Some(COVER_FIELD) {
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.link_fg),
            hyperlink(&line.text, &text),
            Theme::reset()
        );
    } else {
        print!("{}{text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
    }
    used += width(&text);

    print!("{fill}{}", " ".repeat(inner.saturating_sub(used)));
    print!("{border} │{}", Theme::reset());
}
