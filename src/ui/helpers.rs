//! Shared rendering utilities and helpers.
//!
//! Text measurement here is in characters, not bytes, so titles with
//! diacritics or CJK text never get sliced mid-codepoint.
//!
//! # Example
//!
//! ```rust
//! use book_finder::ui::helpers::{truncate, wrap_words};
//!
//! assert_eq!(truncate("The Left Hand of Darkness", 12), "The Left ...");
//! assert_eq!(wrap_words("Science fiction, Fantasy", 16), vec!["Science fiction,", "Fantasy"]);
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Greedy word wrap to lines of at most `max` characters.
///
/// Words longer than a line are split. Always returns at least one line.
#[must_use]
pub fn wrap_words(text: &str, max: usize) -> Vec<String> {
    if max == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(max);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let line_len = width(&line);
        if line_len > 0 && line_len + 1 + word.len() > max {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wraps `text` in an OSC 8 terminal hyperlink to `url`.
///
/// Terminals without OSC 8 support show `text` unchanged.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{text}\u{1b}]8;;\u{1b}\\")
}

/// Prints `text` with highlighted character ranges for fuzzy matches.
///
/// Ranges are half-open `(start, end)` character indices. On the cursor row
/// the match colors are applied and the selection colors restored after
/// each highlighted section.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
