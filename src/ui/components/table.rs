//! Result card table renderer.
//!
//! Each result is one row with COVER, TITLE, AUTHORS and YEAR columns. The
//! cover cell is a terminal hyperlink to the medium cover image, or
//! "No Image" when the book has none.

use crate::ui::helpers::{self, hyperlink, position_cursor, width};
use crate::ui::layout::CardColumns;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

const COVER_LINK: &str = "[cover]";
const NO_IMAGE: &str = "No Image";

/// Renders the column headers. Returns the next row.
pub fn render_table_headers(row: usize, columns: &CardColumns, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {:<cover$}{:<title$}{:<authors$}{:<year$}",
        "COVER",
        "TITLE",
        "AUTHORS",
        "YEAR",
        cover = columns.cover,
        title = columns.title,
        authors = columns.authors,
        year = columns.year,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all cards starting at `row`. Returns the next row.
pub fn render_cards(
    row: usize,
    cards: &[CardItem],
    columns: &CardColumns,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, columns, theme, cols);
    }
    current_row
}

fn row_style(theme: &Theme, is_selected: bool) -> String {
    if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

/// Renders one card, padded to the full width so the cursor row's
/// background covers the whole line.
fn render_card(
    row: usize,
    card: &CardItem,
    columns: &CardColumns,
    theme: &Theme,
    cols: usize,
) -> usize {
    let base = row_style(theme, card.is_selected);

    position_cursor(row, 1);
    print!("{base}");
    print!("{}", if card.is_selected { "▌ " } else { "  " });

    let cover_len = match &card.cover_url {
        Some(url) => {
            print!(
                "{}{}{}{}{base}",
                Theme::fg(&theme.colors.link_fg),
                Theme::underline(),
                hyperlink(url, COVER_LINK),
                Theme::reset()
            );
            width(COVER_LINK)
        }
        None => {
            print!("{}{NO_IMAGE}{}{base}", Theme::dim(), Theme::reset());
            width(NO_IMAGE)
        }
    };
    print!("{}", " ".repeat(columns.cover.saturating_sub(cover_len)));

    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);
    print!("{base}");
    print!("{}", " ".repeat(columns.title.saturating_sub(width(&card.title))));

    let authors = card.authors.as_deref().unwrap_or_default();
    print!("{authors}");
    print!("{}", " ".repeat(columns.authors.saturating_sub(width(authors))));

    let year = card.year.as_deref().unwrap_or_default();
    print!("{year}");

    let line_len = 2 + columns.cover + columns.title + columns.authors + width(year);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
