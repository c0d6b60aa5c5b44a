//! Book records, result pages and the search query.
//!
//! These types mirror the subset of the Open Library search response the plugin
//! consumes. Optional fields stay `Option` all the way to the renderer so an
//! omitted field (`None`) is never confused with an empty one (`Some(vec![])`).

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of records kept from a single response.
pub const PAGE_SIZE: usize = 10;

/// One search hit as returned by the catalog.
///
/// Read-only; the detail overlay reuses this record, no second fetch is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    /// Catalog key, e.g. `/works/OL45804W`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(rename = "author_name", default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,

    /// Cover image identifier used to build cover URLs.
    #[serde(rename = "cover_i", default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<i64>,

    #[serde(rename = "subject", default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,

    #[serde(rename = "publisher", default, skip_serializing_if = "Option::is_none")]
    pub publishers: Option<Vec<String>>,
}

impl BookSummary {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            authors: None,
            first_publish_year: None,
            cover_id: None,
            subjects: None,
            publishers: None,
        }
    }

    /// Comma-joined author names, `None` when the field is absent or empty.
    #[must_use]
    pub fn authors_line(&self) -> Option<String> {
        join_list(self.authors.as_deref())
    }

    /// Comma-joined subjects, `None` when the field is absent or empty.
    #[must_use]
    pub fn subjects_line(&self) -> Option<String> {
        join_list(self.subjects.as_deref())
    }

    /// Comma-joined publishers, `None` when the field is absent or empty.
    #[must_use]
    pub fn publishers_line(&self) -> Option<String> {
        join_list(self.publishers.as_deref())
    }

    /// Parenthesized first-publish year as shown on cards, e.g. `(1954)`.
    #[must_use]
    pub fn year_label(&self) -> Option<String> {
        self.first_publish_year.map(|year| format!("({year})"))
    }
}

/// Reads a string field the catalog sometimes sends as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn join_list(items: Option<&[String]>) -> Option<String> {
    items.filter(|list| !list.is_empty()).map(|list| list.join(", "))
}

/// The records and total-match count of the most recent successful fetch.
///
/// Replaced wholesale on every success; pages are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPage {
    /// At most [`PAGE_SIZE`] records in response order.
    pub books: Vec<BookSummary>,

    /// Total matches reported by the catalog (`numFound`), stored as returned.
    pub num_found: u64,
}

impl ResultPage {
    /// Builds a page from raw response docs, keeping only the first [`PAGE_SIZE`].
    #[must_use]
    pub fn from_docs(mut docs: Vec<BookSummary>, num_found: u64) -> Self {
        docs.truncate(PAGE_SIZE);
        Self {
            books: docs,
            num_found,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of pages the catalog can serve for this query, `ceil(num_found / 10)`.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.num_found.div_ceil(PAGE_SIZE as u64)
    }
}

/// Raw query text and the page it was last fetched at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Text exactly as typed, including surrounding whitespace.
    pub text: String,

    /// One-based page number.
    pub page: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

impl SearchQuery {
    /// Returns `true` when the text has nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<BookSummary> {
        (0..n)
            .map(|i| BookSummary::new(format!("/works/OL{i}W"), format!("Book {i}")))
            .collect()
    }

    #[test]
    fn from_docs_keeps_first_ten_in_order() {
        let page = ResultPage::from_docs(numbered(13), 130);
        assert_eq!(page.books.len(), PAGE_SIZE);
        assert_eq!(page.books[0].key, "/works/OL0W");
        assert_eq!(page.books[9].key, "/works/OL9W");
        assert_eq!(page.num_found, 130);
    }

    #[test]
    fn from_docs_with_fewer_than_a_page() {
        let page = ResultPage::from_docs(numbered(3), 3);
        assert_eq!(page.books.len(), 3);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(ResultPage::from_docs(vec![], 0).total_pages(), 0);
        assert_eq!(ResultPage::from_docs(vec![], 10).total_pages(), 1);
        assert_eq!(ResultPage::from_docs(vec![], 25).total_pages(), 3);
        assert_eq!(ResultPage::from_docs(vec![], 31).total_pages(), 4);
    }

    #[test]
    fn optional_lines_skip_absent_and_empty_fields() {
        let mut book = BookSummary::new("/works/OL1W", "Dune");
        assert_eq!(book.authors_line(), None);
        assert_eq!(book.year_label(), None);

        book.authors = Some(vec![]);
        assert_eq!(book.authors_line(), None);

        book.authors = Some(vec!["Frank Herbert".into(), "Brian Herbert".into()]);
        book.first_publish_year = Some(1965);
        assert_eq!(book.authors_line().as_deref(), Some("Frank Herbert, Brian Herbert"));
        assert_eq!(book.year_label().as_deref(), Some("(1965)"));
    }

    #[test]
    fn deserializes_catalog_field_names() {
        let json = r#"{
            "key": "/works/OL27448W",
            "title": "The Lord of the Rings",
            "author_name": ["J.R.R. Tolkien"],
            "first_publish_year": 1954,
            "cover_i": 14625765,
            "subject": ["Fiction", "Fantasy"],
            "publisher": ["Allen & Unwin"]
        }"#;
        let book: BookSummary = serde_json::from_str(json).unwrap();
        assert_eq!(book.cover_id, Some(14_625_765));
        assert_eq!(book.subjects_line().as_deref(), Some("Fiction, Fantasy"));
        assert_eq!(book.publishers_line().as_deref(), Some("Allen & Unwin"));
    }

    #[test]
    fn blank_query_detection() {
        let mut query = SearchQuery::default();
        assert!(query.is_blank());
        query.text = "   \t".to_string();
        assert!(query.is_blank());
        query.text = " dune ".to_string();
        assert!(!query.is_blank());
    }
}
