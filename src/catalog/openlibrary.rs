//! Open Library search and cover endpoints.

use crate::domain::{BookFinderError, BookSummary, Result, ResultPage, PAGE_SIZE};
use serde::Deserialize;

/// Default search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Default cover image endpoint (without the `/b/id/...` suffix).
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Cover image variants served by the covers endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    /// Thumbnail used on result cards (`-M.jpg`).
    Medium,
    /// Large image used in the detail overlay (`-L.jpg`).
    Large,
}

impl CoverSize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// Base URLs for the search and cover endpoints.
///
/// Defaults point at openlibrary.org; both can be overridden through the
/// `search_url` and `covers_url` plugin options (e.g. for a mirror).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    pub search_url: String,
    pub covers_url: String,
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
        }
    }
}

impl CatalogEndpoints {
    /// Builds the title search URL for `term` at the one-based `page`.
    ///
    /// The term is sent as typed (no trimming), percent-encoded.
    ///
    /// ```rust
    /// use book_finder::catalog::CatalogEndpoints;
    ///
    /// let url = CatalogEndpoints::default().search_url("the hobbit", 2);
    /// assert_eq!(url, "https://openlibrary.org/search.json?title=the%20hobbit&page=2");
    /// ```
    #[must_use]
    pub fn search_url(&self, term: &str, page: u64) -> String {
        format!(
            "{}?title={}&page={}",
            self.search_url,
            urlencoding::encode(term),
            page
        )
    }

    /// Builds the cover image URL for a cover identifier.
    #[must_use]
    pub fn cover_url(&self, cover_id: i64, size: CoverSize) -> String {
        format!(
            "{}/b/id/{}-{}.jpg",
            self.covers_url.trim_end_matches('/'),
            cover_id,
            size.suffix()
        )
    }
}

/// The part of the search response the plugin reads.
///
/// Any other top-level fields (`start`, `q`, `offset`, ...) are ignored.
/// Docs stay untyped here; only the first [`PAGE_SIZE`] are decoded into
/// [`BookSummary`], so records past the page never affect the result.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub docs: Vec<serde_json::Value>,

    #[serde(rename = "numFound")]
    pub num_found: u64,
}

/// Turns a finished web request into a result page.
///
/// # Errors
///
/// - [`BookFinderError::Http`] for any status outside `200..=299`
/// - [`BookFinderError::Decode`] when the body is not a search response
pub fn decode_response(status: u16, body: &[u8]) -> Result<ResultPage> {
    if !(200..300).contains(&status) {
        return Err(BookFinderError::Http { status });
    }

    let response: SearchResponse = serde_json::from_slice(body)?;

    tracing::debug!(
        docs = response.docs.len(),
        num_found = response.num_found,
        "search response decoded"
    );

    let books = response
        .docs
        .into_iter()
        .take(PAGE_SIZE)
        .map(serde_json::from_value::<BookSummary>)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ResultPage::from_docs(books, response.num_found))
}
