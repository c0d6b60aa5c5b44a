//! Open Library catalog access.
//!
//! The plugin never performs I/O itself: this module only builds request URLs
//! and decodes response bodies. The Zellij shim issues the actual request with
//! `web_request` and feeds the result back as an
//! [`Event::FetchCompleted`](crate::app::Event::FetchCompleted).
//!
//! ```text
//! SearchQuery ──search_url()──▶ Action::FetchPage ──web_request──▶ Zellij host
//!                                                                      │
//! ResultPage ◀──decode_response()── Event::FetchCompleted ◀────────────┘
//! ```

mod openlibrary;

pub use openlibrary::{decode_response, CatalogEndpoints, CoverSize, SearchResponse};
