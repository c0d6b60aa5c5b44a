//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                     │
//!                                   Layout → hit_test (mouse clicks)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Screen geometry shared by rendering and click handling
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Text measurement, wrapping, hyperlinks and highlighting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{HitTarget, Layout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, DetailLine, DetailPanel, EmptyState, FooterInfo, HeaderInfo, PaginationInfo,
    SearchBarInfo, StatusLine, UIViewModel,
};
