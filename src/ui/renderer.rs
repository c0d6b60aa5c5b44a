//! Top-level rendering coordinator.
//!
//! Rendering is two steps: `AppState::compute_viewmodel` turns state into a
//! [`UIViewModel`], then the components print it. The shim records the pane
//! size with `AppState::set_viewport` first so clicks resolve against the
//! same geometry.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_frame(vm, theme, cols, rows);
}
