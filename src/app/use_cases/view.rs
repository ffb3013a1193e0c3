//! Use-Case: Ansichtsoptionen.

use crate::app::AppState;

/// Schaltet Gitteranzeige und Snapping gemeinsam um.
pub fn toggle_grid(state: &mut AppState) {
    state.view.show_grid = !state.view.show_grid;
    log::info!(
        "Raster {}",
        if state.view.show_grid {
            "aktiviert"
        } else {
            "deaktiviert"
        }
    );
}
