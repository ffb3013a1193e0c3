//! Handler für Ansichtsoptionen.

use crate::app::render_scene;
use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet das Raster um.
pub fn toggle_grid(state: &mut AppState) {
    use_cases::view::toggle_grid(state);
    render_scene::sync_overlay(state);
}
