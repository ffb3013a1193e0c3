//! Handler für Selektions-Operationen.

use crate::app::render_scene;
use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Node.
pub fn select_node(state: &mut AppState, id: u64) -> anyhow::Result<()> {
    use_cases::selection::select_node(state, id)?;
    render_scene::sync_overlay(state);
    Ok(())
}

/// Selektiert eine Kante.
pub fn select_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<()> {
    use_cases::selection::select_edge(state, from, to)?;
    render_scene::sync_overlay(state);
    Ok(())
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
    render_scene::sync_overlay(state);
}
