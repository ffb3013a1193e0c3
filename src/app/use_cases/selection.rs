//! Use-Case: Einzelselektion von Node oder Kante.

use crate::app::state::Selection;
use crate::app::AppState;

/// Selektiert einen Node; unbekannte IDs sind ein Fehler.
pub fn select_node(state: &mut AppState, id: u64) -> anyhow::Result<()> {
    state.graph.node(id)?;
    state.selection.current = Some(Selection::Node(id));
    log::debug!("Node {} selektiert", id);
    Ok(())
}

/// Selektiert eine Kante bzw. einen Self-Loop.
pub fn select_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<()> {
    state.graph.edge(from, to)?;
    state.selection.current = Some(Selection::Edge { from, to });
    log::debug!("Kante {}→{} selektiert", from, to);
    Ok(())
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.current.take().is_some() {
        log::debug!("Selektion aufgehoben");
    }
}
