//! Use-Case: TikZ-Export der aktuellen Sitzung.

use crate::app::AppState;
use crate::export;

/// Erzeugt den TikZ-Text und legt ihn in `last_export` ab.
pub fn export_tikz(state: &mut AppState) -> &str {
    let tikz = export::to_tikz(&state.graph, &state.options.export);
    log::info!(
        "TikZ-Export erzeugt: {} Nodes, {} Kanten, {} Zeilen",
        state.graph.node_count(),
        state.graph.edge_count(),
        tikz.lines().count()
    );
    state.last_export.insert(tikz)
}
