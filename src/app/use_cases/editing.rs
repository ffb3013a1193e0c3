//! Use-Cases für strukturelle Änderungen am Graph.
//!
//! Jede Funktion validiert über die Graph-API, bevor sie mutiert; unbekannte IDs
//! werden als Fehler weitergereicht. Danach wird die Selektion bereinigt und eine
//! Geste abgebrochen, deren Element nicht mehr existiert.

use crate::app::state::{DragState, Selection};
use crate::app::AppState;
use crate::core::{AddEdgeOutcome, NodeAttribute};

use super::drag;

/// Legt einen Node an der Standardposition an und selektiert ihn.
pub fn add_node(state: &mut AppState) -> u64 {
    let id = state.graph.add_node();
    state.selection.current = Some(Selection::Node(id));
    let pos = state.graph.defaults().node_position;
    log::info!("Node {} an Position ({:.1}, {:.1}) hinzugefügt", id, pos.x, pos.y);
    id
}

/// Löscht das selektierte Element (Node inkl. aller Kanten oder einzelne Kante).
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    match state.selection.current {
        Some(Selection::Node(id)) => remove_node(state, id),
        Some(Selection::Edge { from, to }) => remove_edge(state, from, to),
        None => {
            log::debug!("Nichts selektiert, Löschen ignoriert");
            Ok(())
        }
    }
}

/// Entfernt einen Node samt aller ein- und ausgehenden Kanten.
pub fn remove_node(state: &mut AppState, id: u64) -> anyhow::Result<()> {
    let incident = state.graph.edges_involving(id)?.edge_keys(id).len();
    state.graph.remove_node(id)?;
    log::info!("Node {} mit {} Kanten entfernt", id, incident);
    after_removal(state);
    Ok(())
}

/// Entfernt eine Kante; eine fehlende Kante ist ein No-op.
pub fn remove_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<()> {
    if state.graph.remove_edge(from, to)? {
        log::info!("Kante {}→{} entfernt", from, to);
    } else {
        log::debug!("Kante {}→{} existiert nicht, nichts zu entfernen", from, to);
    }
    after_removal(state);
    Ok(())
}

/// Legt eine Kante an; ein Duplikat ändert nichts.
pub fn add_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<AddEdgeOutcome> {
    let outcome = state.graph.add_edge(from, to)?;
    match outcome {
        AddEdgeOutcome::Added => log::info!("Kante {}→{} erstellt", from, to),
        AddEdgeOutcome::Duplicate => log::warn!("Kante {}→{} existiert bereits", from, to),
    }
    Ok(outcome)
}

/// Schaltet Start- oder Endattribut eines Nodes um.
pub fn toggle_attribute(
    state: &mut AppState,
    id: u64,
    attribute: NodeAttribute,
) -> anyhow::Result<()> {
    let enabled = state.graph.toggle_attribute(id, attribute)?;
    log::info!(
        "Attribut {:?} an Node {} {}",
        attribute,
        id,
        if enabled { "gesetzt" } else { "entfernt" }
    );
    // Ein laufender Start-Pfeil-Drag verliert mit dem Attribut sein Ziel.
    cancel_stale_drag(state);
    Ok(())
}

/// Setzt die Beschriftung eines Nodes aus der Roh-Eingabe.
pub fn set_node_description(state: &mut AppState, id: u64, text: &str) -> anyhow::Result<()> {
    state.graph.set_node_description(id, text)?;
    log::info!("Beschriftung von Node {} gesetzt: {:?}", id, text);
    Ok(())
}

/// Setzt die Beschriftung einer Kante aus der Roh-Eingabe.
pub fn set_edge_description(
    state: &mut AppState,
    from: u64,
    to: u64,
    text: &str,
) -> anyhow::Result<()> {
    state.graph.set_edge_description(from, to, text)?;
    log::info!("Beschriftung von Kante {}→{} gesetzt: {:?}", from, to, text);
    Ok(())
}

/// Leert den Graph; IDs beginnen wieder bei 0.
pub fn reset(state: &mut AppState) {
    state.graph.reset();
    state.selection.current = None;
    state.interaction = DragState::Idle;
    log::info!("Graph zurückgesetzt");
}

fn after_removal(state: &mut AppState) {
    state.selection.retain_valid(&state.graph);
    cancel_stale_drag(state);
}

fn cancel_stale_drag(state: &mut AppState) {
    if let Some(target) = state.interaction.target() {
        if !drag::target_exists(state, target) {
            log::warn!("Geste {:?} abgebrochen: Element existiert nicht mehr", target);
            state.interaction = DragState::Idle;
        }
    }
}
