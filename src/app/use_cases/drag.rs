//! Use-Case: Zeiger-Gesten (Idle → Dragging(Ziel) → Idle).
//!
//! Das Ziel wird beim Drücken einmal festgelegt und danach erschöpfend gematcht.

use glam::Vec2;

use crate::app::state::{DragState, DragTarget, Selection};
use crate::app::AppState;
use crate::core::AddEdgeOutcome;
use crate::geometry::drag;

/// Prüft, ob das Element einer Geste noch im Graph existiert.
pub fn target_exists(state: &AppState, target: DragTarget) -> bool {
    let graph = &state.graph;
    match target {
        DragTarget::Node { id } | DragTarget::DrawingNewEdge { from: id, .. } => {
            graph.contains_node(id)
        }
        DragTarget::Edge { from, to } => from != to && graph.find_edge(from, to).is_some(),
        DragTarget::SelfEdge { id } => graph.has_self_loop(id),
        DragTarget::Label { from, to } => graph.find_edge(from, to).is_some(),
        DragTarget::StartArrow { id } => graph.node(id).is_ok_and(|node| node.is_start()),
    }
}

/// Beginnt eine Geste auf einem bestehenden Element.
///
/// Ein unbekanntes Ziel lässt den Automaten in `Idle`.
pub fn begin_drag(state: &mut AppState, target: DragTarget) {
    if state.interaction.is_dragging() {
        log::warn!("Geste {:?} ignoriert: es läuft bereits eine Geste", target);
        return;
    }
    if !target_exists(state, target) {
        log::warn!("Geste {:?} ignoriert: Element existiert nicht", target);
        return;
    }
    state.interaction = DragState::Dragging(target);
    log::debug!("Geste gestartet: {:?}", target);
}

/// Beginnt das Zeichnen einer neuen Kante vom Node `from`.
pub fn begin_draw_edge(state: &mut AppState, from: u64, pointer: Vec2) {
    begin_drag(state, DragTarget::DrawingNewEdge { from, pointer });
}

/// Überträgt die Zeigerposition auf den Modellparameter des gezogenen Elements.
///
/// Liefert das aktualisierte Ziel oder `None`, wenn keine Geste läuft bzw. sie
/// abgebrochen wurde.
pub fn update_drag(state: &mut AppState, pointer: Vec2) -> anyhow::Result<Option<DragTarget>> {
    let Some(target) = state.interaction.target() else {
        return Ok(None);
    };
    if !target_exists(state, target) {
        log::warn!("Geste {:?} abgebrochen: Element existiert nicht mehr", target);
        state.interaction = DragState::Idle;
        return Ok(None);
    }

    let grid = state.view.show_grid;
    let options = &state.options;
    let graph = &mut state.graph;

    let target = match target {
        DragTarget::Node { id } => {
            let current = graph.node(id)?.coords;
            let coords = drag::node_position_from_pointer(
                id,
                current,
                pointer,
                graph.spatial_index(),
                grid,
                options,
            );
            if coords != current {
                graph.set_coords(id, coords)?;
            }
            target
        }
        DragTarget::Edge { from, to } => {
            let from_pos = graph.node(from)?.coords;
            let to_pos = graph.node(to)?.coords;
            let offset = drag::curve_offset_from_pointer(pointer, from_pos, to_pos, grid, options);
            graph.set_curve_offset(from, to, offset)?;
            target
        }
        DragTarget::SelfEdge { id } => {
            let center = graph.node(id)?.coords;
            let angle = drag::loop_angle_from_pointer(pointer, center, grid, options);
            graph.set_loop_angle(id, angle)?;
            target
        }
        DragTarget::Label { from, to } => {
            let edge = graph.edge(from, to)?;
            let text_offset = match (edge.curve_offset(), edge.loop_angle()) {
                (_, Some(angle)) => {
                    let center = graph.node(from)?.coords;
                    drag::loop_text_offset_from_pointer(pointer, center, angle, grid, options)
                }
                (offset, None) => {
                    let from_pos = graph.node(from)?.coords;
                    let to_pos = graph.node(to)?.coords;
                    drag::curve_text_offset_from_pointer(
                        pointer,
                        from_pos,
                        to_pos,
                        offset.unwrap_or_default(),
                        grid,
                        options,
                    )
                }
            };
            graph.set_text_offset(from, to, text_offset)?;
            target
        }
        DragTarget::StartArrow { id } => {
            let center = graph.node(id)?.coords;
            let angle = drag::start_angle_from_pointer(pointer, center, grid, options);
            graph.set_start_angle(id, angle)?;
            target
        }
        DragTarget::DrawingNewEdge { from, .. } => {
            let target = DragTarget::DrawingNewEdge { from, pointer };
            state.interaction = DragState::Dragging(target);
            target
        }
    };
    Ok(Some(target))
}

/// Ergebnis einer beendeten Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Es lief keine Geste
    None,
    /// Ein bestehendes Element wurde fertig gezogen
    Finished,
    /// Eine neue Kante wurde angelegt
    EdgeCreated { from: u64, to: u64 },
    /// Der Entwurf einer neuen Kante wurde verworfen
    DraftDiscarded,
}

/// Beendet die laufende Geste.
///
/// Beim Zeichnen werden die Nodes unter dem Zeiger nächstgelegen zuerst als Ziel
/// probiert; Duplikate werden übersprungen, ohne Treffer wird der Entwurf verworfen.
pub fn end_drag(state: &mut AppState, pointer: Vec2) -> anyhow::Result<DragOutcome> {
    let Some(target) = state.interaction.target() else {
        return Ok(DragOutcome::None);
    };
    state.interaction = DragState::Idle;

    let DragTarget::DrawingNewEdge { from, .. } = target else {
        log::debug!("Geste beendet: {:?}", target);
        return Ok(DragOutcome::Finished);
    };

    if !state.graph.contains_node(from) {
        log::warn!("Kanten-Entwurf verworfen: Node {} existiert nicht mehr", from);
        return Ok(DragOutcome::DraftDiscarded);
    }

    let candidates = state.graph.nodes_within(pointer, state.options.node_radius);
    for candidate in candidates {
        let to = candidate.node_id;
        match state.graph.add_edge(from, to)? {
            AddEdgeOutcome::Added => {
                state.selection.current = Some(Selection::Edge { from, to });
                log::info!("Kante {}→{} gezeichnet", from, to);
                return Ok(DragOutcome::EdgeCreated { from, to });
            }
            AddEdgeOutcome::Duplicate => {
                log::warn!("Kante {}→{} existiert bereits, Ziel übersprungen", from, to);
            }
        }
    }

    log::debug!(
        "Kanten-Entwurf von Node {} bei ({:.1}, {:.1}) verworfen",
        from,
        pointer.x,
        pointer.y
    );
    Ok(DragOutcome::DraftDiscarded)
}
