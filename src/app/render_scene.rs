//! Pflege der Render-Szene aus dem AppState.
//!
//! Strukturelle Änderungen bauen die Szene komplett neu auf; ein verschobener Node
//! aktualisiert nur sich selbst, seinen Start-Pfeil und alle anliegenden Kanten.

use crate::app::state::{DragTarget, Selection};
use crate::app::AppState;
use crate::geometry::shapes;
use crate::shared::{PathGeometry, ShapeKey};

/// Baut alle Formen neu auf (Kanten zuerst, damit Nodes darüber liegen).
pub fn rebuild(state: &mut AppState) {
    let AppState {
        graph,
        scene,
        options,
        ..
    } = state;

    scene.clear_shapes();

    for edge in graph.edges() {
        let (Ok(from), Ok(to)) = (graph.node(edge.from), graph.node(edge.to)) else {
            continue;
        };
        scene.upsert(
            ShapeKey::Edge {
                from: edge.from,
                to: edge.to,
            },
            shapes::edge_shape(edge, from.coords, to.coords, options),
        );
        scene.upsert(
            ShapeKey::EdgeLabel {
                from: edge.from,
                to: edge.to,
            },
            shapes::edge_label_shape(edge, from.coords, to.coords, options),
        );
    }

    for node in graph.nodes() {
        if let Some(arrow) = shapes::start_arrow_shape(node, options) {
            scene.upsert(ShapeKey::StartArrow(node.id), arrow);
        }
        scene.upsert(ShapeKey::Node(node.id), shapes::node_shape(node, options));
    }

    sync_overlay(state);
    log::debug!("Szene neu aufgebaut: {} Formen", state.scene.len());
}

/// Aktualisiert einen Node, seinen Start-Pfeil und alle anliegenden Kanten (inkl. Self-Loop).
pub fn refresh_node(state: &mut AppState, id: u64) -> anyhow::Result<()> {
    let node = state.graph.node(id)?;
    state
        .scene
        .upsert(ShapeKey::Node(id), shapes::node_shape(node, &state.options));
    match shapes::start_arrow_shape(node, &state.options) {
        Some(arrow) => state.scene.upsert(ShapeKey::StartArrow(id), arrow),
        None => {
            state.scene.remove(&ShapeKey::StartArrow(id));
        }
    }

    let incident = state.graph.edges_involving(id)?;
    for (from, to) in incident.edge_keys(id) {
        refresh_edge(state, from, to)?;
    }
    Ok(())
}

/// Aktualisiert Pfad und Label einer Kante.
pub fn refresh_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<()> {
    let edge = state.graph.edge(from, to)?;
    let from_pos = state.graph.node(from)?.coords;
    let to_pos = state.graph.node(to)?.coords;
    state.scene.upsert(
        ShapeKey::Edge { from, to },
        shapes::edge_shape(edge, from_pos, to_pos, &state.options),
    );
    state.scene.upsert(
        ShapeKey::EdgeLabel { from, to },
        shapes::edge_label_shape(edge, from_pos, to_pos, &state.options),
    );
    Ok(())
}

/// Gleicht Gitter, Entwurfslinie und Hervorhebung mit dem Zustand ab.
pub fn sync_overlay(state: &mut AppState) {
    let grid = if state.view.show_grid {
        shapes::grid_lines(&state.options)
    } else {
        Vec::new()
    };
    state.scene.set_grid_lines(grid);

    let draft = match state.interaction.target() {
        Some(DragTarget::DrawingNewEdge { from, pointer }) => state
            .graph
            .node(from)
            .ok()
            .map(|node| PathGeometry::Line {
                from: node.coords,
                to: pointer,
            }),
        _ => None,
    };
    state.scene.set_draft_line(draft);

    let selected = state.selection.current.as_ref().map(Selection::shape_key);
    state.scene.set_selected(selected);
}
