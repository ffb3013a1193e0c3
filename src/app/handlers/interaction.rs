//! Handler für Zeiger-Gesten.
//!
//! Während einer Geste werden nur die betroffenen Formen neu abgeleitet; das
//! Anlegen einer Kante beim Loslassen baut die Szene komplett neu auf.

use glam::Vec2;

use crate::app::render_scene;
use crate::app::state::DragTarget;
use crate::app::use_cases;
use crate::app::use_cases::drag::DragOutcome;
use crate::app::AppState;

/// Beginnt eine Geste auf einem bestehenden Element.
pub fn begin_drag(state: &mut AppState, target: DragTarget) {
    use_cases::drag::begin_drag(state, target);
    render_scene::sync_overlay(state);
}

/// Beginnt das Zeichnen einer neuen Kante.
pub fn begin_draw_edge(state: &mut AppState, from: u64, pointer: Vec2) {
    use_cases::drag::begin_draw_edge(state, from, pointer);
    render_scene::sync_overlay(state);
}

/// Setzt die laufende Geste fort.
pub fn update_drag(state: &mut AppState, pointer: Vec2) -> anyhow::Result<()> {
    match use_cases::drag::update_drag(state, pointer)? {
        Some(DragTarget::Node { id }) | Some(DragTarget::StartArrow { id }) => {
            render_scene::refresh_node(state, id)?;
        }
        Some(DragTarget::SelfEdge { id }) => render_scene::refresh_edge(state, id, id)?,
        Some(DragTarget::Edge { from, to }) | Some(DragTarget::Label { from, to }) => {
            render_scene::refresh_edge(state, from, to)?;
        }
        Some(DragTarget::DrawingNewEdge { .. }) | None => {}
    }
    render_scene::sync_overlay(state);
    Ok(())
}

/// Beendet die laufende Geste.
pub fn end_drag(state: &mut AppState, pointer: Vec2) -> anyhow::Result<()> {
    match use_cases::drag::end_drag(state, pointer)? {
        DragOutcome::EdgeCreated { .. } => render_scene::rebuild(state),
        DragOutcome::None | DragOutcome::Finished | DragOutcome::DraftDiscarded => {
            render_scene::sync_overlay(state)
        }
    }
    Ok(())
}
