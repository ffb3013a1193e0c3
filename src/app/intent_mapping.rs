//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::state::{DragTarget, Selection};
use super::{AppCommand, AppIntent, AppState};
use crate::geometry::hit_test;
use crate::shared::ShapeKey;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            pos,
            shape,
            draw_modifier,
        } => map_pointer_pressed(state, pos, shape, draw_modifier),
        AppIntent::PointerMoved { pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::UpdateDrag { pointer: pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { pos } | AppIntent::PointerLeft { pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndDrag { pointer: pos }]
            } else {
                vec![]
            }
        }
        AppIntent::AddNodeRequested => vec![AppCommand::AddNode],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::ToggleAttributeOnSelectionRequested { attribute } => {
            match state.selection.node_id() {
                Some(id) => vec![AppCommand::ToggleNodeAttribute { id, attribute }],
                None => vec![],
            }
        }
        AppIntent::NodeAttributeToggled { id, attribute } => {
            vec![AppCommand::ToggleNodeAttribute { id, attribute }]
        }
        AppIntent::SelectionDescriptionEdited { text } => match state.selection.current {
            Some(Selection::Node(id)) => vec![AppCommand::SetNodeDescription { id, text }],
            Some(Selection::Edge { from, to }) => {
                vec![AppCommand::SetEdgeDescription { from, to, text }]
            }
            None => vec![],
        },
        AppIntent::NodeDescriptionEdited { id, text } => {
            vec![AppCommand::SetNodeDescription { id, text }]
        }
        AppIntent::EdgeDescriptionEdited { from, to, text } => {
            vec![AppCommand::SetEdgeDescription { from, to, text }]
        }
        AppIntent::AddEdgeRequested { from, to } => vec![AppCommand::AddEdge { from, to }],
        AppIntent::RemoveEdgeRequested { from, to } => vec![AppCommand::RemoveEdge { from, to }],
        AppIntent::RemoveNodeRequested { id } => vec![AppCommand::RemoveNode { id }],
        AppIntent::GridToggleRequested => vec![AppCommand::ToggleGrid],
        AppIntent::ResetRequested => vec![AppCommand::ResetGraph],
        AppIntent::ExportRequested => vec![AppCommand::ExportTikz],
    }
}

fn map_pointer_pressed(
    state: &AppState,
    pos: Vec2,
    shape: Option<ShapeKey>,
    draw_modifier: bool,
) -> Vec<AppCommand> {
    if let Some(target) = state.interaction.target() {
        log::warn!("Zeiger gedrückt während laufender Geste {:?}, ignoriert", target);
        return vec![];
    }

    let Some(key) = shape.or_else(|| hit_test(&state.graph, pos, &state.options)) else {
        return vec![AppCommand::ClearSelection];
    };

    if !shape_exists(state, key) {
        log::warn!("Form {} existiert nicht mehr, Klick ignoriert", key);
        return vec![];
    }

    match key {
        ShapeKey::Node(id) if draw_modifier => vec![
            AppCommand::ClearSelection,
            AppCommand::BeginDrawEdge { from: id, pointer: pos },
        ],
        ShapeKey::Node(id) => vec![
            AppCommand::SelectNode { id },
            AppCommand::BeginDrag {
                target: DragTarget::Node { id },
            },
        ],
        ShapeKey::StartArrow(id) => vec![
            AppCommand::SelectNode { id },
            AppCommand::BeginDrag {
                target: DragTarget::StartArrow { id },
            },
        ],
        ShapeKey::Edge { from, to } => {
            let target = if from == to {
                DragTarget::SelfEdge { id: from }
            } else {
                DragTarget::Edge { from, to }
            };
            vec![
                AppCommand::SelectEdge { from, to },
                AppCommand::BeginDrag { target },
            ]
        }
        ShapeKey::EdgeLabel { from, to } => vec![
            AppCommand::SelectEdge { from, to },
            AppCommand::BeginDrag {
                target: DragTarget::Label { from, to },
            },
        ],
    }
}

/// Prüft, ob die gemeldete Form noch ein Element im Graph adressiert.
fn shape_exists(state: &AppState, key: ShapeKey) -> bool {
    match key {
        ShapeKey::Node(id) => state.graph.contains_node(id),
        ShapeKey::StartArrow(id) => state.graph.node(id).is_ok_and(|n| n.is_start()),
        ShapeKey::Edge { from, to } | ShapeKey::EdgeLabel { from, to } => {
            state.graph.find_edge(from, to).is_some()
        }
    }
}
