use approx::assert_relative_eq;
use automaton_editor::app::rebuild_render_scene;
use automaton_editor::geometry::shapes::edge_label_anchor;
use automaton_editor::{
    AppController, AppIntent, AppState, DragState, DragTarget, NodeAttribute, ShapeKey,
};
use glam::Vec2;

const A: Vec2 = Vec2::new(20.0, 50.0);
const B: Vec2 = Vec2::new(60.0, 50.0);
const C: Vec2 = Vec2::new(80.0, 90.0);

/// Drei Nodes, Kante a→b; Szene aufgebaut.
fn session() -> (AppController, AppState) {
    let mut state = AppState::new();
    for pos in [A, B, C] {
        state.graph.add_node_at(pos);
    }
    state.graph.add_edge(0, 1).expect("Kante erwartet");
    rebuild_render_scene(&mut state);
    (AppController::new(), state)
}

fn drag(
    controller: &mut AppController,
    state: &mut AppState,
    start: Vec2,
    shape: Option<ShapeKey>,
    to: Vec2,
) {
    let intents = [
        AppIntent::PointerPressed {
            pos: start,
            shape,
            draw_modifier: false,
        },
        AppIntent::PointerMoved { pos: to },
        AppIntent::PointerReleased { pos: to },
    ];
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Drag sollte ohne Fehler durchlaufen");
    }
}

fn coords(state: &AppState, id: u64) -> Vec2 {
    state.graph.node(id).expect("Node erwartet").coords
}

#[test]
fn node_drag_moves_node_and_refreshes_only_incident_shapes() {
    let (mut controller, mut state) = session();
    state.scene.take_changes();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: A,
                shape: None,
                draw_modifier: false,
            },
        )
        .expect("Press erwartet");
    assert_eq!(state.interaction, DragState::Dragging(DragTarget::Node { id: 0 }));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(30.0, 20.0),
            },
        )
        .expect("Move erwartet");

    assert_eq!(coords(&state, 0), Vec2::new(30.0, 20.0));
    let changes = state.scene.take_changes();
    assert!(changes.updated.contains(&ShapeKey::Node(0)));
    assert!(changes.updated.contains(&ShapeKey::Edge { from: 0, to: 1 }));
    assert!(changes.updated.contains(&ShapeKey::EdgeLabel { from: 0, to: 1 }));
    assert!(!changes.updated.contains(&ShapeKey::Node(2)));
}

#[test]
fn node_drag_into_neighbour_is_rejected() {
    let (mut controller, mut state) = session();

    drag(&mut controller, &mut state, B, None, Vec2::new(25.0, 50.0));

    assert_eq!(coords(&state, 1), B);
    assert_eq!(state.interaction, DragState::Idle);
}

#[test]
fn node_drag_is_clamped_to_canvas() {
    let (mut controller, mut state) = session();

    drag(&mut controller, &mut state, A, None, Vec2::new(-10.0, 120.0));

    assert_eq!(coords(&state, 0), Vec2::new(4.0, 96.0));
}

#[test]
fn node_drag_snaps_to_grid_when_enabled() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(&mut state, AppIntent::GridToggleRequested)
        .expect("Grid erwartet");

    drag(&mut controller, &mut state, A, None, Vec2::new(21.3, 33.1));

    assert_eq!(coords(&state, 0), Vec2::new(20.0, 32.0));
}

#[test]
fn curve_drag_bends_towards_pointer() {
    let (mut controller, mut state) = session();
    let mid = (A + B) * 0.5;
    let pointer = Vec2::new(40.0, 44.0);

    drag(&mut controller, &mut state, mid, None, pointer);

    let edge = state.graph.edge(0, 1).expect("Kante erwartet");
    let offset = edge.curve_offset().expect("Kurve erwartet");
    assert_relative_eq!(offset.abs(), 6.0, epsilon = 1e-4);

    let control = automaton_editor::geometry::shapes::curve_control_point(A, B, offset);
    assert!((control - mid).dot(pointer - mid) > 0.0);
}

#[test]
fn small_curve_drag_keeps_edge_straight() {
    let (mut controller, mut state) = session();
    let mid = (A + B) * 0.5;

    drag(&mut controller, &mut state, mid, None, mid + Vec2::new(0.0, 0.8));

    let edge = state.graph.edge(0, 1).expect("Kante erwartet");
    assert_eq!(edge.curve_offset(), Some(0.0));
}

#[test]
fn self_loop_drag_sets_angle_from_bearing() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(&mut state, AppIntent::AddEdgeRequested { from: 0, to: 0 })
        .expect("Self-Loop erwartet");

    drag(
        &mut controller,
        &mut state,
        A,
        Some(ShapeKey::Edge { from: 0, to: 0 }),
        A + Vec2::new(10.0, 0.0),
    );

    let angle = state
        .graph
        .edge(0, 0)
        .expect("Self-Loop erwartet")
        .loop_angle()
        .expect("Winkel erwartet");
    assert_relative_eq!(angle, 90.0, epsilon = 1e-3);
}

#[test]
fn start_arrow_drag_sets_start_angle() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(
            &mut state,
            AppIntent::NodeAttributeToggled {
                id: 0,
                attribute: NodeAttribute::Start,
            },
        )
        .expect("Toggle erwartet");

    drag(
        &mut controller,
        &mut state,
        A,
        Some(ShapeKey::StartArrow(0)),
        A + Vec2::new(0.0, -10.0),
    );

    let angle = state
        .graph
        .node(0)
        .expect("Node erwartet")
        .start_angle
        .expect("Startwinkel erwartet");
    assert_relative_eq!(angle, 0.0, epsilon = 1e-3);
    assert_eq!(coords(&state, 0), A);
}

#[test]
fn label_drag_moves_anchor_onto_pointer() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(
            &mut state,
            AppIntent::EdgeDescriptionEdited {
                from: 0,
                to: 1,
                text: "x".into(),
            },
        )
        .expect("Label erwartet");
    // Standard-Labelverschiebung -2 → Anker 2 Einheiten oberhalb der Kante
    let anchor = Vec2::new(40.0, 48.0);
    let pointer = Vec2::new(40.0, 49.0);

    drag(&mut controller, &mut state, anchor, None, pointer);

    let edge = state.graph.edge(0, 1).expect("Kante erwartet");
    assert_relative_eq!(edge.text_offset, -1.0, epsilon = 1e-4);
    let moved = edge_label_anchor(edge, A, B, &state.options);
    assert_relative_eq!(moved.x, pointer.x, epsilon = 1e-4);
    assert_relative_eq!(moved.y, pointer.y, epsilon = 1e-4);
}

#[test]
fn far_label_drag_is_limited_to_offset_band() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(
            &mut state,
            AppIntent::EdgeDescriptionEdited {
                from: 0,
                to: 1,
                text: "x".into(),
            },
        )
        .expect("Label erwartet");
    let limit = state.options.text_offset_limit;

    drag(
        &mut controller,
        &mut state,
        Vec2::new(40.0, 48.0),
        Some(ShapeKey::EdgeLabel { from: 0, to: 1 }),
        Vec2::new(40.0, 5.0),
    );

    let edge = state.graph.edge(0, 1).expect("Kante erwartet");
    assert!(edge.text_offset.abs() <= limit);
    assert_relative_eq!(edge.text_offset, -limit, epsilon = 1e-4);
}

#[test]
fn removing_dragged_node_cancels_gesture() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: B,
                shape: None,
                draw_modifier: false,
            },
        )
        .expect("Press erwartet");

    controller
        .handle_intent(&mut state, AppIntent::RemoveNodeRequested { id: 1 })
        .expect("Entfernen erwartet");
    assert_eq!(state.interaction, DragState::Idle);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(40.0, 40.0),
            },
        )
        .expect("Move ohne Geste ist ein No-op");
    assert_eq!(state.node_count(), 2);
    assert_eq!(state.edge_count(), 0);
}

#[test]
fn pointer_leaving_canvas_ends_gesture() {
    let (mut controller, mut state) = session();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: A,
                shape: None,
                draw_modifier: false,
            },
        )
        .expect("Press erwartet");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerLeft {
                pos: Vec2::new(-5.0, 50.0),
            },
        )
        .expect("Leave erwartet");

    assert_eq!(state.interaction, DragState::Idle);
    assert_eq!(coords(&state, 0), A);
}
