use super::*;
use glam::Vec2;

fn two_nodes() -> (Graph, u64, u64) {
    let mut graph = Graph::new();
    let a = graph.add_node_at(Vec2::new(10.0, 10.0));
    let b = graph.add_node_at(Vec2::new(30.0, 10.0));
    (graph, a, b)
}

#[test]
fn test_add_node_uses_default_position_and_fresh_ids() {
    let mut graph = Graph::new();
    let first = graph.add_node();
    let second = graph.add_node();

    assert_eq!((first, second), (0, 1));
    let node = graph.node(first).expect("Node erwartet");
    assert_eq!(node.coords, DEFAULT_NODE_POSITION);
    assert!(node.description.is_empty());
    assert!(!node.is_start());
    assert!(!node.accepting);
}

#[test]
fn test_ids_are_never_reused() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    graph.remove_node(a).expect("Entfernen erwartet");
    let b = graph.add_node();

    assert_ne!(a, b);
    assert_eq!(graph.next_id(), 2);
}

#[test]
fn test_duplicate_edge_is_reported_and_not_stored() {
    let (mut graph, a, b) = two_nodes();

    assert_eq!(graph.add_edge(a, b), Ok(AddEdgeOutcome::Added));
    assert_eq!(graph.add_edge(a, b), Ok(AddEdgeOutcome::Duplicate));
    assert_eq!(graph.edges().filter(|e| e.key() == (a, b)).count(), 1);

    // Gegenrichtung ist ein eigenes Paar
    assert_eq!(graph.add_edge(b, a), Ok(AddEdgeOutcome::Added));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_new_edges_get_shape_matching_endpoints() {
    let (mut graph, a, b) = two_nodes();
    graph.add_edge(a, b).expect("Kante erwartet");
    graph.add_edge(a, a).expect("Self-Loop erwartet");

    let curved = graph.edge(a, b).expect("Kante erwartet");
    assert_eq!(curved.shape, EdgeShape::Curved { offset: 0.0 });
    assert_eq!(curved.text_offset, DEFAULT_TEXT_OFFSET);

    let self_loop = graph.edge(a, a).expect("Self-Loop erwartet");
    assert_eq!(self_loop.shape, EdgeShape::Loop { angle: 0.0 });
    assert!(graph.has_self_loop(a));
}

#[test]
fn test_add_edge_with_unknown_node_fails() {
    let (mut graph, a, _) = two_nodes();
    assert_eq!(graph.add_edge(a, 99), Err(GraphError::UnknownNode(99)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_node_cascades_all_incident_edges() {
    let mut graph = Graph::new();
    let a = graph.add_node_at(Vec2::new(10.0, 10.0));
    let b = graph.add_node_at(Vec2::new(30.0, 10.0));
    let c = graph.add_node_at(Vec2::new(50.0, 10.0));
    for (from, to) in [(a, b), (b, a), (b, b), (c, b), (a, c)] {
        graph.add_edge(from, to).expect("Kante erwartet");
    }

    let removed = graph.remove_node(b).expect("Entfernen erwartet");
    assert_eq!(removed.id, b);

    let remaining: Vec<(u64, u64)> = graph.edges().map(Edge::key).collect();
    assert_eq!(remaining, vec![(a, c)]);
    assert!(graph.nodes_within(Vec2::new(30.0, 10.0), 1.0).is_empty());
}

#[test]
fn test_second_remove_is_an_error() {
    let (mut graph, a, _) = two_nodes();
    graph.remove_node(a).expect("Entfernen erwartet");
    assert_eq!(graph.remove_node(a), Err(GraphError::UnknownNode(a)));
}

#[test]
fn test_remove_edge_is_noop_when_absent() {
    let (mut graph, a, b) = two_nodes();
    graph.add_edge(a, b).expect("Kante erwartet");

    assert_eq!(graph.remove_edge(b, a), Ok(false));
    assert_eq!(graph.remove_edge(a, b), Ok(true));
    assert_eq!(graph.remove_edge(a, b), Ok(false));
    assert_eq!(graph.remove_edge(a, 42), Err(GraphError::UnknownNode(42)));
}

#[test]
fn test_edges_involving_reports_self_loop_once() {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    for (from, to) in [(a, a), (b, a), (a, c), (c, a)] {
        graph.add_edge(from, to).expect("Kante erwartet");
    }

    let incident = graph.edges_involving(a).expect("Node erwartet");
    assert_eq!(incident.incoming, vec![b, c]);
    assert_eq!(incident.outgoing, vec![a, c]);
    assert_eq!(
        incident.edge_keys(a),
        vec![(b, a), (c, a), (a, a), (a, c)]
    );
}

#[test]
fn test_toggle_start_sets_and_clears_angle() {
    let (mut graph, a, _) = two_nodes();

    assert_eq!(graph.toggle_attribute(a, NodeAttribute::Start), Ok(true));
    assert_eq!(
        graph.node(a).expect("Node erwartet").start_angle,
        Some(DEFAULT_START_ANGLE)
    );

    assert_eq!(graph.toggle_attribute(a, NodeAttribute::Start), Ok(false));
    assert_eq!(graph.node(a).expect("Node erwartet").start_angle, None);
    assert_eq!(
        graph.set_start_angle(a, 90.0),
        Err(GraphError::NotAStartNode(a))
    );
}

#[test]
fn test_toggle_end_flips_accepting() {
    let (mut graph, a, _) = two_nodes();
    assert_eq!(graph.toggle_attribute(a, NodeAttribute::End), Ok(true));
    assert!(graph.node(a).expect("Node erwartet").has_attribute(NodeAttribute::End));
    assert_eq!(graph.toggle_attribute(a, NodeAttribute::End), Ok(false));
}

#[test]
fn test_descriptions_are_parsed_from_raw_input() {
    let (mut graph, a, b) = two_nodes();
    graph.add_edge(a, b).expect("Kante erwartet");

    graph
        .set_node_description(a, "q_0 || start")
        .expect("Beschriftung erwartet");
    graph
        .set_edge_description(a, b, "a, b")
        .expect("Beschriftung erwartet");

    assert_eq!(
        graph.node(a).expect("Node erwartet").description.lines(),
        ["q_0", "start"]
    );
    assert_eq!(
        graph.edge(a, b).expect("Kante erwartet").description.lines(),
        ["a, b"]
    );
    assert_eq!(
        graph.set_edge_description(b, a, "x"),
        Err(GraphError::UnknownEdge { from: b, to: a })
    );
}

#[test]
fn test_shape_setters_reject_wrong_edge_kind() {
    let (mut graph, a, b) = two_nodes();
    graph.add_edge(a, b).expect("Kante erwartet");
    graph.add_edge(a, a).expect("Self-Loop erwartet");

    graph.set_curve_offset(a, b, 4.0).expect("Offset erwartet");
    graph.set_loop_angle(a, 90.0).expect("Winkel erwartet");
    assert_eq!(
        graph.set_curve_offset(a, a, 1.0),
        Err(GraphError::ShapeMismatch {
            from: a,
            to: a,
            found: "Self-Loop",
        })
    );
    assert_eq!(
        graph.set_loop_angle(b, 0.0),
        Err(GraphError::UnknownEdge { from: b, to: b })
    );

    assert_eq!(graph.edge(a, b).expect("Kante erwartet").curve_offset(), Some(4.0));
    assert_eq!(graph.edge(a, a).expect("Self-Loop erwartet").loop_angle(), Some(90.0));
}

#[test]
fn test_set_coords_updates_spatial_index() {
    let (mut graph, a, _) = two_nodes();
    graph
        .set_coords(a, Vec2::new(70.0, 70.0))
        .expect("Position erwartet");

    let hits = graph.nodes_within(Vec2::new(70.5, 70.0), 1.0);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].node_id, a);
}

#[test]
fn test_spatial_index_follows_repeated_moves_and_removal() {
    let (mut graph, a, b) = two_nodes();
    for step in 1..=5 {
        graph
            .set_coords(a, Vec2::new(10.0 + step as f32 * 10.0, 60.0))
            .expect("Position erwartet");
    }
    assert_eq!(graph.spatial_index().len(), 2);
    assert!(graph.nodes_within(Vec2::new(20.0, 60.0), 1.0).is_empty());
    assert_eq!(graph.nodes_within(Vec2::new(60.0, 60.0), 1.0)[0].node_id, a);

    graph.remove_node(b).expect("Entfernen erwartet");
    assert_eq!(graph.spatial_index().len(), 1);
    assert!(graph.nodes_within(Vec2::new(30.0, 10.0), 1.0).is_empty());

    let c = graph.add_node_at(Vec2::new(30.0, 10.0));
    assert_eq!(graph.nodes_within(Vec2::new(30.0, 10.0), 1.0)[0].node_id, c);
}

#[test]
fn test_json_snapshot_restores_order_and_counter() {
    let mut graph = Graph::new();
    let a = graph.add_node_at(Vec2::new(10.0, 10.0));
    let b = graph.add_node_at(Vec2::new(40.0, 20.0));
    let removed = graph.add_node();
    graph.remove_node(removed).expect("Entfernen erwartet");
    graph.add_edge(b, a).expect("Kante erwartet");
    graph.add_edge(a, b).expect("Kante erwartet");
    graph.toggle_attribute(a, NodeAttribute::Start).expect("Toggle erwartet");

    let json = graph.to_json().expect("JSON erwartet");
    let restored = Graph::from_json(&json, GraphDefaults::default()).expect("Graph erwartet");

    assert_eq!(restored.first_node_id(), Some(a));
    assert_eq!(restored.next_id(), 3);
    let keys: Vec<(u64, u64)> = restored.edges().map(Edge::key).collect();
    assert_eq!(keys, vec![(b, a), (a, b)]);
    assert_eq!(
        restored.node(a).expect("Node erwartet"),
        graph.node(a).expect("Node erwartet")
    );
}

#[test]
fn test_reset_clears_everything() {
    let (mut graph, a, b) = two_nodes();
    graph.add_edge(a, b).expect("Kante erwartet");
    graph.reset();

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.add_node(), 0);
}
