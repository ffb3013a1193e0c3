use automaton_editor::app::render_scene;
use automaton_editor::geometry::hit_test;
use automaton_editor::{to_tikz, AppState, ExportOptions, Graph, NodeAttribute};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

/// Ring aus Nodes mit Kanten zum Nachbarn, jeder dritte mit Self-Loop.
fn build_synthetic_graph(node_count: usize) -> Graph {
    let mut graph = Graph::new();
    let center = Vec2::splat(50.0);

    let ids: Vec<u64> = (0..node_count)
        .map(|i| {
            let angle = i as f32 / node_count as f32 * std::f32::consts::TAU;
            graph.add_node_at(center + Vec2::from_angle(angle) * 40.0)
        })
        .collect();

    for (i, &id) in ids.iter().enumerate() {
        let next = ids[(i + 1) % ids.len()];
        let _ = graph.add_edge(id, next);
        let _ = graph.set_curve_offset(id, next, (i % 5) as f32 - 2.0);
        let _ = graph.set_edge_description(id, next, "a_1 || b^2");
        if i % 3 == 0 {
            let _ = graph.add_edge(id, id);
            let _ = graph.toggle_attribute(id, NodeAttribute::End);
        }
    }
    if let Some(&first) = ids.first() {
        let _ = graph.toggle_attribute(first, NodeAttribute::Start);
    }
    graph
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f32 + 0.37;
            let y = ((i * 7) % 100) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_scene_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_rebuild");

    for &node_count in &[10usize, 50, 200] {
        let mut state = AppState::new();
        state.graph = build_synthetic_graph(node_count);

        group.bench_function(BenchmarkId::new("full", node_count), |b| {
            b.iter(|| {
                render_scene::rebuild(black_box(&mut state));
                black_box(state.scene.len())
            })
        });

        group.bench_function(BenchmarkId::new("refresh_node", node_count), |b| {
            b.iter(|| {
                render_scene::refresh_node(black_box(&mut state), 0).expect("Node 0 existiert");
                black_box(state.scene.take_changes().updated.len())
            })
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let query_points = build_query_points(1024);

    for &node_count in &[10usize, 50, 200] {
        let state = AppState {
            graph: build_synthetic_graph(node_count),
            ..AppState::new()
        };

        group.bench_with_input(
            BenchmarkId::new("batch", node_count),
            &state,
            |b, state| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if hit_test(&state.graph, black_box(*point), &state.options).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("tikz_export");
    let options = ExportOptions::default();

    for &node_count in &[10usize, 50, 200] {
        let graph = build_synthetic_graph(node_count);

        group.bench_with_input(
            BenchmarkId::new("to_tikz", node_count),
            &graph,
            |b, graph| b.iter(|| black_box(to_tikz(black_box(graph), &options).len())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scene_rebuild, bench_hit_test, bench_export);
criterion_main!(benches);
