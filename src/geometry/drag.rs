//! Inverse Geometrie: Zeigerposition → neuer Modellparameter des gezogenen Elements.
//!
//! Alle Funktionen sind rein; das Raster (`grid`) schaltet sämtliches Snapping ein.

use glam::Vec2;

use crate::core::vector::{angle360, signed_distance_to_line, snap, unit_normal, vector_from_angle};
use crate::core::SpatialIndex;
use crate::shared::EditorOptions;

/// Neue Krümmung einer Kante zwischen zwei Nodes.
///
/// Kleine Krümmungen rasten auf 0 (gerade Kante), danach optional aufs Raster.
pub fn curve_offset_from_pointer(
    pointer: Vec2,
    from: Vec2,
    to: Vec2,
    grid: bool,
    options: &EditorOptions,
) -> f32 {
    let mut offset = signed_distance_to_line(pointer, to - from, from);
    if (2.0 * offset).abs() < options.straight_edge_threshold {
        offset = 0.0;
    }
    snap(offset, options.grid_size, grid)
}

/// Neuer Self-Loop-Winkel.
pub fn loop_angle_from_pointer(pointer: Vec2, center: Vec2, grid: bool, options: &EditorOptions) -> f32 {
    snap_angle(angle360(center, pointer), grid, options)
}

/// Neuer Start-Pfeil-Winkel.
pub fn start_angle_from_pointer(pointer: Vec2, center: Vec2, grid: bool, options: &EditorOptions) -> f32 {
    snap_angle(angle360(center, pointer), grid, options)
}

/// Neue Labelverschiebung einer Kante zwischen zwei Nodes (relativ zur Krümmung).
///
/// Das Label bleibt im Band `±text_offset_limit` um die Kante.
pub fn curve_text_offset_from_pointer(
    pointer: Vec2,
    from: Vec2,
    to: Vec2,
    curve_offset: f32,
    grid: bool,
    options: &EditorOptions,
) -> f32 {
    let distance = signed_distance_to_line(pointer, to - from, from) - curve_offset;
    limit_text_offset(snap(distance, options.text_snap_step, grid), options)
}

/// Neue Labelverschiebung eines Self-Loops (entlang der Loop-Richtung, nach innen positiv).
pub fn loop_text_offset_from_pointer(
    pointer: Vec2,
    center: Vec2,
    loop_angle: f32,
    grid: bool,
    options: &EditorOptions,
) -> f32 {
    let base = center + vector_from_angle(loop_angle) * options.self_edge_text_distance;
    let distance = signed_distance_to_line(pointer, unit_normal(center, base), base);
    limit_text_offset(snap(distance, options.text_snap_step, grid), options)
}

/// Neue Node-Position: Raster → Canvas-Grenzen → Mindestabstand.
///
/// Kommt die Position einem anderen Node näher als `2·node_radius`, bleibt der Node
/// auf beiden Achsen an seiner bisherigen Position.
pub fn node_position_from_pointer(
    node_id: u64,
    current: Vec2,
    pointer: Vec2,
    index: &SpatialIndex,
    grid: bool,
    options: &EditorOptions,
) -> Vec2 {
    let r = options.node_radius;
    let max = options.canvas_size - r;
    let candidate = Vec2::new(
        snap(pointer.x, options.grid_size, grid).clamp(r, max),
        snap(pointer.y, options.grid_size, grid).clamp(r, max),
    );

    if index.has_other_within(candidate, options.min_node_distance(), node_id) {
        return current;
    }
    candidate
}

fn limit_text_offset(text_offset: f32, options: &EditorOptions) -> f32 {
    let limit = options.text_offset_limit.abs();
    text_offset.clamp(-limit, limit)
}

fn snap_angle(angle: f32, grid: bool, options: &EditorOptions) -> f32 {
    crate::core::vector::wrap_degrees(snap(angle, options.angle_snap_step, grid))
}
