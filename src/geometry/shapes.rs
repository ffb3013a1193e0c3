//! Vorwärts-Geometrie: aus Modellzustand werden logische Zeichenbefehle.
//!
//! Konvention: überall der **normierte** Normalenvektor `n̂` der Richtung `from → to`.
//! Kontrollpunkt `mid + n̂·2·offset`, Label-Anker `mid + n̂·(offset + text_offset)`.
//! Damit liegt der Kurvenscheitel genau im Abstand `offset` von der Sehne.

use glam::Vec2;

use crate::core::vector::{midpoint, unit_normal, vector_from_angle};
use crate::core::{Description, Edge, EdgeShape, StateNode};
use crate::shared::{DrawCommand, EditorOptions, PathGeometry, PositionedLine, Shape};

/// Kontrollpunkt der quadratischen Kurve einer Kante zwischen zwei Nodes.
pub fn curve_control_point(from: Vec2, to: Vec2, offset: f32) -> Vec2 {
    midpoint(from, to) + unit_normal(from, to) * 2.0 * offset
}

/// Label-Anker einer Kante zwischen zwei Nodes.
pub fn curve_label_anchor(from: Vec2, to: Vec2, offset: f32, text_offset: f32) -> Vec2 {
    midpoint(from, to) + unit_normal(from, to) * (offset + text_offset)
}

/// Ellipsen-Geometrie eines Self-Loops, um `angle` um den Node gedreht.
///
/// Der Loop beginnt und endet `loop_inset` innerhalb des Node-Kreises.
pub fn loop_geometry(center: Vec2, angle: f32, options: &EditorOptions) -> PathGeometry {
    let direction = vector_from_angle(angle);
    let anchor_distance = options.node_radius - options.loop_inset;
    PathGeometry::Loop {
        center: center + direction * (anchor_distance + options.loop_radii.y),
        radii: options.loop_radii,
        rotation_deg: angle,
        anchor: center + direction * anchor_distance,
    }
}

/// Label-Anker eines Self-Loops.
pub fn loop_label_anchor(center: Vec2, angle: f32, text_offset: f32, options: &EditorOptions) -> Vec2 {
    center + vector_from_angle(angle) * (options.self_edge_text_distance - text_offset)
}

/// Strecke des Start-Pfeils (von außen zum Node-Mittelpunkt).
pub fn start_arrow_geometry(center: Vec2, start_angle: f32, options: &EditorOptions) -> PathGeometry {
    let length = options.node_radius + options.start_edge_distance;
    PathGeometry::Line {
        from: center + vector_from_angle(start_angle) * length,
        to: center,
    }
}

/// Pfad-Geometrie einer Kante.
pub fn edge_path(edge: &Edge, from: Vec2, to: Vec2, options: &EditorOptions) -> PathGeometry {
    match edge.shape {
        EdgeShape::Loop { angle } => loop_geometry(from, angle, options),
        EdgeShape::Curved { offset } if offset == 0.0 => PathGeometry::Line { from, to },
        EdgeShape::Curved { offset } => PathGeometry::Quadratic {
            from,
            control: curve_control_point(from, to, offset),
            to,
        },
    }
}

/// Label-Anker einer Kante.
pub fn edge_label_anchor(edge: &Edge, from: Vec2, to: Vec2, options: &EditorOptions) -> Vec2 {
    match edge.shape {
        EdgeShape::Loop { angle } => loop_label_anchor(from, angle, edge.text_offset, options),
        EdgeShape::Curved { offset } => curve_label_anchor(from, to, offset, edge.text_offset),
    }
}

/// Verteilt die Zeilen einer Beschriftung vertikal zentriert um den Anker.
pub fn layout_label(description: &Description, anchor: Vec2, options: &EditorOptions) -> Vec<PositionedLine> {
    let markup = description.markup();
    let count = markup.len();
    let spacing = options.line_spacing();
    let mut y = anchor.y - (count / 2) as f32 * spacing;
    if count % 2 == 0 {
        y += spacing / 2.0;
    }

    markup
        .into_iter()
        .map(|line| {
            let super_back_shift = if line.sup.is_empty() {
                0.0
            } else {
                -(line.sub.chars().count() as f32) * options.sub_text_size / 2.0
            };
            let positioned = PositionedLine {
                position: Vec2::new(anchor.x, y),
                line,
                super_back_shift,
            };
            y += spacing;
            positioned
        })
        .collect()
}

fn text_command(description: &Description, anchor: Vec2, options: &EditorOptions) -> Option<DrawCommand> {
    if description.is_empty() {
        return None;
    }
    Some(DrawCommand::Text {
        lines: layout_label(description, anchor, options),
        size: options.text_size,
        sub_size: options.sub_text_size,
    })
}

/// Form eines Nodes: Kreis, innerer Kreis bei Endzuständen, Beschriftung.
pub fn node_shape(node: &StateNode, options: &EditorOptions) -> Shape {
    let mut commands = vec![DrawCommand::Circle {
        center: node.coords,
        radius: options.node_radius,
    }];
    if node.accepting {
        commands.push(DrawCommand::Circle {
            center: node.coords,
            radius: options.node_radius - options.accepting_inset,
        });
    }
    commands.extend(text_command(&node.description, node.coords, options));
    Shape::new(commands)
}

/// Form des Start-Pfeils; `None` wenn der Node kein Start-Node ist.
pub fn start_arrow_shape(node: &StateNode, options: &EditorOptions) -> Option<Shape> {
    let angle = node.start_angle?;
    Some(Shape::new(vec![DrawCommand::Path {
        geometry: start_arrow_geometry(node.coords, angle, options),
        arrow: true,
    }]))
}

/// Pfad-Form einer Kante.
pub fn edge_shape(edge: &Edge, from: Vec2, to: Vec2, options: &EditorOptions) -> Shape {
    Shape::new(vec![DrawCommand::Path {
        geometry: edge_path(edge, from, to, options),
        arrow: true,
    }])
}

/// Label-Form einer Kante (leer ohne Beschriftung).
pub fn edge_label_shape(edge: &Edge, from: Vec2, to: Vec2, options: &EditorOptions) -> Shape {
    let anchor = edge_label_anchor(edge, from, to, options);
    Shape::new(text_command(&edge.description, anchor, options).into_iter().collect())
}

/// Gitterlinien über den ganzen Canvas.
pub fn grid_lines(options: &EditorOptions) -> Vec<PathGeometry> {
    let size = options.canvas_size;
    if options.grid_size <= 0.0 {
        return Vec::new();
    }
    let steps = (size / options.grid_size).floor() as usize;
    (0..=steps)
        .flat_map(|i| {
            let v = i as f32 * options.grid_size;
            [
                PathGeometry::Line {
                    from: Vec2::new(0.0, v),
                    to: Vec2::new(size, v),
                },
                PathGeometry::Line {
                    from: Vec2::new(v, 0.0),
                    to: Vec2::new(v, size),
                },
            ]
        })
        .collect()
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Tastet eine Pfad-Geometrie als Polylinie ab.
pub fn flatten(geometry: &PathGeometry, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    match *geometry {
        PathGeometry::Line { from, to } => vec![from, to],
        PathGeometry::Quadratic { from, control, to } => (0..=segments)
            .map(|i| quadratic_bezier(from, control, to, i as f32 / segments as f32))
            .collect(),
        PathGeometry::Loop {
            center,
            radii,
            rotation_deg,
            ..
        } => {
            let rotation = Vec2::from_angle(rotation_deg.to_radians());
            (0..=segments)
                .map(|i| {
                    let t = i as f32 / segments as f32 * std::f32::consts::TAU;
                    center + rotation.rotate(Vec2::new(radii.x * t.cos(), radii.y * t.sin()))
                })
                .collect()
        }
    }
}
