//! Writer für TikZ-Automatendiagramme.

use glam::Vec2;

use crate::core::vector::{direction, wrap_degrees};
use crate::core::{Description, Edge, Graph, StateNode};
use crate::shared::ExportOptions;

/// Erzeugt die TikZ-Beschreibung eines Graphen.
///
/// Die Ausgabe hängt nur von Graph und Optionen ab; zweimaliger Export ohne
/// Mutation liefert identischen Text.
pub fn to_tikz(graph: &Graph, options: &ExportOptions) -> String {
    let mut output = String::new();
    output.push_str("\\begin{tikzpicture}[->, >=stealth, semithick]\n");
    output.push_str(&format!(
        "\\tikzset{{every state/.style={{minimum size={}}}}}\n\n",
        options.state_minimum_size
    ));

    let first = graph.first_node_id().and_then(|id| graph.node(id).ok());
    for node in graph.nodes() {
        output.push_str(&node_statement(node, first, options));
    }
    output.push('\n');

    output.push_str(&path_statement(graph, options));
    output.push_str("\n\\end{tikzpicture}\n");
    output
}

fn node_statement(node: &StateNode, first: Option<&StateNode>, options: &ExportOptions) -> String {
    let mut style = String::from("state");
    if let Some(angle) = node.start_angle {
        style.push_str(&format!(
            ", initial, initial text=, initial {}",
            initial_direction(angle)
        ));
    }
    if node.accepting {
        style.push_str(", accepting");
    }
    if node.description.lines().len() > 1 {
        style.push_str(", align=center");
    }

    let position = match first {
        Some(first) if first.id != node.id => relative_position(node, first, options),
        _ => String::new(),
    };

    format!(
        "\\node [{}] ({}) {}{{{}}};\n",
        style,
        node.id,
        position,
        label_to_latex(&node.description)
    )
}

/// Position relativ zum ersten Node, z.B. `[below right=1.4cm and 3cm of 0] `.
fn relative_position(node: &StateNode, first: &StateNode, options: &ExportOptions) -> String {
    let delta = node.coords - first.coords;
    let horizontal = delta.x.abs() / options.horizontal_divisor;
    let vertical = (delta.y.abs() / options.vertical_divisor - options.vertical_correction).max(0.0);

    // Canvas-y wächst nach unten.
    let vertical_word = if delta.y < 0.0 { "above" } else { "below" };
    let horizontal_word = if delta.x < 0.0 { "left" } else { "right" };

    let clause = match (delta.y != 0.0, delta.x != 0.0) {
        (true, true) => format!(
            "{} {}={}cm and {}cm",
            vertical_word,
            horizontal_word,
            format_number(vertical),
            format_number(horizontal)
        ),
        (true, false) => format!("{}={}cm", vertical_word, format_number(vertical)),
        (false, true) => format!("{}={}cm", horizontal_word, format_number(horizontal)),
        (false, false) => return String::new(),
    };
    format!("[{} of {}] ", clause, first.id)
}

/// Richtung des `initial`-Pfeils aus dem Startwinkel (90°-Sektoren).
fn initial_direction(angle: f32) -> &'static str {
    let angle = wrap_degrees(angle);
    if angle > 225.0 && angle < 315.0 {
        "left"
    } else if angle > 45.0 && angle < 135.0 {
        "right"
    } else if angle > 135.0 && angle < 225.0 {
        "below"
    } else {
        "above"
    }
}

/// Alle Kanten in einer `\path`-Anweisung, gruppiert nach Quell-Node.
fn path_statement(graph: &Graph, options: &ExportOptions) -> String {
    const PATH_PREFIX: &str = "\\path ";

    let mut groups = Vec::new();
    for node in graph.nodes() {
        let Ok(edges) = graph.outgoing_edges(node.id) else {
            continue;
        };
        if edges.is_empty() {
            continue;
        }

        let source = format!("({}) ", node.id);
        let indent = " ".repeat(PATH_PREFIX.len() + source.len());
        let statements: Vec<String> = edges
            .iter()
            .map(|edge| edge_statement(graph, edge, options))
            .collect();
        groups.push(format!("{}{}", source, statements.join(&format!("\n{}", indent))));
    }

    if groups.is_empty() {
        return String::new();
    }
    let separator = format!("\n{}", " ".repeat(PATH_PREFIX.len()));
    format!("{}{};\n", PATH_PREFIX, groups.join(&separator))
}

fn edge_statement(graph: &Graph, edge: &Edge, options: &ExportOptions) -> String {
    let shape = match (edge.loop_angle(), edge.curve_offset()) {
        (Some(angle), _) => {
            let base = wrap_degrees(360.0 - angle + 90.0);
            format!(
                "[out={}, in={}, loop] ",
                format_number(wrap_degrees(base + options.loop_spread)),
                format_number(wrap_degrees(base - options.loop_spread))
            )
        }
        (None, Some(offset)) if offset != 0.0 => format!(
            "[bend {}={}] ",
            if offset < 0.0 { "left" } else { "right" },
            format_number(options.bend_factor * offset.abs())
        ),
        _ => String::new(),
    };

    let mut node_style = String::from("align=center");
    if !edge.description.is_empty() {
        let anchor = match edge.loop_angle() {
            Some(angle) => loop_label_anchor(angle),
            None => curve_label_anchor(graph, edge, options),
        };
        node_style.push_str(", ");
        node_style.push_str(anchor);
    }

    format!(
        "edge {}node [{}] {{{}}} ({})",
        shape,
        node_style,
        label_to_latex(&edge.description),
        edge.to
    )
}

/// Anker eines Self-Loop-Labels: acht 45°-Sektoren um Vielfache von 45°.
fn loop_label_anchor(angle: f32) -> &'static str {
    const ANCHORS: [&str; 8] = [
        "above",
        "above right",
        "right",
        "below right",
        "below",
        "below left",
        "left",
        "above left",
    ];
    let sector = ((wrap_degrees(angle) + 22.5) / 45.0).floor() as usize % ANCHORS.len();
    ANCHORS[sector]
}

/// Anker eines Kantenlabels aus Kantenrichtung und Seite der Labelverschiebung.
fn curve_label_anchor(graph: &Graph, edge: &Edge, options: &ExportOptions) -> &'static str {
    let (Ok(from), Ok(to)) = (graph.node(edge.from), graph.node(edge.to)) else {
        return "above";
    };
    anchor_for(
        direction(from.coords, to.coords),
        edge.text_offset,
        options.dominance_ratio,
    )
}

fn anchor_for(dir: Vec2, text_offset: f32, dominance_ratio: f32) -> &'static str {
    // Seite, auf der das Label relativ zur Sehne liegt.
    let side = dir.perp() * text_offset;
    let above = side.y <= 0.0;
    let left = side.x < 0.0;

    if dir.x.abs() > dir.y.abs() * dominance_ratio {
        if above {
            "above"
        } else {
            "below"
        }
    } else if dir.y.abs() > dir.x.abs() * dominance_ratio {
        if left {
            "left"
        } else {
            "right"
        }
    } else {
        match (above, left) {
            (true, true) => "above left",
            (true, false) => "above right",
            (false, true) => "below left",
            (false, false) => "below right",
        }
    }
}

/// Beschriftung als `$text_{sub}^{super}$`-Zeilen, getrennt durch `\\`.
pub fn label_to_latex(description: &Description) -> String {
    description
        .markup()
        .iter()
        .map(|line| {
            let mut out = format!("${}", line.text);
            if !line.sub.is_empty() {
                out.push_str(&format!("_{{{}}}", line.sub));
            }
            if !line.sup.is_empty() {
                out.push_str(&format!("^{{{}}}", line.sup));
            }
            out.push('$');
            out
        })
        .collect::<Vec<_>>()
        .join("\\\\")
}

/// Zahl mit höchstens zwei Nachkommastellen, ohne abschließende Nullen.
pub fn format_number(value: f32) -> String {
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(graph: &Graph) -> String {
        to_tikz(graph, &ExportOptions::default())
    }

    #[test]
    fn format_number_trims_trailing_zeros() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.126), "0.13");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(12.0), "12");
    }

    #[test]
    fn initial_direction_uses_quarter_sectors() {
        assert_eq!(initial_direction(270.0), "left");
        assert_eq!(initial_direction(90.0), "right");
        assert_eq!(initial_direction(180.0), "below");
        assert_eq!(initial_direction(0.0), "above");
        assert_eq!(initial_direction(-90.0), "left");
    }

    #[test]
    fn loop_anchor_sectors() {
        assert_eq!(loop_label_anchor(0.0), "above");
        assert_eq!(loop_label_anchor(350.0), "above");
        assert_eq!(loop_label_anchor(45.0), "above right");
        assert_eq!(loop_label_anchor(90.0), "right");
        assert_eq!(loop_label_anchor(180.0), "below");
        assert_eq!(loop_label_anchor(270.0), "left");
        assert_eq!(loop_label_anchor(315.0), "above left");
    }

    #[test]
    fn curve_anchor_follows_text_offset_side() {
        // Horizontal nach rechts, Standard-Labelverschiebung negativ → oberhalb.
        assert_eq!(anchor_for(Vec2::X, -2.0, 5.0), "above");
        assert_eq!(anchor_for(Vec2::X, 2.0, 5.0), "below");
        assert_eq!(anchor_for(Vec2::NEG_X, -2.0, 5.0), "below");
        // Vertikal nach unten.
        assert_eq!(anchor_for(Vec2::Y, -2.0, 5.0), "right");
        assert_eq!(anchor_for(Vec2::Y, 2.0, 5.0), "left");
        // Diagonalen.
        assert_eq!(anchor_for(Vec2::new(1.0, 1.0), -2.0, 5.0), "above right");
        assert_eq!(anchor_for(Vec2::new(-1.0, -1.0), -2.0, 5.0), "below left");
        assert_eq!(anchor_for(Vec2::new(-1.0, 1.0), -2.0, 5.0), "below right");
        assert_eq!(anchor_for(Vec2::new(1.0, -1.0), -2.0, 5.0), "above left");
    }

    #[test]
    fn label_markup_to_latex() {
        assert_eq!(label_to_latex(&Description::parse("q_0")), "$q_{0}$");
        assert_eq!(label_to_latex(&Description::parse("a^2 || b")), "$a^{2}$\\\\$b$");
        assert_eq!(label_to_latex(&Description::empty()), "");
    }

    #[test]
    fn single_start_node_has_initial_left_and_no_position() {
        let mut graph = Graph::new();
        let id = graph.add_node();
        graph
            .toggle_attribute(id, crate::core::NodeAttribute::Start)
            .expect("Toggle erwartet");

        let tikz = export(&graph);

        assert!(tikz.contains(
            "\\node [state, initial, initial text=, initial left] (0) {};\n"
        ));
        assert!(!tikz.contains("\\path"));
        assert!(!tikz.contains(" of "));
    }

    #[test]
    fn relative_positions_against_first_node() {
        let mut graph = Graph::new();
        graph.add_node_at(Vec2::new(10.0, 10.0));
        graph.add_node_at(Vec2::new(40.0, 10.0));
        graph.add_node_at(Vec2::new(10.0, 30.0));
        graph.add_node_at(Vec2::new(0.0, 0.0));
        graph.add_node_at(Vec2::new(10.0, 10.0));

        let tikz = export(&graph);

        assert!(tikz.contains("\\node [state] (1) [right=3cm of 0] {};"));
        assert!(tikz.contains("\\node [state] (2) [below=1.4cm of 0] {};"));
        assert!(tikz.contains("\\node [state] (3) [above left=0.4cm and 1cm of 0] {};"));
        assert!(tikz.contains("\\node [state] (4) {};"));
    }

    #[test]
    fn edges_are_grouped_per_source() {
        let mut graph = Graph::new();
        let a = graph.add_node_at(Vec2::new(10.0, 10.0));
        let b = graph.add_node_at(Vec2::new(40.0, 10.0));
        graph.add_edge(a, b).expect("Kante erwartet");
        graph.add_edge(a, a).expect("Self-Loop erwartet");
        graph.add_edge(b, a).expect("Kante erwartet");
        graph.set_curve_offset(a, b, -4.0).expect("Offset erwartet");
        graph.set_loop_angle(a, 0.0).expect("Winkel erwartet");
        graph.set_edge_description(a, b, "x").expect("Label erwartet");

        let tikz = export(&graph);

        let expected = "\\path (0) edge [bend left=12] node [align=center, above] {$x$} (1)\n          edge [out=105, in=75, loop] node [align=center] {} (0)\n      (1) edge node [align=center] {} (0);\n";
        assert!(tikz.contains(expected), "{}", tikz);
        assert!(tikz.ends_with("\\end{tikzpicture}\n"));
    }
}
