//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Die Szene enthält nur logische Zeichenbefehle (Kreis, Pfad, Text) im normierten
//! Canvas-Raum. Jede Form ist über einen [`ShapeKey`] adressiert; geänderte und
//! entfernte Schlüssel werden gesammelt, damit ein Renderer nur das Delta anwenden muss.

use std::collections::BTreeSet;
use std::fmt;

use glam::Vec2;
use indexmap::IndexMap;

use crate::core::LabelLine;

/// Identität einer gezeichneten Form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKey {
    /// Kreis(e) und Beschriftung eines Nodes
    Node(u64),
    /// Pfad einer Kante (Kurve oder Self-Loop)
    Edge { from: u64, to: u64 },
    /// Label einer Kante; bei `from == to` das Self-Loop-Label
    EdgeLabel { from: u64, to: u64 },
    /// Start-Pfeil eines Start-Nodes
    StartArrow(u64),
}

impl ShapeKey {
    /// Node-ID, falls der Schlüssel einen Node oder dessen Start-Pfeil adressiert.
    pub fn node_id(&self) -> Option<u64> {
        match *self {
            ShapeKey::Node(id) | ShapeKey::StartArrow(id) => Some(id),
            ShapeKey::Edge { .. } | ShapeKey::EdgeLabel { .. } => None,
        }
    }

    /// Kanten-Schlüssel, falls der Schlüssel eine Kante oder deren Label adressiert.
    pub fn edge_key(&self) -> Option<(u64, u64)> {
        match *self {
            ShapeKey::Edge { from, to } | ShapeKey::EdgeLabel { from, to } => Some((from, to)),
            ShapeKey::Node(_) | ShapeKey::StartArrow(_) => None,
        }
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKey::Node(id) => write!(f, "node:{id}"),
            ShapeKey::Edge { from, to } => write!(f, "edge:{from}-{to}"),
            ShapeKey::EdgeLabel { from, to } => write!(f, "label:{from}-{to}"),
            ShapeKey::StartArrow(id) => write!(f, "start-arrow:{id}"),
        }
    }
}

/// Geometrie eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathGeometry {
    /// Gerade Strecke
    Line { from: Vec2, to: Vec2 },
    /// Quadratische Bézier-Kurve
    Quadratic { from: Vec2, control: Vec2, to: Vec2 },
    /// Self-Loop als (fast geschlossene) Ellipse, beginnend und endend bei `anchor`
    Loop {
        center: Vec2,
        radii: Vec2,
        rotation_deg: f32,
        anchor: Vec2,
    },
}

/// Eine positionierte Label-Zeile.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    /// Mittelpunkt der Zeile
    pub position: Vec2,
    /// Geparster Inhalt
    pub line: LabelLine,
    /// Horizontale Rückverschiebung des Exponenten über den Index
    pub super_back_shift: f32,
}

/// Logischer Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Kreis (Node-Umriss)
    Circle { center: Vec2, radius: f32 },
    /// Pfad, optional mit Pfeilspitze am Ende
    Path { geometry: PathGeometry, arrow: bool },
    /// Mehrzeiliger Text
    Text {
        lines: Vec<PositionedLine>,
        size: f32,
        sub_size: f32,
    },
}

/// Alle Zeichenbefehle einer adressierbaren Form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    /// Befehle in Zeichenreihenfolge
    pub commands: Vec<DrawCommand>,
}

impl Shape {
    /// Form aus einer Befehlsliste.
    pub fn new(commands: Vec<DrawCommand>) -> Self {
        Self { commands }
    }
}

/// Änderungen seit dem letzten [`RenderScene::take_changes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneChanges {
    /// Neu erzeugte oder geänderte Formen
    pub updated: Vec<ShapeKey>,
    /// Entfernte Formen
    pub removed: Vec<ShapeKey>,
    /// Gitter, Entwurfslinie oder Selektion haben sich geändert
    pub overlay_changed: bool,
}

/// Read-only Daten für den Renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    shapes: IndexMap<ShapeKey, Shape>,
    /// Gitterlinien (leer wenn das Gitter aus ist)
    pub grid_lines: Vec<PathGeometry>,
    /// Entwurfslinie beim Zeichnen einer neuen Kante
    pub draft_line: Option<PathGeometry>,
    /// Hervorgehobene Form (Selektion)
    pub selected: Option<ShapeKey>,
    updated: BTreeSet<ShapeKey>,
    removed: BTreeSet<ShapeKey>,
    overlay_changed: bool,
}

impl RenderScene {
    /// Leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Formen.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// `true` wenn keine Form vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Form zu einem Schlüssel.
    pub fn shape(&self, key: &ShapeKey) -> Option<&Shape> {
        self.shapes.get(key)
    }

    /// `true` wenn eine Form zu dem Schlüssel existiert.
    pub fn contains(&self, key: &ShapeKey) -> bool {
        self.shapes.contains_key(key)
    }

    /// Alle Formen in Zeichenreihenfolge (später gezeichnet liegt oben).
    pub fn shapes(&self) -> impl Iterator<Item = (&ShapeKey, &Shape)> {
        self.shapes.iter()
    }

    /// Setzt oder ersetzt eine Form; bestehende Formen behalten ihre Zeichenposition.
    pub fn upsert(&mut self, key: ShapeKey, shape: Shape) {
        self.removed.remove(&key);
        self.updated.insert(key);
        self.shapes.insert(key, shape);
    }

    /// Entfernt eine Form (falls vorhanden).
    pub fn remove(&mut self, key: &ShapeKey) -> bool {
        if self.shapes.shift_remove(key).is_none() {
            return false;
        }
        self.updated.remove(key);
        self.removed.insert(*key);
        true
    }

    /// Entfernt alle Formen (Grundlage eines Komplett-Neuaufbaus).
    pub fn clear_shapes(&mut self) {
        for key in self.shapes.keys() {
            self.updated.remove(key);
            self.removed.insert(*key);
        }
        self.shapes.clear();
    }

    /// Setzt die Gitterlinien.
    pub fn set_grid_lines(&mut self, lines: Vec<PathGeometry>) {
        if self.grid_lines != lines {
            self.grid_lines = lines;
            self.overlay_changed = true;
        }
    }

    /// Setzt die Entwurfslinie.
    pub fn set_draft_line(&mut self, line: Option<PathGeometry>) {
        if self.draft_line != line {
            self.draft_line = line;
            self.overlay_changed = true;
        }
    }

    /// Setzt die hervorgehobene Form.
    pub fn set_selected(&mut self, key: Option<ShapeKey>) {
        if self.selected != key {
            self.selected = key;
            self.overlay_changed = true;
        }
    }

    /// Liefert die gesammelten Änderungen und setzt die Buchhaltung zurück.
    ///
    /// Ein Schlüssel, der entfernt und neu erzeugt wurde, erscheint nur unter `updated`.
    pub fn take_changes(&mut self) -> SceneChanges {
        let changes = SceneChanges {
            updated: std::mem::take(&mut self.updated).into_iter().collect(),
            removed: std::mem::take(&mut self.removed).into_iter().collect(),
            overlay_changed: self.overlay_changed,
        };
        self.overlay_changed = false;
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> Shape {
        Shape::new(vec![DrawCommand::Circle {
            center: Vec2::new(10.0, 10.0),
            radius: 4.0,
        }])
    }

    #[test]
    fn display_uses_stable_entity_keys() {
        assert_eq!(ShapeKey::Node(3).to_string(), "node:3");
        assert_eq!(ShapeKey::Edge { from: 1, to: 2 }.to_string(), "edge:1-2");
        assert_eq!(ShapeKey::StartArrow(7).to_string(), "start-arrow:7");
    }

    #[test]
    fn take_changes_reports_delta_once() {
        let mut scene = RenderScene::new();
        scene.upsert(ShapeKey::Node(0), circle());
        scene.upsert(ShapeKey::Node(1), circle());
        scene.remove(&ShapeKey::Node(1));
        scene.set_selected(Some(ShapeKey::Node(0)));

        let changes = scene.take_changes();
        assert_eq!(changes.updated, vec![ShapeKey::Node(0)]);
        assert_eq!(changes.removed, vec![ShapeKey::Node(1)]);
        assert!(changes.overlay_changed);

        assert_eq!(scene.take_changes(), SceneChanges::default());
    }

    #[test]
    fn clear_shapes_marks_all_removed_until_rebuilt() {
        let mut scene = RenderScene::new();
        for id in 0..4 {
            scene.upsert(ShapeKey::Node(id), circle());
        }
        scene.take_changes();

        scene.clear_shapes();
        scene.upsert(ShapeKey::Node(2), circle());

        assert_eq!(scene.len(), 1);
        let changes = scene.take_changes();
        assert_eq!(changes.updated, vec![ShapeKey::Node(2)]);
        assert_eq!(
            changes.removed,
            vec![ShapeKey::Node(0), ShapeKey::Node(1), ShapeKey::Node(3)]
        );
    }

    #[test]
    fn reinserted_key_keeps_draw_position() {
        let mut scene = RenderScene::new();
        scene.upsert(ShapeKey::Edge { from: 0, to: 1 }, Shape::default());
        scene.upsert(ShapeKey::Node(0), circle());
        scene.upsert(ShapeKey::Edge { from: 0, to: 1 }, circle());

        let order: Vec<ShapeKey> = scene.shapes().map(|(k, _)| *k).collect();
        assert_eq!(order, vec![ShapeKey::Edge { from: 0, to: 1 }, ShapeKey::Node(0)]);
    }
}
