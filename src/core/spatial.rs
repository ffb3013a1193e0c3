//! Spatial-Index (KD-Tree) über den Node-Mittelpunkten.
//!
//! Dient dem Hit-Test auf Nodes, der Drop-Ziel-Suche beim Zeichnen neuer Kanten
//! und der Abstandsprüfung beim Verschieben.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Spatial-Index über die Node-Positionen; der Graph hält ihn bei jeder Änderung aktuell.
///
/// Die Node-ID ist direkt das Item im KD-Tree.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    len: usize,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: KdTree::new(),
            len: 0,
        }
    }

    /// Baut einen Index aus `(id, position)`-Paaren.
    pub fn from_positions(positions: impl IntoIterator<Item = (u64, Vec2)>) -> Self {
        let mut index = Self::empty();
        for (id, pos) in positions {
            index.insert(id, pos);
        }
        index
    }

    /// Fügt einen Node hinzu.
    pub fn insert(&mut self, node_id: u64, position: Vec2) {
        self.tree.add(&to_point(position), node_id);
        self.len += 1;
    }

    /// Entfernt einen Node; `position` muss die indexierte Position sein.
    pub fn remove(&mut self, node_id: u64, position: Vec2) -> bool {
        let removed = self.tree.remove(&to_point(position), node_id);
        if removed == 0 {
            log::warn!(
                "Node {} nicht an ({}, {}) im Spatial-Index gefunden",
                node_id,
                position.x,
                position.y
            );
            return false;
        }
        self.len = self.len.saturating_sub(removed);
        true
    }

    /// Verschiebt einen Node von `from` nach `to`.
    pub fn relocate(&mut self, node_id: u64, from: Vec2, to: Vec2) {
        if self.remove(node_id, from) {
            self.insert(node_id, to);
        }
    }

    /// Gibt die Anzahl indexierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Findet den nächsten Node zur gegebenen Position.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&to_point(query));

        Some(SpatialMatch {
            node_id: result.item,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Nodes innerhalb eines Radius, nach Distanz (dann ID) sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&to_point(query), (radius * radius) as f64)
            .into_iter()
            .map(|entry| SpatialMatch {
                node_id: entry.item,
                distance: (entry.distance as f32).sqrt(),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.node_id.cmp(&b.node_id))
        });
        results
    }

    /// `true` wenn ein anderer Node als `exclude` näher als `min_distance` an `query` liegt.
    pub fn has_other_within(&self, query: Vec2, min_distance: f32, exclude: u64) -> bool {
        self.within_radius(query, min_distance)
            .iter()
            .any(|m| m.node_id != exclude && m.distance < min_distance)
    }
}

fn to_point(pos: Vec2) -> [f64; 2] {
    [pos.x as f64, pos.y as f64]
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
