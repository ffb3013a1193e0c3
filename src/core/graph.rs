//! Das Graph-Modell: Nodes, gerichtete Kanten, ID-Zähler und Spatial-Index.

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    Description, Edge, EdgeShape, GraphError, NodeAttribute, SpatialIndex, SpatialMatch,
    StateNode,
};

/// Standardposition neuer Nodes.
pub const DEFAULT_NODE_POSITION: Vec2 = Vec2::new(10.0, 10.0);
/// Standard-Labelverschiebung neuer Kanten.
pub const DEFAULT_TEXT_OFFSET: f32 = -2.0;
/// Start-Pfeil-Richtung beim Setzen des Start-Attributs (von links).
pub const DEFAULT_START_ANGLE: f32 = 270.0;

/// Startwerte für neu angelegte Elemente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphDefaults {
    /// Position von `add_node`
    pub node_position: Vec2,
    /// Labelverschiebung neuer Kanten
    pub text_offset: f32,
    /// Start-Pfeil-Richtung beim Aktivieren von `Start`
    pub start_angle: f32,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            node_position: DEFAULT_NODE_POSITION,
            text_offset: DEFAULT_TEXT_OFFSET,
            start_angle: DEFAULT_START_ANGLE,
        }
    }
}

/// Ergebnis von [`Graph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddEdgeOutcome {
    /// Kante wurde angelegt
    Added,
    /// Für dieses geordnete Paar existiert bereits eine Kante; nichts geändert
    Duplicate,
}

/// Nachbarn eines Nodes, getrennt nach Richtung.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentEdges {
    /// Quell-Nodes von Kanten in den Node (ohne Self-Loop)
    pub incoming: Vec<u64>,
    /// Ziel-Nodes von Kanten aus dem Node (Self-Loop eingeschlossen)
    pub outgoing: Vec<u64>,
}

impl IncidentEdges {
    /// Alle betroffenen Kanten-Schlüssel `(from, to)` für den Node `id`.
    pub fn edge_keys(&self, id: u64) -> Vec<(u64, u64)> {
        self.incoming
            .iter()
            .map(|&from| (from, id))
            .chain(self.outgoing.iter().map(|&to| (id, to)))
            .collect()
    }
}

/// Serialisierbarer Schnappschuss des Graphen (Kanten als Liste, Reihenfolge erhalten).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphSnapshot {
    next_id: u64,
    nodes: Vec<StateNode>,
    edges: Vec<Edge>,
}

/// Der Automaten-Graph.
///
/// Nodes und Kanten behalten ihre Einfüge-Reihenfolge; der erste Node ist Bezugspunkt
/// für den Export. IDs werden nie wiederverwendet.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: IndexMap<u64, StateNode>,
    /// Kanten, indexiert nach (from, to) für O(1)-Zugriff
    edges: IndexMap<(u64, u64), Edge>,
    next_id: u64,
    defaults: GraphDefaults,
    spatial_index: SpatialIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Erstellt einen leeren Graphen mit Standardwerten.
    pub fn new() -> Self {
        Self::with_defaults(GraphDefaults::default())
    }

    /// Erstellt einen leeren Graphen mit eigenen Startwerten.
    pub fn with_defaults(defaults: GraphDefaults) -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            next_id: 0,
            defaults,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Startwerte für neue Elemente.
    pub fn defaults(&self) -> &GraphDefaults {
        &self.defaults
    }

    /// Leert den Graphen und setzt den ID-Zähler zurück.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 0;
        self.spatial_index = SpatialIndex::empty();
    }

    // --- Abfragen ---

    /// Anzahl der Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Kanten.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nächste zu vergebende ID.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Alle Nodes in Einfüge-Reihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &StateNode> {
        self.nodes.values()
    }

    /// Alle Kanten in Einfüge-Reihenfolge.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// ID des ersten Nodes (Bezugspunkt für relative Positionen).
    pub fn first_node_id(&self) -> Option<u64> {
        self.nodes.keys().next().copied()
    }

    /// Prüft, ob ein Node existiert.
    pub fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Liefert einen Node oder [`GraphError::UnknownNode`].
    pub fn node(&self, id: u64) -> Result<&StateNode, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::UnknownNode(id))
    }

    /// Liefert eine Kante oder einen Fehler (unbekannter Node bzw. unbekannte Kante).
    pub fn edge(&self, from: u64, to: u64) -> Result<&Edge, GraphError> {
        self.ensure_nodes(from, to)?;
        self.edges
            .get(&(from, to))
            .ok_or(GraphError::UnknownEdge { from, to })
    }

    /// Sucht eine Kante ohne Fehler, `None` wenn nicht vorhanden.
    pub fn find_edge(&self, from: u64, to: u64) -> Option<&Edge> {
        self.edges.get(&(from, to))
    }

    /// `true` wenn der Node einen Self-Loop hat.
    pub fn has_self_loop(&self, id: u64) -> bool {
        self.edges.contains_key(&(id, id))
    }

    /// Ausgehende Kanten eines Nodes in Einfüge-Reihenfolge.
    pub fn outgoing_edges(&self, id: u64) -> Result<Vec<&Edge>, GraphError> {
        self.node(id)?;
        Ok(self.edges.values().filter(|e| e.from == id).collect())
    }

    /// Nachbarn eines Nodes; der Self-Loop erscheint genau einmal, unter `outgoing`.
    pub fn edges_involving(&self, id: u64) -> Result<IncidentEdges, GraphError> {
        self.node(id)?;
        let mut incident = IncidentEdges::default();
        for &(from, to) in self.edges.keys() {
            if from == id {
                incident.outgoing.push(to);
            } else if to == id {
                incident.incoming.push(from);
            }
        }
        Ok(incident)
    }

    /// Nodes im Radius um eine Position, nach Distanz sortiert.
    pub fn nodes_within(&self, position: Vec2, radius: f32) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(position, radius)
    }

    /// Spatial-Index über alle Node-Positionen.
    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.spatial_index
    }

    // --- Struktur ---

    /// Legt einen Node an der Standardposition an und liefert seine ID.
    pub fn add_node(&mut self) -> u64 {
        self.add_node_at(self.defaults.node_position)
    }

    /// Legt einen Node an einer Position an und liefert seine ID.
    pub fn add_node_at(&mut self, coords: Vec2) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes
            .insert(id, StateNode::new(id, coords, Description::empty()));
        self.spatial_index.insert(id, coords);
        id
    }

    /// Legt eine Kante an; ein vorhandenes Paar liefert [`AddEdgeOutcome::Duplicate`].
    pub fn add_edge(&mut self, from: u64, to: u64) -> Result<AddEdgeOutcome, GraphError> {
        self.ensure_nodes(from, to)?;
        if self.edges.contains_key(&(from, to)) {
            return Ok(AddEdgeOutcome::Duplicate);
        }
        self.edges.insert(
            (from, to),
            Edge::new(from, to, Description::empty(), self.defaults.text_offset),
        );
        Ok(AddEdgeOutcome::Added)
    }

    /// Entfernt einen Node samt aller Kanten, an denen er beteiligt ist.
    pub fn remove_node(&mut self, id: u64) -> Result<StateNode, GraphError> {
        let removed = self
            .nodes
            .shift_remove(&id)
            .ok_or(GraphError::UnknownNode(id))?;
        self.edges.retain(|&(from, to), _| from != id && to != id);
        self.spatial_index.remove(id, removed.coords);
        Ok(removed)
    }

    /// Entfernt eine Kante; `Ok(false)` wenn das Paar keine Kante hat.
    pub fn remove_edge(&mut self, from: u64, to: u64) -> Result<bool, GraphError> {
        self.ensure_nodes(from, to)?;
        Ok(self.edges.shift_remove(&(from, to)).is_some())
    }

    // --- Attribute und Beschriftungen ---

    /// Schaltet ein Attribut um und liefert den neuen Zustand.
    ///
    /// `Start` setzt den Standard-Startwinkel bzw. entfernt ihn wieder.
    pub fn toggle_attribute(
        &mut self,
        id: u64,
        attribute: NodeAttribute,
    ) -> Result<bool, GraphError> {
        let default_angle = self.defaults.start_angle;
        let node = self.node_mut(id)?;
        let enabled = match attribute {
            NodeAttribute::Start => {
                node.start_angle = match node.start_angle {
                    Some(_) => None,
                    None => Some(default_angle),
                };
                node.start_angle.is_some()
            }
            NodeAttribute::End => {
                node.accepting = !node.accepting;
                node.accepting
            }
        };
        Ok(enabled)
    }

    /// Setzt die Node-Beschriftung aus einer Roh-Eingabe (`||` trennt Zeilen).
    pub fn set_node_description(&mut self, id: u64, raw: &str) -> Result<(), GraphError> {
        self.node_mut(id)?.description = Description::parse(raw);
        Ok(())
    }

    /// Setzt die Kanten-Beschriftung aus einer Roh-Eingabe.
    pub fn set_edge_description(&mut self, from: u64, to: u64, raw: &str) -> Result<(), GraphError> {
        self.edge_mut(from, to)?.description = Description::parse(raw);
        Ok(())
    }

    // --- Geometrie-Parameter ---

    /// Setzt die Node-Position (ohne Prüfung; Grenzen und Abstände regelt die Drag-Logik).
    pub fn set_coords(&mut self, id: u64, coords: Vec2) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        if node.coords == coords {
            return Ok(());
        }
        let previous = std::mem::replace(&mut node.coords, coords);
        self.spatial_index.relocate(id, previous, coords);
        Ok(())
    }

    /// Setzt den Start-Pfeil-Winkel; nur für Start-Nodes.
    pub fn set_start_angle(&mut self, id: u64, angle: f32) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        match node.start_angle.as_mut() {
            Some(current) => {
                *current = angle;
                Ok(())
            }
            None => Err(GraphError::NotAStartNode(id)),
        }
    }

    /// Setzt die Krümmung einer Kante zwischen zwei Nodes.
    pub fn set_curve_offset(&mut self, from: u64, to: u64, offset: f32) -> Result<(), GraphError> {
        let edge = self.edge_mut(from, to)?;
        match &mut edge.shape {
            EdgeShape::Curved { offset: current } => {
                *current = offset;
                Ok(())
            }
            other => Err(GraphError::ShapeMismatch {
                from,
                to,
                found: other.kind_name(),
            }),
        }
    }

    /// Setzt den Winkel eines Self-Loops.
    pub fn set_loop_angle(&mut self, id: u64, angle: f32) -> Result<(), GraphError> {
        let edge = self.edge_mut(id, id)?;
        match &mut edge.shape {
            EdgeShape::Loop { angle: current } => {
                *current = angle;
                Ok(())
            }
            other => Err(GraphError::ShapeMismatch {
                from: id,
                to: id,
                found: other.kind_name(),
            }),
        }
    }

    /// Setzt die Labelverschiebung einer Kante.
    pub fn set_text_offset(&mut self, from: u64, to: u64, text_offset: f32) -> Result<(), GraphError> {
        self.edge_mut(from, to)?.text_offset = text_offset;
        Ok(())
    }

    // --- Schnappschüsse ---

    /// Serialisiert den Graphen als JSON (Sitzungs-Schnappschuss im Speicher).
    pub fn to_json(&self) -> serde_json::Result<String> {
        let snapshot = GraphSnapshot {
            next_id: self.next_id,
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
        };
        serde_json::to_string(&snapshot)
    }

    /// Stellt einen Graphen aus einem JSON-Schnappschuss wieder her.
    ///
    /// Kanten auf unbekannte Nodes und unpassende Formen werden verworfen.
    pub fn from_json(json: &str, defaults: GraphDefaults) -> serde_json::Result<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        let mut graph = Self::with_defaults(defaults);

        for node in snapshot.nodes {
            graph.next_id = graph.next_id.max(node.id + 1);
            graph.nodes.insert(node.id, node);
        }
        graph.next_id = graph.next_id.max(snapshot.next_id);

        for edge in snapshot.edges {
            let consistent = graph.ensure_nodes(edge.from, edge.to).is_ok()
                && matches!(
                    (edge.is_self_loop(), edge.shape),
                    (true, EdgeShape::Loop { .. }) | (false, EdgeShape::Curved { .. })
                );
            if !consistent {
                log::warn!(
                    "Kante {} -> {} im Schnappschuss ist inkonsistent und wird verworfen",
                    edge.from,
                    edge.to
                );
                continue;
            }
            graph.edges.insert(edge.key(), edge);
        }

        graph.rebuild_spatial_index();
        Ok(graph)
    }

    // --- intern ---

    fn node_mut(&mut self, id: u64) -> Result<&mut StateNode, GraphError> {
        self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))
    }

    fn edge_mut(&mut self, from: u64, to: u64) -> Result<&mut Edge, GraphError> {
        self.ensure_nodes(from, to)?;
        self.edges
            .get_mut(&(from, to))
            .ok_or(GraphError::UnknownEdge { from, to })
    }

    fn ensure_nodes(&self, from: u64, to: u64) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        Ok(())
    }

    fn rebuild_spatial_index(&mut self) {
        self.spatial_index =
            SpatialIndex::from_positions(self.nodes.values().map(|n| (n.id, n.coords)));
    }
}

#[cfg(test)]
mod tests;
