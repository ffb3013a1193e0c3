use crate::core::Graph;
use crate::shared::ShapeKey;

/// Das aktuell selektierte Element (höchstens eines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Ein Node
    Node(u64),
    /// Eine Kante bzw. ein Self-Loop
    Edge { from: u64, to: u64 },
}

impl Selection {
    /// Schlüssel der hervorzuhebenden Form.
    pub fn shape_key(&self) -> ShapeKey {
        match *self {
            Selection::Node(id) => ShapeKey::Node(id),
            Selection::Edge { from, to } => ShapeKey::Edge { from, to },
        }
    }
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuelle Selektion
    pub current: Option<Selection>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektierter Node, falls ein Node selektiert ist.
    pub fn node_id(&self) -> Option<u64> {
        match self.current {
            Some(Selection::Node(id)) => Some(id),
            _ => None,
        }
    }

    /// Selektierte Kante, falls eine Kante selektiert ist.
    pub fn edge_key(&self) -> Option<(u64, u64)> {
        match self.current {
            Some(Selection::Edge { from, to }) => Some((from, to)),
            _ => None,
        }
    }

    /// Hebt die Selektion auf, wenn ihr Element nicht mehr im Graph existiert.
    pub fn retain_valid(&mut self, graph: &Graph) {
        let valid = match self.current {
            None => true,
            Some(Selection::Node(id)) => graph.contains_node(id),
            Some(Selection::Edge { from, to }) => graph.find_edge(from, to).is_some(),
        };
        if !valid {
            self.current = None;
        }
    }
}
