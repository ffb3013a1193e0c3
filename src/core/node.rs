//! Ein Zustand (Node) des Automaten-Diagramms.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Description;

/// Umschaltbare Node-Attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttribute {
    /// Start-Zustand (mit Start-Pfeil)
    Start,
    /// Endzustand (doppelter Kreis)
    End,
}

/// Ein Zustand mit Position und Beschriftung.
///
/// Das Start-Attribut ist über `start_angle` abgebildet: `Some` heißt Start-Node,
/// ein Winkel ohne Start-Attribut ist damit nicht darstellbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateNode {
    /// Eindeutige, stabile ID
    pub id: u64,
    /// Beschriftung (Markup)
    pub description: Description,
    /// Richtung des Start-Pfeils in Grad, nur bei Start-Nodes
    pub start_angle: Option<f32>,
    /// Endzustand
    pub accepting: bool,
    /// Position im normierten Canvas `[0, 100]²`
    pub coords: Vec2,
}

impl StateNode {
    /// Erstellt einen Node ohne Attribute.
    pub fn new(id: u64, coords: Vec2, description: Description) -> Self {
        Self {
            id,
            description,
            start_angle: None,
            accepting: false,
            coords,
        }
    }

    /// `true` wenn der Node Start-Zustand ist.
    pub fn is_start(&self) -> bool {
        self.start_angle.is_some()
    }

    /// Prüft ein Attribut.
    pub fn has_attribute(&self, attribute: NodeAttribute) -> bool {
        match attribute {
            NodeAttribute::Start => self.is_start(),
            NodeAttribute::End => self.accepting,
        }
    }
}
