//! Gerichtete Kante zwischen zwei Nodes oder Self-Loop an einem Node.

use serde::{Deserialize, Serialize};

use super::Description;

/// Geometrie-Parameter einer Kante.
///
/// Zwei verschiedene Endpunkte tragen immer einen Krümmungs-Offset, ein Self-Loop
/// immer einen Winkel. Beides gleichzeitig ist nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeShape {
    /// Kante zwischen zwei Nodes; 0 = gerade, Vorzeichen wählt die Biegerichtung
    Curved { offset: f32 },
    /// Self-Loop; Richtung in Grad (0° = oben, im Uhrzeigersinn)
    Loop { angle: f32 },
}

impl EdgeShape {
    /// Standardform passend zu den Endpunkten.
    pub fn for_endpoints(from: u64, to: u64) -> Self {
        if from == to {
            EdgeShape::Loop { angle: 0.0 }
        } else {
            EdgeShape::Curved { offset: 0.0 }
        }
    }

    /// Name der Form für Fehlermeldungen.
    pub fn kind_name(&self) -> &'static str {
        match self {
            EdgeShape::Curved { .. } => "Kurve",
            EdgeShape::Loop { .. } => "Self-Loop",
        }
    }
}

/// Eine gerichtete Kante, eindeutig über `(from, to)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Quell-Node
    pub from: u64,
    /// Ziel-Node
    pub to: u64,
    /// Beschriftung (Markup)
    pub description: Description,
    /// Senkrechte Verschiebung des Labels gegenüber dem Standard-Anker
    pub text_offset: f32,
    /// Krümmung bzw. Loop-Winkel
    pub shape: EdgeShape,
}

impl Edge {
    /// Erstellt eine Kante mit Standardform für die Endpunkte.
    pub fn new(from: u64, to: u64, description: Description, text_offset: f32) -> Self {
        Self {
            from,
            to,
            description,
            text_offset,
            shape: EdgeShape::for_endpoints(from, to),
        }
    }

    /// `true` für Self-Loops.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Schlüssel `(from, to)`.
    pub fn key(&self) -> (u64, u64) {
        (self.from, self.to)
    }

    /// Krümmungs-Offset; `None` bei Self-Loops.
    pub fn curve_offset(&self) -> Option<f32> {
        match self.shape {
            EdgeShape::Curved { offset } => Some(offset),
            EdgeShape::Loop { .. } => None,
        }
    }

    /// Loop-Winkel; `None` bei Kanten zwischen zwei Nodes.
    pub fn loop_angle(&self) -> Option<f32> {
        match self.shape {
            EdgeShape::Loop { angle } => Some(angle),
            EdgeShape::Curved { .. } => None,
        }
    }
}
