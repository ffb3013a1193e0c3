use glam::Vec2;

/// Was gerade gezogen wird; wird beim Drücken einmal festgelegt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    /// Node verschieben
    Node { id: u64 },
    /// Krümmung einer Kante zwischen zwei Nodes ändern
    Edge { from: u64, to: u64 },
    /// Self-Loop um den Node drehen
    SelfEdge { id: u64 },
    /// Label einer Kante oder eines Self-Loops verschieben
    Label { from: u64, to: u64 },
    /// Start-Pfeil drehen
    StartArrow { id: u64 },
    /// Neue Kante vom Node `from` aus zeichnen
    DrawingNewEdge { from: u64, pointer: Vec2 },
}

/// Zustandsautomat der Zeiger-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Keine laufende Geste
    #[default]
    Idle,
    /// Genau ein Element wird gezogen
    Dragging(DragTarget),
}

impl DragState {
    /// `true` während einer Geste.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Aktuelles Ziel der Geste.
    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(target) => Some(*target),
        }
    }
}
