use glam::Vec2;

use crate::app::state::DragTarget;
use crate::core::NodeAttribute;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Selektion aufheben
    ClearSelection,
    /// Node selektieren
    SelectNode { id: u64 },
    /// Kante selektieren
    SelectEdge { from: u64, to: u64 },
    /// Geste auf einem bestehenden Element beginnen
    BeginDrag { target: DragTarget },
    /// Neue Kante vom Node aus zeichnen
    BeginDrawEdge { from: u64, pointer: Vec2 },
    /// Laufende Geste mit neuer Zeigerposition fortsetzen
    UpdateDrag { pointer: Vec2 },
    /// Laufende Geste beenden
    EndDrag { pointer: Vec2 },
    /// Node an der Standardposition anlegen und selektieren
    AddNode,
    /// Selektiertes Element löschen
    DeleteSelected,
    /// Node samt Kanten entfernen
    RemoveNode { id: u64 },
    /// Kante entfernen
    RemoveEdge { from: u64, to: u64 },
    /// Kante anlegen
    AddEdge { from: u64, to: u64 },
    /// Node-Attribut umschalten
    ToggleNodeAttribute { id: u64, attribute: NodeAttribute },
    /// Node-Beschriftung setzen
    SetNodeDescription { id: u64, text: String },
    /// Kanten-Beschriftung setzen
    SetEdgeDescription { from: u64, to: u64, text: String },
    /// Gitter umschalten
    ToggleGrid,
    /// Graph leeren
    ResetGraph,
    /// TikZ-Export erzeugen
    ExportTikz,
}
