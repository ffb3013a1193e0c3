use glam::Vec2;

use crate::core::NodeAttribute;
use crate::shared::ShapeKey;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger gedrückt; `shape` ist die vom Renderer gemeldete Form (sonst Hit-Test)
    PointerPressed {
        pos: Vec2,
        shape: Option<ShapeKey>,
        /// Zeichen-Modifier (z.B. Strg) gehalten
        draw_modifier: bool,
    },
    /// Zeiger bewegt
    PointerMoved { pos: Vec2 },
    /// Zeiger losgelassen
    PointerReleased { pos: Vec2 },
    /// Zeiger hat den Canvas verlassen (wie Loslassen)
    PointerLeft { pos: Vec2 },
    /// Neuen Node an der Standardposition anlegen
    AddNodeRequested,
    /// Selektiertes Element löschen
    DeleteSelectedRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Attribut des selektierten Nodes umschalten
    ToggleAttributeOnSelectionRequested { attribute: NodeAttribute },
    /// Attribut eines bestimmten Nodes umschalten
    NodeAttributeToggled { id: u64, attribute: NodeAttribute },
    /// Beschriftung des selektierten Elements geändert
    SelectionDescriptionEdited { text: String },
    /// Node-Beschriftung geändert
    NodeDescriptionEdited { id: u64, text: String },
    /// Kanten-Beschriftung geändert
    EdgeDescriptionEdited { from: u64, to: u64, text: String },
    /// Kante anlegen
    AddEdgeRequested { from: u64, to: u64 },
    /// Kante entfernen
    RemoveEdgeRequested { from: u64, to: u64 },
    /// Node entfernen
    RemoveNodeRequested { id: u64 },
    /// Gitter (und Snapping) umschalten
    GridToggleRequested,
    /// Sitzung zurücksetzen
    ResetRequested,
    /// TikZ-Export erzeugen
    ExportRequested,
}
