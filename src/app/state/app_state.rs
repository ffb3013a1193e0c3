use crate::core::Graph;
use crate::shared::{EditorOptions, RenderScene};

use super::{DragState, SelectionState, ViewState};

/// Hauptzustand einer Editor-Sitzung
pub struct AppState {
    /// Der bearbeitete Graph
    pub graph: Graph,
    /// Abgeleitete Zeichenbefehle für den Renderer
    pub scene: RenderScene,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufende Zeiger-Geste
    pub interaction: DragState,
    /// View-State
    pub view: ViewState,
    /// Read-only Einstellungen
    pub options: EditorOptions,
    /// Ergebnis des letzten Exports
    pub last_export: Option<String>,
}

impl AppState {
    /// Erstellt eine leere Sitzung mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine leere Sitzung mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self {
            graph: Graph::with_defaults(options.graph_defaults()),
            scene: RenderScene::new(),
            selection: SelectionState::new(),
            interaction: DragState::Idle,
            view: ViewState::new(options.grid_enabled),
            options,
            last_export: None,
        };
        crate::app::render_scene::rebuild(&mut state);
        state
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
