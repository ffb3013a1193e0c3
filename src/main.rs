//! Automaton Editor.
//!
//! Kommandozeilen-Demo des Editor-Kerns: spielt eine kurze Zeiger-Sitzung gegen den
//! Controller ab und gibt den TikZ-Export auf stdout aus.

use automaton_editor::{
    AppController, AppIntent, AppState, EditorOptions, NodeAttribute, ShapeKey,
};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Automaton Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    for intent in demo_session() {
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
    }

    log::info!(
        "Sitzung beendet: {} Nodes, {} Kanten, {} Formen in der Szene",
        state.node_count(),
        state.edge_count(),
        state.scene.len()
    );

    if let Some(tikz) = state.last_export.as_deref() {
        println!("{}", tikz);
    }
    Ok(())
}

/// Zwei Zustände mit Übergang, Rückkante und Self-Loop.
fn demo_session() -> Vec<AppIntent> {
    let q0 = Vec2::new(10.0, 10.0);
    let q1 = Vec2::new(40.0, 30.0);

    vec![
        // q0 anlegen, als Start markieren, beschriften
        AppIntent::AddNodeRequested,
        AppIntent::ToggleAttributeOnSelectionRequested {
            attribute: NodeAttribute::Start,
        },
        AppIntent::SelectionDescriptionEdited { text: "q_0".into() },
        // q1 liegt zunächst auf q0 und wird an seine Position gezogen
        AppIntent::AddNodeRequested,
        AppIntent::PointerPressed {
            pos: q0,
            shape: Some(ShapeKey::Node(1)),
            draw_modifier: false,
        },
        AppIntent::PointerMoved { pos: q1 },
        AppIntent::PointerReleased { pos: q1 },
        AppIntent::ToggleAttributeOnSelectionRequested {
            attribute: NodeAttribute::End,
        },
        AppIntent::SelectionDescriptionEdited { text: "q_1".into() },
        // Kante q0 → q1 zeichnen und beschriften
        AppIntent::PointerPressed {
            pos: q0,
            shape: None,
            draw_modifier: true,
        },
        AppIntent::PointerMoved { pos: q1 },
        AppIntent::PointerReleased { pos: q1 },
        AppIntent::SelectionDescriptionEdited { text: "a".into() },
        // Rückkante und Self-Loop an q1
        AppIntent::AddEdgeRequested { from: 1, to: 0 },
        AppIntent::EdgeDescriptionEdited {
            from: 1,
            to: 0,
            text: "b".into(),
        },
        AppIntent::AddEdgeRequested { from: 1, to: 1 },
        AppIntent::EdgeDescriptionEdited {
            from: 1,
            to: 1,
            text: "a || b".into(),
        },
        AppIntent::ExportRequested,
    ]
}
