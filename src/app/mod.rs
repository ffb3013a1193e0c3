//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Graph, Szene, Selektion, Geste).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::rebuild as rebuild_render_scene;
pub use state::{AppState, DragState, DragTarget, Selection, SelectionState, ViewState};
pub use use_cases::drag::DragOutcome;
