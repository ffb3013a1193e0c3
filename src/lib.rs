//! Automaton Editor Library.
//! Geometrie- und Interaktions-Kern als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod geometry;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, DragTarget, Selection, ViewState,
};
pub use core::{
    AddEdgeOutcome, Description, Edge, EdgeShape, Graph, GraphError, LabelLine, NodeAttribute,
    StateNode,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use export::to_tikz;
pub use shared::{EditorOptions, ExportOptions, RenderScene, ShapeKey};
