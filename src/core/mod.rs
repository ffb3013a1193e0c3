//! Core-Domänentypen: Vektormathematik, Label-Markup, Nodes, Kanten, Graph, Spatial-Index.

pub mod edge;
pub mod error;
pub mod graph;
pub mod markup;
/// Core-Datenmodelle des Automaten-Editors
///
/// - Graph: Container für alle Nodes und Kanten
/// - StateNode: Zustand mit Position, Beschriftung und Start/End-Attributen
/// - Edge: gerichtete Kante oder Self-Loop
pub mod node;
pub mod spatial;
pub mod vector;

pub use edge::{Edge, EdgeShape};
pub use error::GraphError;
pub use graph::{AddEdgeOutcome, Graph, GraphDefaults, IncidentEdges};
pub use markup::{Description, LabelLine};
pub use node::{NodeAttribute, StateNode};
pub use spatial::{SpatialIndex, SpatialMatch};
