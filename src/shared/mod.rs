//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `geometry` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::{EditorOptions, ExportOptions};
pub use render_scene::{
    DrawCommand, PathGeometry, PositionedLine, RenderScene, SceneChanges, Shape, ShapeKey,
};
