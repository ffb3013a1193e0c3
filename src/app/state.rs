//! Application State: zentrale Datenhaltung der Editor-Sitzung.

mod app_state;
mod interaction;
mod selection;
mod view;

pub use app_state::AppState;
pub use interaction::{DragState, DragTarget};
pub use selection::{Selection, SelectionState};
pub use view::ViewState;
