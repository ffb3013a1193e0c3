//! Handler für den TikZ-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Erzeugt den Export der aktuellen Sitzung.
pub fn export_tikz(state: &mut AppState) {
    use_cases::export::export_tikz(state);
}
