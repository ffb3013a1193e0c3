/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Gitter sichtbar; schaltet zugleich alles Snapping ein
    pub show_grid: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand.
    pub fn new(show_grid: bool) -> Self {
        Self { show_grid }
    }
}
