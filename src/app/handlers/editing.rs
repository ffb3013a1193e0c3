//! Handler für strukturelle Änderungen; jede Änderung baut die Szene neu auf.

use crate::app::render_scene;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::NodeAttribute;

/// Legt einen Node an.
pub fn add_node(state: &mut AppState) {
    use_cases::editing::add_node(state);
    render_scene::rebuild(state);
}

/// Löscht das selektierte Element.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::delete_selected(state)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Entfernt einen Node samt Kanten.
pub fn remove_node(state: &mut AppState, id: u64) -> anyhow::Result<()> {
    use_cases::editing::remove_node(state, id)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Entfernt eine Kante.
pub fn remove_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<()> {
    use_cases::editing::remove_edge(state, from, to)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Legt eine Kante an.
pub fn add_edge(state: &mut AppState, from: u64, to: u64) -> anyhow::Result<()> {
    use_cases::editing::add_edge(state, from, to)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Schaltet ein Node-Attribut um.
pub fn toggle_attribute(
    state: &mut AppState,
    id: u64,
    attribute: NodeAttribute,
) -> anyhow::Result<()> {
    use_cases::editing::toggle_attribute(state, id, attribute)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Setzt die Node-Beschriftung.
pub fn set_node_description(state: &mut AppState, id: u64, text: &str) -> anyhow::Result<()> {
    use_cases::editing::set_node_description(state, id, text)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Setzt die Kanten-Beschriftung.
pub fn set_edge_description(
    state: &mut AppState,
    from: u64,
    to: u64,
    text: &str,
) -> anyhow::Result<()> {
    use_cases::editing::set_edge_description(state, from, to, text)?;
    render_scene::rebuild(state);
    Ok(())
}

/// Setzt die Sitzung zurück.
pub fn reset(state: &mut AppState) {
    use_cases::editing::reset(state);
    render_scene::rebuild(state);
}
