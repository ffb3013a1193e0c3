//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SelectNode { id } => handlers::selection::select_node(state, id)?,
            AppCommand::SelectEdge { from, to } => {
                handlers::selection::select_edge(state, from, to)?
            }

            // === Gesten ===
            AppCommand::BeginDrag { target } => handlers::interaction::begin_drag(state, target),
            AppCommand::BeginDrawEdge { from, pointer } => {
                handlers::interaction::begin_draw_edge(state, from, pointer)
            }
            AppCommand::UpdateDrag { pointer } => {
                handlers::interaction::update_drag(state, pointer)?
            }
            AppCommand::EndDrag { pointer } => handlers::interaction::end_drag(state, pointer)?,

            // === Editing ===
            AppCommand::AddNode => handlers::editing::add_node(state),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state)?,
            AppCommand::RemoveNode { id } => handlers::editing::remove_node(state, id)?,
            AppCommand::RemoveEdge { from, to } => {
                handlers::editing::remove_edge(state, from, to)?
            }
            AppCommand::AddEdge { from, to } => handlers::editing::add_edge(state, from, to)?,
            AppCommand::ToggleNodeAttribute { id, attribute } => {
                handlers::editing::toggle_attribute(state, id, attribute)?
            }
            AppCommand::SetNodeDescription { id, text } => {
                handlers::editing::set_node_description(state, id, &text)?
            }
            AppCommand::SetEdgeDescription { from, to, text } => {
                handlers::editing::set_edge_description(state, from, to, &text)?
            }
            AppCommand::ResetGraph => handlers::editing::reset(state),

            // === View & Export ===
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),
            AppCommand::ExportTikz => handlers::export::export_tikz(state),
        }

        Ok(())
    }
}
