//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppIntent, SceneState};

/// Orchestriert UI-Events auf den SceneState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent durch Mutation des SceneState.
    ///
    /// Intent-Handler schreiben ausschließlich kleine Werte-Typen; Physik
    /// und Zeichnen passieren getrennt davon im Frame-Ablauf.
    pub fn handle_intent(&mut self, state: &mut SceneState, intent: AppIntent) -> anyhow::Result<()> {
        match intent {
            AppIntent::ViewportResized { size } => state.set_viewport_size(size),
            AppIntent::PointerMoved { pos } => state.pointer_moved(pos),
            AppIntent::ExitRequested => {
                log::info!("Beenden angefordert");
                state.should_exit = true;
            }
        }

        Ok(())
    }
}
