//! Viewport-Input-Handling: Zeiger- und Resize-Events → AppIntent.
//!
//! Handler lesen nur egui-Input und erzeugen Intents — keine Physik, kein
//! Zeichnen. Die Intents werden vom Frame-Prozessor zu Frame-Beginn
//! angewendet (last-write-wins genügt, ein logischer Thread).

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Viewport.
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Zeigerposition (vermeidet redundante Intents)
    last_pointer: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `ViewportResized` wird jedes Frame gemeldet (der State entscheidet,
    /// ob sich etwas geändert hat). Die Zeigerposition wird fensterweit
    /// verfolgt und in lokale Viewport-Koordinaten übersetzt.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: Vec2,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        if let Some(pointer_pos) = ui.input(|i| i.pointer.latest_pos()) {
            let local = pointer_pos - response.rect.min;
            let pos = Vec2::new(local.x, local.y);
            if self.last_pointer != Some(pos) {
                self.last_pointer = Some(pos);
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        events
    }
}
