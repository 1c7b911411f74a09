//! Kinetic Curve.
//!
//! Interaktive kubische Bézier-Kurve: zwei freie Steuerpunkte folgen dem
//! Zeiger über ein Feder-Dämpfer-Modell, neu gezeichnet mit jeder
//! Display-Wiederholrate.

use eframe::egui;
use kinetic_curve::{render, ui, AppController, AppIntent, SceneState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Kinetic Curve v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 540.0])
                .with_title("Kinetic Curve"),
            ..Default::default()
        };

        eframe::run_native(
            "Kinetic Curve",
            options,
            Box::new(|_cc| Ok(Box::new(KineticApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct KineticApp {
    state: SceneState,
    controller: AppController,
    input: ui::InputState,
}

impl KineticApp {
    fn new() -> Self {
        Self {
            state: SceneState::new(),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for KineticApp {
    /// Ein Frame-Zyklus: Intents einsammeln → anwenden → Physik-Schritt →
    /// zeichnen → nächstes Frame anfordern.
    ///
    /// eframe ruft `update` nie reentrant auf; Intents mutieren nur kleine
    /// Werte-Typen, bevor Physik und Zeichnen laufen.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

                let viewport_size = glam::Vec2::new(rect.width(), rect.height());
                let events = self
                    .input
                    .collect_viewport_events(ui, &response, viewport_size);
                self.process_events(events);

                self.state.tick();

                render::paint_scene(ui.painter(), rect, &self.state);
            });

        // Daueranimation: jedes Frame neu zeichnen
        ctx.request_repaint();
    }
}

impl KineticApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
