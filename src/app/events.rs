//! App-Intent Events.
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert (wird jedes Frame gemeldet)
    ViewportResized { size: Vec2 },
    /// Zeiger wurde bewegt (Position in lokalen Viewport-Koordinaten)
    PointerMoved { pos: Vec2 },
    /// Anwendung beenden
    ExitRequested,
}
