//! Application-Layer: Controller, State und Events.

pub mod controller;
pub mod events;
/// Szenen-Zustand und Frame-Lebenszyklus
pub mod state;

pub use controller::AppController;
pub use events::AppIntent;
pub use state::SceneState;
