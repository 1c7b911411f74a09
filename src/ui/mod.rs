//! UI-Layer: Input-Handling (egui → AppIntent).

pub mod input;

pub use input::InputState;
