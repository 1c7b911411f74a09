//! Kinetic Curve Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppController, AppIntent, SceneState};
pub use core::{cubic_bezier, cubic_bezier_tangent, mirror_through, sample_curve, DynamicPoint};
