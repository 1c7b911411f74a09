//! Domänen-Kern: Bézier-Geometrie und Feder-Dämpfer-Physik.
//!
//! Beide Module sind zustandslos bzw. reine Werte-Typen ohne I/O —
//! sie kennen weder egui noch den Frame-Ablauf.

pub mod curve;
pub mod spring;

pub use curve::{cubic_bezier, cubic_bezier_tangent, sample_curve};
pub use spring::{mirror_through, DynamicPoint};

#[cfg(test)]
mod tests;
