//! Feder-Dämpfer-Physik für die beiden freien Steuerpunkte.

use glam::Vec2;

/// Punkt mit Geschwindigkeit — wird pro Frame in-place integriert.
///
/// `vel` ist reiner Integrator-Zustand und hat außerhalb von [`advance`]
/// keine Bedeutung.
///
/// [`advance`]: DynamicPoint::advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicPoint {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl DynamicPoint {
    /// Erstellt einen ruhenden Punkt an `pos`.
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Ein diskreter, semi-impliziter Feder-Dämpfer-Schritt Richtung `target`.
    ///
    /// 1. `accel = (target - pos) * spring_k`
    /// 2. `vel += accel`
    /// 3. `vel *= damping` (Reibungsterm nach der Kraft-Integration)
    /// 4. `pos += vel`
    ///
    /// Konvergiert ohne anhaltende Oszillation für `0 < damping < 1` und
    /// kleines `spring_k`.
    pub fn advance(&mut self, target: Vec2, spring_k: f32, damping: f32) {
        let accel = (target - self.pos) * spring_k;
        self.vel += accel;
        self.vel *= damping;
        self.pos += self.vel;
    }
}

/// Spiegelt `point` durch `center`: `2·center − point`.
///
/// Das Ziel des zweiten Steuerpunkts ist die am Viewport-Zentrum gespiegelte
/// Zeigerposition — beide Handles bewegen sich gegenläufig (bewusste
/// Gestaltungsentscheidung, keine Näherung).
pub fn mirror_through(center: Vec2, point: Vec2) -> Vec2 {
    center + (center - point)
}
