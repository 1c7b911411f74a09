//! Geometrie-Berechnungen für die kubische Bézier-Kurve (Punkt, Tangente, Abtastung).

use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// `t` wird nicht geklemmt; Werte außerhalb [0,1] extrapolieren die Kurve.
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Normierte Tangente B'(t) / |B'(t)|.
///
/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
///
/// Bei degenerierter Ableitung (Länge 0, z.B. alle Punkte identisch) wird
/// `Vec2::ZERO` zurückgegeben — Aufrufer müssen das als "keine definierte
/// Richtung" behandeln und abhängige Zeichnungen überspringen.
pub fn cubic_bezier_tangent(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let d = 3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2);
    let length = d.length();
    if length > 0.0 {
        d / length
    } else {
        Vec2::ZERO
    }
}

/// Tastet die Kurve von t=0 bis t=1 inklusive mit fester Schrittweite ab.
///
/// Liefert die Stützpunkte des Polygonzugs, mit dem die Kurve gezeichnet
/// wird. Die Genauigkeit ist durch `step` begrenzt (akzeptierte Näherung).
pub fn sample_curve(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, step: f32) -> Vec<Vec2> {
    let count = (1.0 / step).round() as usize;
    let mut points = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let t = i as f32 / count as f32;
        points.push(cubic_bezier(p0, p1, p2, p3, t));
    }
    points
}
