use super::curve::{cubic_bezier, cubic_bezier_tangent, sample_curve};
use super::spring::{mirror_through, DynamicPoint};
use crate::shared::{DAMPING, SPRING_K};
use approx::assert_relative_eq;
use glam::Vec2;

// ── Kurven-Auswertung ──

#[test]
fn test_cubic_bezier_endpoints_exact() {
    let p0 = Vec2::new(-3.0, 7.5);
    let p1 = Vec2::new(120.0, -40.0);
    let p2 = Vec2::new(300.0, 260.0);
    let p3 = Vec2::new(512.0, 1.25);

    // t=0 und t=1 müssen exakt die Anker liefern (keine Toleranz)
    assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
    assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
}

#[test]
fn test_cubic_bezier_degenerate_single_point() {
    let p = Vec2::new(42.0, -17.0);

    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let b = cubic_bezier(p, p, p, p, t);
        // Basis-Polynome summieren zu 1 → exakt der Punkt selbst
        assert!((b - p).length() < 1e-4, "t={t}: B(t)={b:?}");
    }
}

#[test]
fn test_cubic_bezier_symmetric_midpoint() {
    // Symmetrische S-Kurve → B(0.5) = (5, 5)
    let p0 = Vec2::new(0.0, 0.0);
    let p1 = Vec2::new(0.0, 10.0);
    let p2 = Vec2::new(10.0, 0.0);
    let p3 = Vec2::new(10.0, 10.0);

    let mid = cubic_bezier(p0, p1, p2, p3, 0.5);
    assert!((mid - Vec2::new(5.0, 5.0)).length() < 0.001);
}

#[test]
fn test_sample_curve_inclusive_range() {
    let p0 = Vec2::ZERO;
    let p1 = Vec2::new(3.0, 10.0);
    let p2 = Vec2::new(7.0, 10.0);
    let p3 = Vec2::new(10.0, 0.0);

    let points = sample_curve(p0, p1, p2, p3, 0.01);
    assert_eq!(points.len(), 101);
    assert_eq!(points[0], p0);
    assert_eq!(*points.last().unwrap(), p3);
}

// ── Tangenten ──

#[test]
fn test_tangent_unit_length() {
    let p0 = Vec2::new(0.0, 0.0);
    let p1 = Vec2::new(30.0, 100.0);
    let p2 = Vec2::new(70.0, -100.0);
    let p3 = Vec2::new(100.0, 0.0);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let tangent = cubic_bezier_tangent(p0, p1, p2, p3, t);
        assert_relative_eq!(tangent.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_tangent_degenerate_returns_zero() {
    let p = Vec2::new(9.0, 9.0);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_eq!(cubic_bezier_tangent(p, p, p, p, t), Vec2::ZERO);
    }
}

#[test]
fn test_tangent_straight_line_direction() {
    // Kollineare Punkte → Tangente zeigt überall entlang der Geraden
    let p0 = Vec2::ZERO;
    let p1 = Vec2::new(2.0, 0.0);
    let p2 = Vec2::new(6.0, 0.0);
    let p3 = Vec2::new(10.0, 0.0);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let tangent = cubic_bezier_tangent(p0, p1, p2, p3, t);
        assert!((tangent - Vec2::new(1.0, 0.0)).length() < 1e-5, "t={t}");
    }
}

// ── Feder-Dämpfer-Schritt ──

#[test]
fn test_advance_single_step_from_rest() {
    let start = Vec2::new(200.0, 100.0);
    let target = Vec2::new(0.0, 0.0);
    let mut point = DynamicPoint::at_rest(start);

    point.advance(target, SPRING_K, DAMPING);

    // vel = ((target - start) * 0.05) * 0.8, pos = start + vel
    let expected_vel = (target - start) * SPRING_K * DAMPING;
    assert_relative_eq!(point.vel.x, expected_vel.x, epsilon = 1e-5);
    assert_relative_eq!(point.vel.y, expected_vel.y, epsilon = 1e-5);
    assert_relative_eq!(point.pos.x, (start + expected_vel).x, epsilon = 1e-4);
    assert_relative_eq!(point.pos.y, (start + expected_vel).y, epsilon = 1e-4);
}

#[test]
fn test_advance_converges_without_divergence() {
    let target = Vec2::new(400.0, 225.0);
    let start = Vec2::new(-350.0, 900.0);
    let mut point = DynamicPoint::at_rest(start);
    let initial_distance = start.distance(target);

    // Fenster länger als eine Spiral-Umdrehung der gedämpften Schwingung,
    // damit das Fenster-Maximum die Hüllkurve abbildet
    const WINDOW: usize = 40;
    let mut window_maxima = Vec::new();
    let mut current_max = 0.0f32;
    let mut final_distance = 0.0f32;

    for step in 1..=1000 {
        point.advance(target, SPRING_K, DAMPING);
        let distance = point.pos.distance(target);
        // Nie divergieren: Abstand bleibt beschränkt
        assert!(
            distance < initial_distance * 2.0,
            "Schritt {step}: Abstand {distance} außerhalb der Schranke"
        );
        current_max = current_max.max(distance);
        if step % WINDOW == 0 && window_maxima.len() < 5 {
            window_maxima.push(current_max);
            current_max = 0.0;
        }
        final_distance = distance;
    }

    // Hüllkurve fällt streng von Fenster zu Fenster
    for pair in window_maxima.windows(2) {
        assert!(pair[1] < pair[0], "Hüllkurve nicht fallend: {pair:?}");
    }
    assert!(final_distance < 0.01);
}

#[test]
fn test_advance_at_target_stays_at_rest() {
    let target = Vec2::new(50.0, 50.0);
    let mut point = DynamicPoint::at_rest(target);

    for _ in 0..100 {
        point.advance(target, SPRING_K, DAMPING);
    }

    assert!(point.pos.distance(target) < 1e-4);
    assert!(point.vel.length() < 1e-4);
}

// ── Spiegelung ──

#[test]
fn test_mirror_through_formula() {
    let center = Vec2::new(400.0, 225.0);
    let point = Vec2::new(100.0, 50.0);

    let mirrored = mirror_through(center, point);
    assert_eq!(mirrored, 2.0 * center - point);
    // Spiegelung des Zentrums ist das Zentrum selbst
    assert_eq!(mirror_through(center, center), center);
}

#[test]
fn test_mirrored_advance_preserves_symmetry() {
    let center = Vec2::new(400.0, 225.0);
    let offset = Vec2::new(120.0, -60.0);
    let target = Vec2::new(700.0, 30.0);

    // Beide Punkte starten symmetrisch zum Zentrum
    let mut p1 = DynamicPoint::at_rest(center + offset);
    let mut p2 = DynamicPoint::at_rest(center - offset);

    for step in 0..200 {
        p1.advance(target, SPRING_K, DAMPING);
        p2.advance(mirror_through(center, target), SPRING_K, DAMPING);

        let midpoint = (p1.pos + p2.pos) * 0.5;
        assert!(
            midpoint.distance(center) < 0.01,
            "Schritt {step}: Symmetrie verletzt, Mittelpunkt {midpoint:?}"
        );
    }
}
