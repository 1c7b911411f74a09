//! Zeichnet die Szene mit dem egui-Painter: Kontroll-Polygon, Kurve,
//! Tangenten-Segmente und Punkt-Marker.
//!
//! Rein deterministisch: gleiche Kontrollpunkte → gleiches Bild. Kein
//! eigener Zustand, keine Fehlerfälle — nicht-finite Koordinaten werden
//! nicht abgefangen und schlagen sichtbar durch.

use crate::app::SceneState;
use crate::core::{cubic_bezier, cubic_bezier_tangent, sample_curve};
use crate::shared::{
    ANCHOR_MARKER_RADIUS, CONTROL_MARKER_RADIUS, CURVE_SAMPLE_STEP, TANGENT_LENGTH,
    TANGENT_SAMPLE_PARAMS,
};
use glam::Vec2;

/// Hintergrund (ersetzt das Löschen der Zeichenfläche).
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
/// Kurvenfarbe.
const PRIMARY: egui::Color32 = egui::Color32::from_rgb(41, 171, 226);
/// Akzentfarbe für Tangenten und freie Steuerpunkte.
const ACCENT: egui::Color32 = egui::Color32::from_rgb(242, 100, 25);
/// Anker-Marker.
const FOREGROUND: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);
/// Halbtransparentes Kontroll-Polygon.
const HELPER: egui::Color32 = egui::Color32::from_rgba_premultiplied(12, 51, 67, 76);

const POLYGON_DASH_LENGTH: f32 = 5.0;
const POLYGON_GAP_LENGTH: f32 = 5.0;

/// Zeichnet die komplette Szene in `rect`.
///
/// Reihenfolge: Hintergrund → gestricheltes Kontroll-Polygon → Kurve →
/// Tangenten-Segmente → Marker. No-op solange die Szene nicht bereit ist.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &SceneState) {
    if !scene.is_ready() {
        return;
    }

    painter.rect_filled(rect, 0.0, BACKGROUND);

    let p0 = scene.anchor_start;
    let p1 = scene.control1.pos;
    let p2 = scene.control2.pos;
    let p3 = scene.anchor_end;

    paint_control_polygon(painter, rect, [p0, p1, p2, p3]);
    paint_curve(painter, rect, p0, p1, p2, p3);
    paint_tangents(painter, rect, p0, p1, p2, p3);

    paint_marker(painter, rect, p0, FOREGROUND, ANCHOR_MARKER_RADIUS);
    paint_marker(painter, rect, p3, FOREGROUND, ANCHOR_MARKER_RADIUS);
    paint_marker(painter, rect, p1, ACCENT, CONTROL_MARKER_RADIUS);
    paint_marker(painter, rect, p2, ACCENT, CONTROL_MARKER_RADIUS);
}

/// Gestricheltes Hilfs-Polygon P0→P1→P2→P3.
fn paint_control_polygon(painter: &egui::Painter, rect: egui::Rect, points: [Vec2; 4]) {
    let screen_points: Vec<egui::Pos2> = points.iter().map(|&p| to_screen(rect, p)).collect();
    painter.extend(egui::Shape::dashed_line(
        &screen_points,
        egui::Stroke::new(1.0, HELPER),
        POLYGON_DASH_LENGTH,
        POLYGON_GAP_LENGTH,
    ));
}

/// Kurve als Polygonzug aus Δt-Abtastung.
fn paint_curve(painter: &egui::Painter, rect: egui::Rect, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) {
    let screen_points: Vec<egui::Pos2> = sample_curve(p0, p1, p2, p3, CURVE_SAMPLE_STEP)
        .into_iter()
        .map(|p| to_screen(rect, p))
        .collect();
    painter.add(egui::Shape::line(
        screen_points,
        egui::Stroke::new(4.0, PRIMARY),
    ));
}

/// Kurze Segmente entlang der Einheits-Tangente an festen Parameterwerten.
fn paint_tangents(
    painter: &egui::Painter,
    rect: egui::Rect,
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
) {
    let stroke = egui::Stroke::new(2.0, ACCENT);
    for &t in &TANGENT_SAMPLE_PARAMS {
        let tangent = cubic_bezier_tangent(p0, p1, p2, p3, t);
        if tangent == Vec2::ZERO {
            // Degenerierte Ableitung: keine definierte Richtung, Segment auslassen
            continue;
        }
        let point = cubic_bezier(p0, p1, p2, p3, t);
        painter.line_segment(
            [
                to_screen(rect, point),
                to_screen(rect, point + tangent * TANGENT_LENGTH),
            ],
            stroke,
        );
    }
}

/// Gefüllter Kreis-Marker an einer Szenen-Position.
fn paint_marker(
    painter: &egui::Painter,
    rect: egui::Rect,
    pos: Vec2,
    color: egui::Color32,
    radius: f32,
) {
    painter.circle_filled(to_screen(rect, pos), radius, color);
}

/// Rechnet eine lokale Szenen-Position in Bildschirmkoordinaten um.
fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}
