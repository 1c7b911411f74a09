//! Geteilte Konstanten für layer-übergreifende Verträge.
//!
//! Alle Werte sind zur Compile-Zeit fixiert — es gibt bewusst keine
//! Laufzeit-Optionen (siehe Projektbeschreibung).

/// Federkonstante der Steuerpunkt-Physik (Anteil des Abstands pro Frame).
pub const SPRING_K: f32 = 0.05;

/// Dämpfungsfaktor: Geschwindigkeit wird pro Frame mit diesem Wert skaliert.
/// Stabil (keine sichtbare Oszillation) für 0 < DAMPING < 1 bei kleinem SPRING_K.
pub const DAMPING: f32 = 0.8;

/// Schrittweite Δt beim Abtasten der Kurve fürs Zeichnen.
pub const CURVE_SAMPLE_STEP: f32 = 0.01;

/// Parameterwerte, an denen Tangenten-Segmente gezeichnet werden.
pub const TANGENT_SAMPLE_PARAMS: [f32; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];

/// Bildschirmlänge eines Tangenten-Segments in Punkten.
pub const TANGENT_LENGTH: f32 = 40.0;

/// Horizontaler Anker-Einzug als Anteil der Viewport-Breite.
pub const ANCHOR_INSET_FRACTION: f32 = 0.1;

/// Horizontale Interpolation (Sehnen-Anteil) der Start-Steuerpunkte.
pub const CONTROL_LERP_P1: f32 = 0.25;
pub const CONTROL_LERP_P2: f32 = 0.75;

/// Vertikaler Start-Versatz der Steuerpunkte (P1 nach oben, P2 nach unten).
pub const CONTROL_VERTICAL_OFFSET: f32 = 100.0;

/// Marker-Radien (Anker neutral, Steuerpunkte akzentuiert).
pub const ANCHOR_MARKER_RADIUS: f32 = 8.0;
pub const CONTROL_MARKER_RADIUS: f32 = 10.0;
