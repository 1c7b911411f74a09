//! Szenen-Zustand: vier Kontrollpunkte, Zeigerposition, Viewport-Größe.
//!
//! Alle Mutation läuft über den Frame-Ablauf bzw. die Intent-Handler —
//! genau ein logischer Thread, keine Synchronisation nötig.

use crate::core::{mirror_through, DynamicPoint};
use crate::shared::{
    ANCHOR_INSET_FRACTION, CONTROL_LERP_P1, CONTROL_LERP_P2, CONTROL_VERTICAL_OFFSET, DAMPING,
    SPRING_K,
};
use glam::Vec2;

/// Hauptzustand der Anwendung.
pub struct SceneState {
    /// Fester Start-Anker (nur bei Initialisierung/Resize neu berechnet)
    pub anchor_start: Vec2,
    /// Fester End-Anker
    pub anchor_end: Vec2,
    /// Erster freier Steuerpunkt — folgt dem Zeiger
    pub control1: DynamicPoint,
    /// Zweiter freier Steuerpunkt — folgt dem gespiegelten Zeiger
    pub control2: DynamicPoint,
    /// Letzte bekannte Zeigerposition (lokale Viewport-Koordinaten)
    pub pointer: Vec2,
    /// Aktuelle Viewport-Größe in Punkten
    pub viewport_size: Vec2,
    /// True sobald der Viewport eine nutzbare Größe gemeldet hat
    initialized: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl SceneState {
    /// Erstellt einen leeren, noch nicht initialisierten Szenen-Zustand.
    pub fn new() -> Self {
        Self {
            anchor_start: Vec2::ZERO,
            anchor_end: Vec2::ZERO,
            control1: DynamicPoint::at_rest(Vec2::ZERO),
            control2: DynamicPoint::at_rest(Vec2::ZERO),
            pointer: Vec2::ZERO,
            viewport_size: Vec2::ZERO,
            initialized: false,
            should_exit: false,
        }
    }

    /// True sobald initialisiert — vorher werden Physik und Zeichnen
    /// übersprungen (Viewport noch nicht gemountet, erwarteter Zustand).
    pub fn is_ready(&self) -> bool {
        self.initialized
    }

    /// Viewport-Zentrum (Spiegelzentrum für das Ziel von `control2`).
    pub fn center(&self) -> Vec2 {
        self.viewport_size * 0.5
    }

    /// Meldet die aktuelle Viewport-Größe.
    ///
    /// Erste nutzbare Größe initialisiert die Szene vollständig; spätere
    /// Änderungen leiten Anker und Zeiger-Zentrum neu ab, lassen die freien
    /// Steuerpunkte (Position UND Geschwindigkeit) aber unangetastet, damit
    /// die Bewegung nahtlos weiterläuft.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        if self.initialized && size == self.viewport_size {
            return;
        }
        if self.initialized {
            self.resize(size);
        } else {
            self.initialize(size);
        }
    }

    /// Leitet den kompletten Startzustand aus der Viewport-Größe ab.
    ///
    /// Anker bei 10% Breiten-Einzug, vertikal zentriert; Steuerpunkte bei
    /// 25%/75% Sehnen-Interpolation mit ±100 Punkten vertikalem Versatz;
    /// Zeiger im Zentrum.
    fn initialize(&mut self, size: Vec2) {
        self.viewport_size = size;
        self.derive_anchors_and_pointer();

        let mid_y = size.y / 2.0;
        let chord_p1 = self.anchor_start.lerp(self.anchor_end, CONTROL_LERP_P1);
        let chord_p2 = self.anchor_start.lerp(self.anchor_end, CONTROL_LERP_P2);
        self.control1 =
            DynamicPoint::at_rest(Vec2::new(chord_p1.x, mid_y - CONTROL_VERTICAL_OFFSET));
        self.control2 =
            DynamicPoint::at_rest(Vec2::new(chord_p2.x, mid_y + CONTROL_VERTICAL_OFFSET));

        self.initialized = true;
        log::info!(
            "Szene initialisiert: {}x{} Punkte",
            size.x.round(),
            size.y.round()
        );
    }

    /// Leitet Anker und Zeiger-Zentrum neu ab (Steuerpunkte bleiben).
    fn resize(&mut self, size: Vec2) {
        self.viewport_size = size;
        self.derive_anchors_and_pointer();
    }

    fn derive_anchors_and_pointer(&mut self) {
        let size = self.viewport_size;
        let inset = size.x * ANCHOR_INSET_FRACTION;
        self.anchor_start = Vec2::new(inset, size.y / 2.0);
        self.anchor_end = Vec2::new(size.x - inset, size.y / 2.0);
        self.pointer = self.center();
    }

    /// Überschreibt die Zeigerposition (last-write-wins, wirkt ab dem
    /// nächsten Physik-Schritt).
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Ein Physik-Schritt: `control1` Richtung Zeiger, `control2` Richtung
    /// am Zentrum gespiegeltem Zeiger. No-op solange die Szene nicht bereit
    /// ist (Frame wird komplett übersprungen).
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }
        self.control1.advance(self.pointer, SPRING_K, DAMPING);
        let mirrored = mirror_through(self.center(), self.pointer);
        self.control2.advance(mirrored, SPRING_K, DAMPING);
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
