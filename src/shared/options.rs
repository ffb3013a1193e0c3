//! Zentrale Konfiguration des Automaten-Editors.
//!
//! `EditorOptions` ist das read-only Einstellungsobjekt für Geometrie, Interaktion und Export.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::GraphDefaults;

// ── Canvas ──────────────────────────────────────────────────────────

/// Kantenlänge des normierten Canvas (Koordinaten in `[0, CANVAS_SIZE]`).
pub const CANVAS_SIZE: f32 = 100.0;
/// Rasterweite für Snapping und Gitter-Overlay.
pub const GRID_SIZE: f32 = 4.0;

// ── Nodes ───────────────────────────────────────────────────────────

/// Node-Radius in Canvas-Einheiten.
pub const NODE_RADIUS: f32 = 4.0;
/// Abstand des inneren Kreises bei Endzuständen.
pub const ACCEPTING_INSET: f32 = 0.3;
/// Position neuer Nodes.
pub const DEFAULT_NODE_POSITION: Vec2 = crate::core::graph::DEFAULT_NODE_POSITION;
/// Start-Pfeil-Richtung beim Aktivieren des Start-Attributs.
pub const DEFAULT_START_ANGLE: f32 = crate::core::graph::DEFAULT_START_ANGLE;

// ── Text ────────────────────────────────────────────────────────────

/// Schriftgröße von Labels.
pub const TEXT_SIZE: f32 = 2.5;
/// Schriftgröße von Index und Exponent.
pub const SUB_TEXT_SIZE: f32 = 1.5;
/// Zusätzlicher Zeilenabstand mehrzeiliger Labels.
pub const LINE_GAP: f32 = 0.5;
/// Standard-Labelverschiebung neuer Kanten.
pub const DEFAULT_TEXT_OFFSET: f32 = crate::core::graph::DEFAULT_TEXT_OFFSET;

// ── Kanten ──────────────────────────────────────────────────────────

/// Basisabstand des Self-Loop-Labels vom Node-Mittelpunkt.
pub const SELF_EDGE_TEXT_DISTANCE: f32 = 13.0;
/// Länge des Start-Pfeils außerhalb des Node-Kreises.
pub const START_EDGE_DISTANCE: f32 = 7.0;
/// Halbachsen der Self-Loop-Ellipse (quer, längs).
pub const LOOP_RADII: Vec2 = Vec2::new(2.0, 4.0);
/// Wie weit die Self-Loop-Ellipse in den Node-Kreis hineinragt.
pub const LOOP_INSET: f32 = 1.0;

// ── Drag ────────────────────────────────────────────────────────────

/// Krümmungen unterhalb dieser Schwelle werden zu einer geraden Kante.
pub const STRAIGHT_EDGE_THRESHOLD: f32 = 2.0;
/// Winkelraster für Self-Loops und Start-Pfeile (Grad).
pub const ANGLE_SNAP_STEP: f32 = 15.0;
/// Raster für Labelverschiebungen.
pub const TEXT_SNAP_STEP: f32 = 1.0;
/// Maximaler Betrag der Labelverschiebung beim Ziehen eines Labels.
pub const TEXT_OFFSET_LIMIT: f32 = 3.0;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Toleranz für Treffer auf Pfaden und Labels.
pub const HIT_TOLERANCE: f32 = 0.5;
/// Anzahl Liniensegmente beim Abtasten von Kurven und Loops.
pub const CURVE_SEGMENTS: usize = 24;

// ── Export ──────────────────────────────────────────────────────────

/// Divisor Canvas-Einheiten → cm (horizontal).
pub const EXPORT_HORIZONTAL_DIVISOR: f32 = 10.0;
/// Divisor Canvas-Einheiten → cm (vertikal).
pub const EXPORT_VERTICAL_DIVISOR: f32 = 10.0;
/// Korrektur des vertikalen Abstands (Node-Höhe im Satz).
pub const EXPORT_VERTICAL_CORRECTION: f32 = 0.6;
/// Faktor Krümmung → `bend`-Winkel.
pub const EXPORT_BEND_FACTOR: f32 = 3.0;
/// Halber Öffnungswinkel von Self-Loops (`out`/`in`).
pub const EXPORT_LOOP_SPREAD: f32 = 15.0;
/// Verhältnis, ab dem eine Achse der Kantenrichtung als dominant gilt.
pub const EXPORT_DOMINANCE_RATIO: f32 = 5.0;
/// Mindestgröße der Zustände im Satz.
pub const EXPORT_STATE_MINIMUM_SIZE: &str = "0.4cm";

// ── Export-Optionen ────────────────────────────────────────────────

/// Parameter der TikZ-Transformation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportOptions {
    /// Divisor für horizontale Abstände
    pub horizontal_divisor: f32,
    /// Divisor für vertikale Abstände
    pub vertical_divisor: f32,
    /// Abzug vom vertikalen Abstand (nie unter 0)
    pub vertical_correction: f32,
    /// Faktor Krümmung → `bend left/right`
    pub bend_factor: f32,
    /// Halber Öffnungswinkel von Self-Loops
    pub loop_spread: f32,
    /// Dominanz-Verhältnis für die Label-Anker-Wahl
    pub dominance_ratio: f32,
    /// `minimum size` der Zustände
    pub state_minimum_size: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            horizontal_divisor: EXPORT_HORIZONTAL_DIVISOR,
            vertical_divisor: EXPORT_VERTICAL_DIVISOR,
            vertical_correction: EXPORT_VERTICAL_CORRECTION,
            bend_factor: EXPORT_BEND_FACTOR,
            loop_spread: EXPORT_LOOP_SPREAD,
            dominance_ratio: EXPORT_DOMINANCE_RATIO,
            state_minimum_size: EXPORT_STATE_MINIMUM_SIZE.to_string(),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Editor-Optionen.
/// Wird als `automaton_editor.toml` neben der Binary gespeichert; fehlende Schlüssel
/// fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Kantenlänge des Canvas
    pub canvas_size: f32,
    /// Rasterweite
    pub grid_size: f32,
    /// Raster beim Start eingeschaltet
    pub grid_enabled: bool,

    // ── Nodes ───────────────────────────────────────────────────
    /// Node-Radius
    pub node_radius: f32,
    /// Abstand des inneren Kreises bei Endzuständen
    pub accepting_inset: f32,
    /// Position neuer Nodes
    pub default_node_position: Vec2,
    /// Start-Pfeil-Richtung beim Aktivieren von Start
    pub default_start_angle: f32,

    // ── Text ────────────────────────────────────────────────────
    /// Schriftgröße
    pub text_size: f32,
    /// Schriftgröße für Index/Exponent
    pub sub_text_size: f32,
    /// Zusätzlicher Zeilenabstand
    pub line_gap: f32,
    /// Labelverschiebung neuer Kanten
    pub default_text_offset: f32,

    // ── Kanten ──────────────────────────────────────────────────
    /// Basisabstand des Self-Loop-Labels
    pub self_edge_text_distance: f32,
    /// Länge des Start-Pfeils außerhalb des Kreises
    pub start_edge_distance: f32,
    /// Halbachsen der Self-Loop-Ellipse
    pub loop_radii: Vec2,
    /// Überlappung der Self-Loop-Ellipse mit dem Node-Kreis
    pub loop_inset: f32,

    // ── Drag ────────────────────────────────────────────────────
    /// Schwelle, unter der Kanten gerade werden
    pub straight_edge_threshold: f32,
    /// Winkelraster (Grad)
    pub angle_snap_step: f32,
    /// Raster für Labelverschiebungen
    pub text_snap_step: f32,
    /// Band `±limit`, in dem gezogene Labels bleiben
    pub text_offset_limit: f32,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Treffertoleranz für Pfade und Labels
    pub hit_tolerance: f32,
    /// Abtastung von Kurven
    pub curve_segments: usize,

    // ── Export ──────────────────────────────────────────────────
    /// TikZ-Parameter
    pub export: ExportOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            grid_size: GRID_SIZE,
            grid_enabled: false,

            node_radius: NODE_RADIUS,
            accepting_inset: ACCEPTING_INSET,
            default_node_position: DEFAULT_NODE_POSITION,
            default_start_angle: DEFAULT_START_ANGLE,

            text_size: TEXT_SIZE,
            sub_text_size: SUB_TEXT_SIZE,
            line_gap: LINE_GAP,
            default_text_offset: DEFAULT_TEXT_OFFSET,

            self_edge_text_distance: SELF_EDGE_TEXT_DISTANCE,
            start_edge_distance: START_EDGE_DISTANCE,
            loop_radii: LOOP_RADII,
            loop_inset: LOOP_INSET,

            straight_edge_threshold: STRAIGHT_EDGE_THRESHOLD,
            angle_snap_step: ANGLE_SNAP_STEP,
            text_snap_step: TEXT_SNAP_STEP,
            text_offset_limit: TEXT_OFFSET_LIMIT,

            hit_tolerance: HIT_TOLERANCE,
            curve_segments: CURVE_SEGMENTS,

            export: ExportOptions::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("automaton-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("automaton_editor.toml")
    }

    /// Startwerte für neue Graph-Elemente.
    pub fn graph_defaults(&self) -> GraphDefaults {
        GraphDefaults {
            node_position: self.default_node_position,
            text_offset: self.default_text_offset,
            start_angle: self.default_start_angle,
        }
    }

    /// Zeilenabstand mehrzeiliger Labels.
    pub fn line_spacing(&self) -> f32 {
        self.text_size + self.line_gap
    }

    /// Mindestabstand zwischen zwei Node-Mittelpunkten.
    pub fn min_node_distance(&self) -> f32 {
        2.0 * self.node_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str(
            r#"
            node_radius = 5.0
            grid_enabled = true

            [export]
            bend_factor = 2.0
            "#,
        )
        .expect("TOML erwartet");

        assert_eq!(opts.node_radius, 5.0);
        assert!(opts.grid_enabled);
        assert_eq!(opts.grid_size, GRID_SIZE);
        assert_eq!(opts.export.bend_factor, 2.0);
        assert_eq!(opts.export.horizontal_divisor, EXPORT_HORIZONTAL_DIVISOR);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.default_node_position = Vec2::new(20.0, 30.0);
        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let back: EditorOptions = toml::from_str(&text).expect("TOML erwartet");
        assert_eq!(back, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/automaton_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
