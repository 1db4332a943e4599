//! Zentrale Konfiguration für das Bezier Road Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Strasse ─────────────────────────────────────────────────────────

/// Standard-Breite des Strassenbands in Welteinheiten.
pub const ROAD_WIDTH: f32 = 2.0;
/// Standard-Segmentzahl entlang der Kurve.
pub const ROAD_SEGMENTS: u32 = 100;
/// Minimale Segmentzahl (UI-Untergrenze).
pub const ROAD_SEGMENTS_MIN: u32 = 1;
/// Maximale Segmentzahl (UI-Obergrenze).
pub const ROAD_SEGMENTS_MAX: u32 = 1000;

// ── Handles ─────────────────────────────────────────────────────────

/// Marker-Radius der Kontrollpunkt-Handles in Welteinheiten.
pub const HANDLE_RADIUS_WORLD: f32 = 0.5;
/// Größenfaktor für den Handle unter dem Cursor.
pub const HANDLE_HOVER_SIZE_FACTOR: f32 = 1.4;
/// Farbe der Kontrollpunkt-Handles (RGBA: Rot).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe des aktuell gezogenen Handles (RGBA: Gelb).
pub const HANDLE_COLOR_ACTIVE: [f32; 4] = [1.0, 0.9, 0.1, 1.0];

// ── Linien-Overlays ─────────────────────────────────────────────────

/// Farbe der Mittellinie (RGBA: Rot).
pub const CENTERLINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der Handle-Linien p0→Steuerpunkt→p2 (RGBA: Grün).
pub const HANDLE_LINE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Orbit-Empfindlichkeit (Radiant pro Pixel Maus-Delta).
pub const CAMERA_ORBIT_SENSITIVITY: f32 = 0.008;
/// Dolly-Faktor pro Scroll-Raste.
pub const CAMERA_DOLLY_STEP: f32 = 1.1;

// ── Animation ───────────────────────────────────────────────────────

/// Auslenkung der Steuerpunkt-Oszillation.
pub const ANIMATION_AMPLITUDE: f32 = 7.0;
/// Frequenz der Oszillation.
pub const ANIMATION_FREQUENCY: f32 = 1.0;
/// Verfolgungs-Anteil pro Tick.
pub const ANIMATION_LERP_FACTOR: f32 = 0.1;
/// Skalierung der Wanduhr-Sekunden auf Animationszeit.
pub const ANIMATION_TIME_SCALE: f64 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_road_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Strasse ─────────────────────────────────────────────────
    /// Breite des Strassenbands in Welteinheiten
    pub road_width: f32,
    /// Segmentzahl entlang der Kurve
    pub road_segments: u32,

    // ── Handles ─────────────────────────────────────────────────
    /// Marker-Radius der Kontrollpunkt-Handles
    pub handle_radius_world: f32,
    /// Größenfaktor für den Handle unter dem Cursor
    #[serde(default = "default_handle_hover_size_factor")]
    pub handle_hover_size_factor: f32,
    /// Farbe der Kontrollpunkt-Handles
    pub handle_color: [f32; 4],
    /// Farbe des aktuell gezogenen Handles
    pub handle_color_active: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    /// Farbe der Mittellinie
    pub centerline_color: [f32; 4],
    /// Farbe der Handle-Linien
    pub handle_line_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Orbit-Empfindlichkeit (Radiant pro Pixel)
    pub camera_orbit_sensitivity: f32,
    /// Dolly-Faktor pro Scroll-Raste
    pub camera_dolly_step: f32,

    // ── Animation ───────────────────────────────────────────────
    /// Auslenkung der Steuerpunkt-Oszillation
    pub animation_amplitude: f32,
    /// Frequenz der Oszillation
    pub animation_frequency: f32,
    /// Verfolgungs-Anteil pro Tick
    pub animation_lerp_factor: f32,
    /// Skalierung der Wanduhr-Sekunden auf Animationszeit
    #[serde(default = "default_animation_time_scale")]
    pub animation_time_scale: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            road_segments: ROAD_SEGMENTS,

            handle_radius_world: HANDLE_RADIUS_WORLD,
            handle_hover_size_factor: HANDLE_HOVER_SIZE_FACTOR,
            handle_color: HANDLE_COLOR,
            handle_color_active: HANDLE_COLOR_ACTIVE,

            centerline_color: CENTERLINE_COLOR,
            handle_line_color: HANDLE_LINE_COLOR,

            camera_orbit_sensitivity: CAMERA_ORBIT_SENSITIVITY,
            camera_dolly_step: CAMERA_DOLLY_STEP,

            animation_amplitude: ANIMATION_AMPLITUDE,
            animation_frequency: ANIMATION_FREQUENCY,
            animation_lerp_factor: ANIMATION_LERP_FACTOR,
            animation_time_scale: ANIMATION_TIME_SCALE,
        }
    }
}

/// Serde-Default für `handle_hover_size_factor` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_handle_hover_size_factor() -> f32 {
    HANDLE_HOVER_SIZE_FACTOR
}

/// Serde-Default für `animation_time_scale` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_animation_time_scale() -> f64 {
    ANIMATION_TIME_SCALE
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

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_road_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_road_studio.toml")
    }

    /// Segmentzahl als `usize`, auf den gültigen Bereich geklemmt.
    pub fn segments(&self) -> usize {
        self.road_segments
            .clamp(ROAD_SEGMENTS_MIN, ROAD_SEGMENTS_MAX) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.road_width, ROAD_WIDTH);
        assert_eq!(opts.road_segments, ROAD_SEGMENTS);
        assert_eq!(opts.handle_color, HANDLE_COLOR);
        assert_eq!(opts.centerline_color, CENTERLINE_COLOR);
        assert_eq!(opts.animation_time_scale, ANIMATION_TIME_SCALE);
    }

    #[test]
    fn test_missing_time_scale_field_uses_default() {
        // TOML aus einer älteren Version ohne das Zeitskala-Feld
        let opts = EditorOptions::default();
        let mut toml = toml::to_string_pretty(&opts).expect("Serialisierung fehlgeschlagen");
        toml = toml
            .lines()
            .filter(|line| !line.starts_with("animation_time_scale"))
            .collect::<Vec<_>>()
            .join("\n");

        let back: EditorOptions = toml::from_str(&toml).expect("Deserialisierung fehlgeschlagen");
        assert_eq!(back.animation_time_scale, ANIMATION_TIME_SCALE);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = EditorOptions::default();
        let toml = toml::to_string_pretty(&opts).expect("Serialisierung fehlgeschlagen");
        let back: EditorOptions = toml::from_str(&toml).expect("Deserialisierung fehlgeschlagen");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_segments_clamped_to_valid_range() {
        let mut opts = EditorOptions::default();
        opts.road_segments = 0;
        assert_eq!(opts.segments(), ROAD_SEGMENTS_MIN as usize);
        opts.road_segments = 1_000_000;
        assert_eq!(opts.segments(), ROAD_SEGMENTS_MAX as usize);
    }
}
