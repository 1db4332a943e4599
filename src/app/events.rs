//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::ControlPointId;
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Primäre Maustaste im Viewport gedrückt (NDC-Cursorposition)
    PointerPressed { ndc: Vec2 },
    /// Cursor bei gedrückter primärer Maustaste bewegt
    PointerDragged { ndc: Vec2, delta: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Cursor ohne Taste über dem Viewport bewegt
    PointerHovered { ndc: Vec2 },

    /// Kamera orbitieren (Pixel-Delta der Maus)
    CameraOrbitRequested { delta: Vec2 },
    /// Kamera-Abstand ändern (Scroll-Rasten, positiv = heranfahren)
    CameraDollyRequested { scroll_steps: f32 },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,

    /// Kontrollpunkt über das Seiten-Panel editiert
    ControlPointEdited { id: ControlPointId, position: Vec3 },
    /// Kurve auf die Ausgangs-Kontrollpunkte zurücksetzen
    ResetCurveRequested,
    /// Band-Breite über das Panel geändert
    RoadWidthChanged { width: f32 },
    /// Segmentzahl über das Panel geändert
    RoadSegmentsChanged { segments: u32 },

    /// Handle-Animation ein-/ausschalten
    AnimationToggled { enabled: bool },
    /// Animations-Tick (Wanduhr-Sekunden seit App-Start)
    AnimationTickRequested { elapsed_seconds: f64 },

    /// Optionen-Dialog öffnen
    OptionsDialogRequested,
    /// Optionen-Dialog schließen (ohne Übernehmen)
    OptionsDialogClosed,
    /// Optionen aus dem Dialog übernehmen und speichern
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
}

impl AppIntent {
    /// Per-Frame-Intents: werden jeden Frame erzeugt und rechtfertigen
    /// für sich allein keinen weiteren Repaint.
    pub fn is_per_frame(&self) -> bool {
        matches!(
            self,
            AppIntent::ViewportResized { .. } | AppIntent::AnimationTickRequested { .. }
        )
    }
}

/// Mutierende Commands, ausgeführt von den Handlern in `handlers/`.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Beenden-Flag setzen
    RequestExit,
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },

    /// Drag-Lifecycle Start: Handle picken oder Orbit beginnen
    BeginHandleDrag { ndc: Vec2 },
    /// Drag-Lifecycle Update: gezogenen Handle auf die Drag-Ebene projizieren
    UpdateHandleDrag { ndc: Vec2 },
    /// Drag-Lifecycle Ende
    EndHandleDrag,
    /// Hover-Zustand der Handles aktualisieren
    HoverHandle { ndc: Vec2 },

    /// Kamera um Yaw/Pitch-Delta orbitieren
    OrbitCamera { delta: Vec2 },
    /// Kamera-Abstand mit Faktor ändern
    DollyCamera { factor: f32 },
    /// Kamera auf die Ausgangspose zurücksetzen
    ResetCamera,

    /// Kontrollpunkt direkt setzen (geklemmt auf den Panel-Bereich)
    SetControlPoint { id: ControlPointId, position: Vec3 },
    /// Kurve auf die Ausgangs-Kontrollpunkte zurücksetzen
    ResetCurve,
    /// Band-Breite setzen
    SetRoadWidth { width: f32 },
    /// Segmentzahl setzen
    SetRoadSegments { segments: u32 },

    /// Animation ein-/ausschalten
    SetAnimationEnabled { enabled: bool },
    /// Einen Animations-Tick ausführen
    AdvanceAnimation { elapsed_seconds: f64 },

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

impl AppCommand {
    /// Per-Frame-Commands: fallen im normalen Betrieb jeden Frame an
    /// und bleiben aus dem Command-Log heraus, damit es nicht von
    /// Rauschen dominiert wird.
    pub fn is_per_frame(&self) -> bool {
        matches!(
            self,
            AppCommand::SetViewportSize { .. } | AppCommand::AdvanceAnimation { .. }
        )
    }
}
