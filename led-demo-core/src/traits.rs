//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::{PinLevel, TraceEvent};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Peripheral konnte nicht initialisiert werden
    InitFailed,
    WriteFailed,
}

/// Trait für einen exklusiv belegten GPIO-Ausgang
///
/// # Implementierungen
/// - **Production:** GpioLed (esp-hal `Output`)
/// - **Testing:** MockLedPin (zeichnet Schreibzugriffe auf)
pub trait LedPin {
    /// Setzt den Ausgang auf den gegebenen Pegel
    fn set_level(&mut self, level: PinLevel);
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED und überträgt sie sofort
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Trait für Pausen zwischen den Sequenz-Schritten
///
/// Eine Pause läuft immer vollständig ab, es gibt keinen Abbruch.
#[allow(async_fn_in_trait)]
pub trait SequenceTimer {
    async fn wait_secs(&mut self, secs: u64);
}

/// Trait für die Konsolen-Ausgabe (Trace-Zeilen)
pub trait Console {
    /// Gibt eine Leerzeile aus
    fn blank_line(&mut self);

    /// Gibt eine Trace-Zeile aus
    fn trace(&mut self, event: TraceEvent);
}
