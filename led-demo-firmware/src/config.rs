// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use led_demo_core::BoardInfo;

// ============================================================================
// Board-Kennung (Start-Banner)
// ============================================================================

/// Hardware-Bezeichnung im Banner
pub const HARDWARE_NAME: &str = "ESP32-C6";

/// CPU-Takt in Hz
/// Muss zu `CpuClock::max()` passen (ESP32-C6: 160 MHz)
pub const CPU_CLOCK_HZ: u32 = 160_000_000;

/// Kennung für das Start-Banner (Name und Version aus Cargo.toml)
pub const BOARD_INFO: BoardInfo = BoardInfo {
    hardware: HARDWARE_NAME,
    software_name: env!("CARGO_PKG_NAME"),
    software_version: env!("CARGO_PKG_VERSION"),
    cpu_hz: CPU_CLOCK_HZ,
};

// ============================================================================
// Toggle-Demo (zwei diskrete LEDs, active-low)
// ============================================================================

/// GPIO-Pin der grünen LED
pub const GREEN_LED_GPIO_PIN: u8 = 22;

/// GPIO-Pin der roten LED
pub const RED_LED_GPIO_PIN: u8 = 23;

// ============================================================================
// Color-Cycle-Demo (WS2812/Neopixel)
// ============================================================================

/// GPIO-Pin für die Datenleitung des RGB-Pixels
pub const PIXEL_GPIO_PIN: u8 = 22;

/// Anzahl der LEDs im Strip
pub const PIXEL_COUNT: usize = 1;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Runtime
// ============================================================================

/// Schlaf-Intervall der Leerlauf-Schleife nach Ende der Demo (Sekunden)
pub const IDLE_SLEEP_SECS: u64 = 3600;
