// SmartLED Writer für den RGB-Pixel der Color-Cycle-Demo
//
// Verbindet das RMT Peripheral über esp-hal-smartled mit dem
// SmartLedWriter Trait aus led-demo-core.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use led_demo_core::{LedError, SmartLedWriter};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::PIXEL_COUNT;

/// Buffer-Größe: 24 Bits pro LED + 1 Reset
pub const LED_BUFFER_SIZE: usize = PIXEL_COUNT * 24 + 1;

/// Real Hardware LED Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer wird vom Aufrufer erstellt (smart_led_buffer! Macro)
/// und muss den Writer überleben.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio22`: GPIO22 Peripheral für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InitFailed` zurück wenn das RMT nicht startet
    pub fn new(
        gpio22: esp_hal::peripherals::GPIO22<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio22, buffer);

        Ok(Self { led })
    }
}

impl SmartLedWriter for RmtLedWriter<'_> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        // Ein Pixel: Index 0
        self.led
            .write([color].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
