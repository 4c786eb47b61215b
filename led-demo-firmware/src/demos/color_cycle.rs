// Color-Cycle-Demo - WS2812 Pixel an GPIO22 über RMT Peripheral
use defmt::info;
use esp_hal_smartled::smart_led_buffer;
use led_demo_core::{Console, LedError, PALETTE, color_cycle_sequence};

use crate::config::{PIXEL_COUNT, PIXEL_GPIO_PIN, RMT_CLOCK_MHZ};
use crate::hal::{EmbassyTimer, RmtLedWriter};

/// Color-Cycle-Demo auf echter Hardware
///
/// Initialisiert RMT + SmartLED und zeigt jede Palettenfarbe einmal.
///
/// # Parameter
/// - `gpio22`: GPIO22 Peripheral für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `console`: Trace-Ausgabe
///
/// # Fehlerbehandlung
/// Init- und Schreibfehler werden sofort zurückgegeben.
pub async fn run_color_cycle<C: Console>(
    gpio22: esp_hal::peripherals::GPIO22<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    console: &mut C,
) -> Result<(), LedError> {
    info!(
        "Color cycle demo: {} pixel on GPIO{}",
        PIXEL_COUNT, PIXEL_GPIO_PIN
    );

    // Buffer für SmartLED Daten im RMT-Format
    let mut rmt_buffer = smart_led_buffer!(PIXEL_COUNT);
    let led = RmtLedWriter::new(gpio22, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)?;

    let palette = PALETTE;
    color_cycle_sequence(led, &palette, &mut EmbassyTimer, console).await
}
