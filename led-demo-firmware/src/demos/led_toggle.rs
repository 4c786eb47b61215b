// Toggle-Demo - zwei diskrete LEDs an GPIO22 (grün) und GPIO23 (rot)
use defmt::info;
use esp_hal::gpio::{Level, Output, OutputConfig};
use led_demo_core::{Console, led_toggle_sequence};

use crate::config::{GREEN_LED_GPIO_PIN, RED_LED_GPIO_PIN};
use crate::hal::{EmbassyTimer, GpioLed};

/// Toggle-Demo auf echter Hardware
///
/// Beide Ausgänge starten auf High, also mit ausgeschalteten LEDs
/// (active-low). Danach läuft `led_toggle_sequence()` einmal durch.
///
/// # Parameter
/// - `gpio22`: GPIO22 Peripheral für die grüne LED
/// - `gpio23`: GPIO23 Peripheral für die rote LED
/// - `console`: Trace-Ausgabe
pub async fn run_led_toggle<C: Console>(
    gpio22: esp_hal::peripherals::GPIO22<'static>,
    gpio23: esp_hal::peripherals::GPIO23<'static>,
    console: &mut C,
) {
    info!(
        "Toggle demo: green on GPIO{}, red on GPIO{}",
        GREEN_LED_GPIO_PIN, RED_LED_GPIO_PIN
    );

    let green = GpioLed::new(Output::new(gpio22, Level::High, OutputConfig::default()));
    let red = GpioLed::new(Output::new(gpio23, Level::High, OutputConfig::default()));

    led_toggle_sequence(green, red, &mut EmbassyTimer, console).await;
}
