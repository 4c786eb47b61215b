// Diskrete LED an einem GPIO-Ausgang

use esp_hal::gpio::{Level, Output};
use led_demo_core::{LedPin, PinLevel};

/// LED an einem esp-hal `Output`
///
/// Der Ausgang gehört exklusiv dieser LED, solange die Demo läuft.
pub struct GpioLed<'d> {
    output: Output<'d>,
}

impl<'d> GpioLed<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl LedPin for GpioLed<'_> {
    fn set_level(&mut self, level: PinLevel) {
        self.output.set_level(match level {
            PinLevel::High => Level::High,
            PinLevel::Low => Level::Low,
        });
    }
}
