// Hardware Abstraction Layer (HAL) Module
//
// Bindet esp-hal, esp-hal-smartled, embassy-time und defmt an die
// Traits aus led-demo-core.

pub mod console;
pub mod gpio_led;
pub mod led_writer;
pub mod timer;

pub use console::DefmtConsole;
pub use gpio_led::GpioLed;
pub use led_writer::RmtLedWriter;
pub use timer::EmbassyTimer;
