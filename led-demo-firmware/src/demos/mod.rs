// Demo-Modul: Hardware-Initialisierung + Sequenz aus led-demo-core
//
// Jede Demo übernimmt ihre Peripherals exklusiv und läuft einmal durch.

pub mod color_cycle;
pub mod led_toggle;

pub use color_cycle::run_color_cycle;
pub use led_toggle::run_led_toggle;
