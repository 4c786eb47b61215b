// Konsolen-Ausgabe über defmt (esp-println als Logger)

use defmt::info;
use led_demo_core::{Console, TraceEvent};

pub struct DefmtConsole;

impl Console for DefmtConsole {
    fn blank_line(&mut self) {
        info!("");
    }

    fn trace(&mut self, event: TraceEvent) {
        info!("{}", event);
    }
}
