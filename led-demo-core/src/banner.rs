//! Start-Banner: Board- und Software-Kennung

use crate::traits::Console;
use crate::types::{BoardInfo, TraceEvent};

/// Gibt das Start-Banner aus
///
/// Zwei Leerzeilen, Begrüßung, dann Hardware, Software und CPU-Takt.
pub fn announce_board<C: Console>(console: &mut C, info: &BoardInfo) {
    console.blank_line();
    console.blank_line();
    console.trace(TraceEvent::Greeting);
    console.trace(TraceEvent::Hardware {
        name: info.hardware,
    });
    console.trace(TraceEvent::Software {
        name: info.software_name,
        version: info.software_version,
    });
    console.trace(TraceEvent::CpuFrequency { hz: info.cpu_hz });
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::{String, ToString};
    use std::vec::Vec;

    #[derive(Default)]
    struct LineConsole {
        lines: Vec<String>,
    }

    impl Console for LineConsole {
        fn blank_line(&mut self) {
            self.lines.push(String::new());
        }

        fn trace(&mut self, event: TraceEvent) {
            self.lines.push(event.to_string());
        }
    }

    #[test]
    fn test_announce_board_lines() {
        let mut console = LineConsole::default();
        let info = BoardInfo {
            hardware: "ESP32-C6",
            software_name: "esp-led-demos",
            software_version: "1.0.0",
            cpu_hz: 160_000_000,
        };

        announce_board(&mut console, &info);

        assert_eq!(
            console.lines,
            [
                "",
                "",
                "hallo",
                "HW: ESP32-C6",
                "SW: esp-led-demos 1.0.0",
                "CPU frequ: 160000000",
            ]
        );
    }
}
