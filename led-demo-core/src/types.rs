//! Core Types für die LED-Demos
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

use rgb::RGB8;

/// Logischer Pegel eines GPIO-Ausgangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    /// Logisch 1
    High,
    /// Logisch 0
    Low,
}

impl PinLevel {
    /// Pegel als Bit (1 = High, 0 = Low)
    pub fn bit(self) -> u8 {
        match self {
            PinLevel::High => 1,
            PinLevel::Low => 0,
        }
    }
}

/// Gewünschter Zustand einer diskreten LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// Pegel für active-low Verdrahtung
    ///
    /// Die LEDs hängen zwischen VCC und GPIO: High schaltet sie aus,
    /// Low schaltet sie ein.
    ///
    /// ```
    /// # use led_demo_core::{LedState, PinLevel};
    /// assert_eq!(LedState::Off.active_low_level(), PinLevel::High);
    /// assert_eq!(LedState::On.active_low_level(), PinLevel::Low);
    /// ```
    pub fn active_low_level(self) -> PinLevel {
        match self {
            LedState::On => PinLevel::Low,
            LedState::Off => PinLevel::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedState::On => "on",
            LedState::Off => "off",
        }
    }
}

/// Die beiden diskreten LEDs der Toggle-Demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteLed {
    Green,
    Red,
}

impl DiscreteLed {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscreteLed::Green => "green",
            DiscreteLed::Red => "red",
        }
    }
}

/// Ein Eintrag der Farbpalette (Name + RGB-Wert)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: RGB8,
}

impl PaletteEntry {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: RGB8 { r, g, b },
        }
    }
}

/// Board- und Software-Kennung für das Start-Banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardInfo {
    /// Hardware-Bezeichnung (Chip/Board)
    pub hardware: &'static str,
    pub software_name: &'static str,
    pub software_version: &'static str,
    /// CPU-Takt in Hz
    pub cpu_hz: u32,
}

/// Eine Zeile der Konsolen-Ausgabe
///
/// Jede Variante entspricht genau einer Trace-Zeile; `Display` liefert
/// den wörtlichen Text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// `hallo`
    Greeting,
    /// `HW: <hardware>`
    Hardware { name: &'static str },
    /// `SW: <name> <version>`
    Software {
        name: &'static str,
        version: &'static str,
    },
    /// `CPU frequ: <hz>`
    CpuFrequency { hz: u32 },
    /// `2sec` - angekündigte Pause
    Pause { secs: u64 },
    /// `green on`, `red off`, ...
    Switched { led: DiscreteLed, state: LedState },
    /// `green = [0, 150, 0]`
    ColorShown { entry: PaletteEntry },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Greeting => f.write_str("hallo"),
            TraceEvent::Hardware { name } => write!(f, "HW: {}", name),
            TraceEvent::Software { name, version } => write!(f, "SW: {} {}", name, version),
            TraceEvent::CpuFrequency { hz } => write!(f, "CPU frequ: {}", hz),
            TraceEvent::Pause { secs } => write!(f, "{}sec", secs),
            TraceEvent::Switched { led, state } => {
                write!(f, "{} {}", led.as_str(), state.as_str())
            }
            TraceEvent::ColorShown { entry } => write!(
                f,
                "{} = [{}, {}, {}]",
                entry.name, entry.color.r, entry.color.g, entry.color.b
            ),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for TraceEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TraceEvent::Greeting => defmt::write!(fmt, "hallo"),
            TraceEvent::Hardware { name } => defmt::write!(fmt, "HW: {}", name),
            TraceEvent::Software { name, version } => {
                defmt::write!(fmt, "SW: {} {}", name, version)
            }
            TraceEvent::CpuFrequency { hz } => defmt::write!(fmt, "CPU frequ: {}", hz),
            TraceEvent::Pause { secs } => defmt::write!(fmt, "{}sec", secs),
            TraceEvent::Switched { led, state } => {
                defmt::write!(fmt, "{} {}", led.as_str(), state.as_str())
            }
            TraceEvent::ColorShown { entry } => defmt::write!(
                fmt,
                "{} = [{}, {}, {}]",
                entry.name,
                entry.color.r,
                entry.color.g,
                entry.color.b
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_active_low_polarity() {
        assert_eq!(LedState::Off.active_low_level(), PinLevel::High);
        assert_eq!(LedState::On.active_low_level(), PinLevel::Low);
        assert_eq!(LedState::Off.active_low_level().bit(), 1);
        assert_eq!(LedState::On.active_low_level().bit(), 0);
    }

    #[test]
    fn test_trace_event_switched_text() {
        let event = TraceEvent::Switched {
            led: DiscreteLed::Green,
            state: LedState::On,
        };
        assert_eq!(event.to_string(), "green on");

        let event = TraceEvent::Switched {
            led: DiscreteLed::Red,
            state: LedState::Off,
        };
        assert_eq!(event.to_string(), "red off");
    }

    #[test]
    fn test_trace_event_color_text() {
        let event = TraceEvent::ColorShown {
            entry: PaletteEntry::new("yellow", 150, 150, 0),
        };
        assert_eq!(event.to_string(), "yellow = [150, 150, 0]");
    }

    #[test]
    fn test_trace_event_banner_text() {
        assert_eq!(TraceEvent::Greeting.to_string(), "hallo");
        assert_eq!(
            TraceEvent::Software {
                name: "esp-led-demos",
                version: "1.0.0"
            }
            .to_string(),
            "SW: esp-led-demos 1.0.0"
        );
        assert_eq!(
            TraceEvent::CpuFrequency { hz: 160_000_000 }.to_string(),
            "CPU frequ: 160000000"
        );
        assert_eq!(TraceEvent::Pause { secs: 2 }.to_string(), "2sec");
    }
}
