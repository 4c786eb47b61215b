//! LED Demo Core - Platform-agnostic Sequences and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Farbpalette und die beiden Demo-Sequenzen.

#![no_std]

pub mod banner;
pub mod color_cycle;
pub mod palette;
pub mod toggle;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use banner::announce_board;
pub use color_cycle::{COLOR_PAUSE_SECS, color_cycle_sequence};
pub use palette::{PALETTE, PALETTE_LEN};
pub use toggle::{TOGGLE_SEQUENCE, ToggleStep, led_toggle_sequence};
pub use traits::{Console, LedError, LedPin, SequenceTimer, SmartLedWriter};
pub use types::{BoardInfo, DiscreteLed, LedState, PaletteEntry, PinLevel, TraceEvent};
