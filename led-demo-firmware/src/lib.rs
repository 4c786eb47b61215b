// Library-Root: Hardware-Anbindung der beiden LED-Demos
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod demos;
pub mod hal;

// Re-exports von led-demo-core
pub use led_demo_core::{LedError, announce_board};
