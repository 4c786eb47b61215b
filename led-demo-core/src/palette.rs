//! Farbpalette der Color-Cycle-Demo
//!
//! Die Reihenfolge der Einträge ist die Anzeige-Reihenfolge.

use crate::types::PaletteEntry;

/// Anzahl der Paletten-Einträge
pub const PALETTE_LEN: usize = 5;

/// Die fünf Farben in Anzeige-Reihenfolge
pub const PALETTE: [PaletteEntry; PALETTE_LEN] = [
    PaletteEntry::new("green", 0, 150, 0),
    PaletteEntry::new("red", 150, 0, 0),
    PaletteEntry::new("blue", 0, 0, 150),
    PaletteEntry::new("yellow", 150, 150, 0),
    PaletteEntry::new("white", 255, 255, 255),
];
