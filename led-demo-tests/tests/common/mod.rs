//! Gemeinsame Mocks für die Integration Tests
//!
//! Alle Mocks schreiben in ein gemeinsames Journal mit virtueller Uhr,
//! damit Reihenfolge, Pausen und Zeitstempel geprüft werden können.

#![allow(dead_code)]

use std::cell::RefCell;

use led_demo_core::{Console, LedError, LedPin, PinLevel, SequenceTimer, SmartLedWriter, TraceEvent};
use rgb::RGB8;

// ============================================================================
// Journal
// ============================================================================

/// Ein aufgezeichneter Hardware- oder Konsolen-Zugriff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Pin { name: &'static str, level: PinLevel },
    Pixel(RGB8),
    Pause(u64),
    Blank,
    Line(String),
}

#[derive(Default)]
pub struct Journal {
    /// Virtuelle Zeit in Sekunden
    pub now_secs: u64,
    /// (Zeitstempel, Zugriff)
    pub entries: Vec<(u64, Entry)>,
}

impl Journal {
    pub fn record(&mut self, entry: Entry) {
        self.entries.push((self.now_secs, entry));
    }

    /// Nur Pin-Schreibzugriffe als (Name, Bit)
    pub fn pin_writes(&self) -> Vec<(&'static str, u8)> {
        self.entries
            .iter()
            .filter_map(|(_, entry)| match entry {
                Entry::Pin { name, level } => Some((*name, level.bit())),
                _ => None,
            })
            .collect()
    }

    /// Nur Pixel-Schreibzugriffe mit Zeitstempel
    pub fn pixel_writes(&self) -> Vec<(u64, RGB8)> {
        self.entries
            .iter()
            .filter_map(|(at, entry)| match entry {
                Entry::Pixel(color) => Some((*at, *color)),
                _ => None,
            })
            .collect()
    }

    /// Nur Pausen in Sekunden
    pub fn pauses(&self) -> Vec<u64> {
        self.entries
            .iter()
            .filter_map(|(_, entry)| match entry {
                Entry::Pause(secs) => Some(*secs),
                _ => None,
            })
            .collect()
    }

    /// Konsolen-Ausgabe, Leerzeilen als ""
    pub fn console_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|(_, entry)| match entry {
                Entry::Blank => Some(String::new()),
                Entry::Line(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Hardware-Zugriffe ohne Konsolen-Ausgabe
    pub fn hardware(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|(_, entry)| !matches!(entry, Entry::Blank | Entry::Line(_)))
            .map(|(_, entry)| entry.clone())
            .collect()
    }
}

// ============================================================================
// Mock LED Pin
// ============================================================================

pub struct MockLedPin<'a> {
    pub name: &'static str,
    pub journal: &'a RefCell<Journal>,
}

impl<'a> MockLedPin<'a> {
    pub fn new(name: &'static str, journal: &'a RefCell<Journal>) -> Self {
        Self { name, journal }
    }
}

impl LedPin for MockLedPin<'_> {
    fn set_level(&mut self, level: PinLevel) {
        self.journal.borrow_mut().record(Entry::Pin {
            name: self.name,
            level,
        });
    }
}

// ============================================================================
// Mock LED Writer
// ============================================================================

pub struct MockLedWriter<'a> {
    pub journal: &'a RefCell<Journal>,
    /// Simuliere Fehler beim n-ten write() (0-basiert)
    pub fail_at_write: Option<usize>,
    pub write_count: usize,
}

impl<'a> MockLedWriter<'a> {
    pub fn new(journal: &'a RefCell<Journal>) -> Self {
        Self {
            journal,
            fail_at_write: None,
            write_count: 0,
        }
    }

    pub fn failing_at(journal: &'a RefCell<Journal>, index: usize) -> Self {
        Self {
            fail_at_write: Some(index),
            ..Self::new(journal)
        }
    }
}

impl SmartLedWriter for MockLedWriter<'_> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_at_write == Some(self.write_count) {
            return Err(LedError::WriteFailed);
        }

        self.journal.borrow_mut().record(Entry::Pixel(color));
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Timer / Console
// ============================================================================

pub struct MockTimer<'a> {
    pub journal: &'a RefCell<Journal>,
}

impl SequenceTimer for MockTimer<'_> {
    async fn wait_secs(&mut self, secs: u64) {
        let mut journal = self.journal.borrow_mut();
        journal.record(Entry::Pause(secs));
        journal.now_secs += secs;
    }
}

pub struct MockConsole<'a> {
    pub journal: &'a RefCell<Journal>,
}

impl Console for MockConsole<'_> {
    fn blank_line(&mut self) {
        self.journal.borrow_mut().record(Entry::Blank);
    }

    fn trace(&mut self, event: TraceEvent) {
        self.journal.borrow_mut().record(Entry::Line(event.to_string()));
    }
}
