//! Toggle-Demo für zwei diskrete LEDs
//!
//! Beide LEDs sind active-low verdrahtet (siehe [`LedState::active_low_level`]).

use crate::traits::{Console, LedPin, SequenceTimer};
use crate::types::{DiscreteLed, LedState, TraceEvent};

/// Lange Pause vor jedem Einschalten (Sekunden)
pub const TOGGLE_LONG_PAUSE_SECS: u64 = 2;

/// Leuchtdauer einer LED (Sekunden)
pub const TOGGLE_ON_SECS: u64 = 1;

/// Ein Schritt der Toggle-Sequenz
///
/// `announce` gibt an, ob vor dem Schritt eine Trace-Zeile erscheint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStep {
    Switch {
        led: DiscreteLed,
        state: LedState,
        announce: bool,
    },
    Pause {
        secs: u64,
        announce: bool,
    },
}

impl ToggleStep {
    const fn switch(led: DiscreteLed, state: LedState, announce: bool) -> Self {
        ToggleStep::Switch {
            led,
            state,
            announce,
        }
    }

    const fn pause(secs: u64, announce: bool) -> Self {
        ToggleStep::Pause { secs, announce }
    }

    /// Trace-Zeile des Schritts, falls er angekündigt wird
    pub fn announcement(&self) -> Option<TraceEvent> {
        match *self {
            ToggleStep::Switch {
                led,
                state,
                announce: true,
            } => Some(TraceEvent::Switched { led, state }),
            ToggleStep::Pause {
                secs,
                announce: true,
            } => Some(TraceEvent::Pause { secs }),
            _ => None,
        }
    }
}

/// Die komplette Toggle-Sequenz
pub const TOGGLE_SEQUENCE: [ToggleStep; 10] = [
    // Beide LEDs aus (Ausgang High)
    ToggleStep::switch(DiscreteLed::Green, LedState::Off, false),
    ToggleStep::switch(DiscreteLed::Red, LedState::Off, false),
    ToggleStep::pause(TOGGLE_LONG_PAUSE_SECS, true),
    ToggleStep::switch(DiscreteLed::Green, LedState::On, true),
    ToggleStep::pause(TOGGLE_ON_SECS, false),
    ToggleStep::switch(DiscreteLed::Green, LedState::Off, true),
    ToggleStep::pause(TOGGLE_LONG_PAUSE_SECS, true),
    ToggleStep::switch(DiscreteLed::Red, LedState::On, true),
    ToggleStep::pause(TOGGLE_ON_SECS, false),
    ToggleStep::switch(DiscreteLed::Red, LedState::Off, true),
];

/// Führt die Toggle-Sequenz einmal vollständig aus
///
/// Die Pins werden übernommen und bleiben nach dem Lauf im letzten
/// Zustand (beide LEDs aus).
///
/// # Parameter
/// - `green`: Ausgang der grünen LED
/// - `red`: Ausgang der roten LED
/// - `timer`: Pausen (Hardware-Timer oder Mock)
/// - `console`: Trace-Ausgabe
pub async fn led_toggle_sequence<G, R, T, C>(
    mut green: G,
    mut red: R,
    timer: &mut T,
    console: &mut C,
) where
    G: LedPin,
    R: LedPin,
    T: SequenceTimer,
    C: Console,
{
    for step in TOGGLE_SEQUENCE {
        if let Some(event) = step.announcement() {
            console.blank_line();
            console.trace(event);
        }

        match step {
            ToggleStep::Switch { led, state, .. } => {
                let level = state.active_low_level();
                match led {
                    DiscreteLed::Green => green.set_level(level),
                    DiscreteLed::Red => red.set_level(level),
                }
            }
            ToggleStep::Pause { secs, .. } => timer.wait_secs(secs).await,
        }
    }
}
