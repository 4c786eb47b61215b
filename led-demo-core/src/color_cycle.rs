//! Color-Cycle-Demo für einen adressierbaren RGB-Pixel

use crate::traits::{Console, LedError, SequenceTimer, SmartLedWriter};
use crate::types::{PaletteEntry, TraceEvent};

/// Pause vor jeder Farbe (Sekunden)
pub const COLOR_PAUSE_SECS: u64 = 1;

/// Zeigt jede Farbe der Palette genau einmal, in Tabellen-Reihenfolge
///
/// Vor jeder Farbe wird [`COLOR_PAUSE_SECS`] gewartet, danach wird die
/// Farbe angekündigt und auf den Pixel geschrieben. Nach dem letzten
/// Eintrag endet die Sequenz.
///
/// # Fehlerbehandlung
/// Ein fehlgeschlagener Schreibzugriff bricht die Sequenz sofort ab
/// und wird an den Aufrufer weitergegeben.
pub async fn color_cycle_sequence<L, T, C>(
    mut led: L,
    palette: &[PaletteEntry],
    timer: &mut T,
    console: &mut C,
) -> Result<(), LedError>
where
    L: SmartLedWriter,
    T: SequenceTimer,
    C: Console,
{
    console.blank_line();

    for entry in palette {
        timer.wait_secs(COLOR_PAUSE_SECS).await;
        console.trace(TraceEvent::ColorShown { entry: *entry });
        led.write(entry.color)?;
    }

    Ok(())
}
