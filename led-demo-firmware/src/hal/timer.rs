// Pausen über den Embassy Timer

use embassy_time::{Duration, Timer};
use led_demo_core::SequenceTimer;

/// SequenceTimer auf Basis von `embassy_time::Timer`
///
/// Die Demos laufen im einzigen Task; jede Pause hält damit das
/// gesamte Programm an.
pub struct EmbassyTimer;

impl SequenceTimer for EmbassyTimer {
    async fn wait_secs(&mut self, secs: u64) {
        Timer::after(Duration::from_secs(secs)).await;
    }
}
