// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und defmt Logger
use {esp_backtrace as _, esp_println as _};

use esp_led_demos::announce_board;
use esp_led_demos::config::{BOARD_INFO, IDLE_SLEEP_SECS};
use esp_led_demos::demos::run_led_toggle;
use esp_led_demos::hal::DefmtConsole;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Banner ausgeben, Toggle-Sequenz einmal abspielen, danach schlafen.
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let mut console = DefmtConsole;
    announce_board(&mut console, &BOARD_INFO);

    run_led_toggle(peripherals.GPIO22, peripherals.GPIO23, &mut console).await;
    info!("Toggle demo finished");

    loop {
        Timer::after(Duration::from_secs(IDLE_SLEEP_SECS)).await;
    }
}
