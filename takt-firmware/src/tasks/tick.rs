//! Scheduler tick task
//!
//! Drives the core tick handler at the fixed 100 us period. The probe
//! pin is high for exactly the duration of the handler body so an
//! external scope can measure its execution time.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use takt_core::config::TICK_PERIOD_US;
use takt_core::sched::{SchedulerState, TimerBank};

/// Tick task - runs the scheduler once per hardware tick
#[embassy_executor::task]
pub async fn tick_task(
    sched: &'static SchedulerState,
    timers: &'static TimerBank,
    mut probe_pin: Output<'static>,
) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US));

    loop {
        ticker.next().await;

        probe_pin.set_high();
        sched.tick(timers);
        probe_pin.set_low();
    }
}
