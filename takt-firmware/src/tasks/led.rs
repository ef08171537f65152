//! Heartbeat LED task
//!
//! Consumes the scheduler's one-shot blink flag and toggles the
//! onboard LED, giving the 0.5 s heartbeat.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use takt_core::sched::SchedulerState;

/// LED task - blinks the heartbeat LED from the scheduler's flag
#[embassy_executor::task]
pub async fn led_task(sched: &'static SchedulerState, mut led: Output<'static>) {
    info!("Heartbeat LED task started");

    loop {
        if sched.take_blink_flag() {
            led.toggle();
        }
        Timer::after_millis(10).await;
    }
}
