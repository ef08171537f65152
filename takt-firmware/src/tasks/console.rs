//! Console task
//!
//! Runs the command line processor and the status renderer in a tight
//! cooperative loop on the thread-mode executor.

use defmt::*;
use embassy_futures::yield_now;

use takt_core::console::{Console, Readings};

use crate::probe::CortexMProbe;
use crate::serial::ConsoleUart;

/// Console task - polls serial input and renders periodic status
#[embassy_executor::task]
pub async fn console_task(mut console: Console<'static, ConsoleUart, CortexMProbe>) {
    info!("Console task started");

    console.print_menu();

    // Sensor tasks own these values and schedule themselves through
    // the timer bank; nothing is wired on a bare board.
    let readings = Readings::default();

    loop {
        console.poll();
        console.render(&readings);
        yield_now().await;
    }
}
