//! Takt - Tick-Scheduled Diagnostic Firmware
//!
//! Main firmware binary for RP2040-based boards. A fixed 100 us tick
//! drives the band scheduler from a high-priority interrupt executor
//! while the diagnostic console polls the UART from the thread-mode
//! executor, so the scheduler keeps advancing even while the console
//! blocks on operator input.

#![no_main]
#![no_std]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use takt_core::console::Console;
use takt_core::sched::{SchedulerState, TimerBank};

use crate::probe::CortexMProbe;
use crate::serial::ConsoleUart;

mod probe;
mod serial;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Scheduler state shared between the tick context and the foreground.
static SCHED: SchedulerState = SchedulerState::new();

/// Software timer bank exposed to every task.
static TIMERS: TimerBank = TimerBank::new();

/// High-priority executor hosting the tick task.
static TICK_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    TICK_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Takt firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console UART
    let uart_config = UartConfig::default(); // 115200 baud default
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    info!("Console UART initialized");

    // Probe pin held high for the duration of each tick handler body;
    // scope point only, no logical role.
    let probe_pin = Output::new(p.PIN_2, Level::Low);

    // Onboard heartbeat LED
    let led = Output::new(p.PIN_25, Level::Low);

    // The tick task preempts the thread executor, so the scheduler
    // keeps its cadence while the console blocks on address entry.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let tick_spawner = TICK_EXECUTOR.start(interrupt::SWI_IRQ_1);
    tick_spawner
        .spawn(tasks::tick_task(&SCHED, &TIMERS, probe_pin))
        .unwrap();

    let console = Console::new(ConsoleUart::new(uart), CortexMProbe, &SCHED);
    spawner.spawn(tasks::console_task(console)).unwrap();
    spawner.spawn(tasks::led_task(&SCHED, led)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned
    // tasks.
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
