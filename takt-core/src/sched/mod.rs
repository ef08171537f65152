//! Fixed-period tick scheduler
//!
//! The hardware timer invokes [`SchedulerState::tick`] every
//! [`TICK_PERIOD_US`](crate::config::TICK_PERIOD_US) microseconds. Each
//! invocation classifies the tick into one execution [`Band`], counts
//! down the software timers eligible on that band, and advances the
//! display and heartbeat cadences.
//!
//! The handler never blocks and never fails; everything it does is
//! fixed-cost integer arithmetic on atomic cells.

pub mod band;
pub mod timers;

pub use band::Band;
pub use timers::{TimerBank, TIMER_COUNT};

use portable_atomic::{AtomicBool, AtomicU16, AtomicU32, AtomicU8, Ordering};

use crate::config::HEARTBEAT_TICKS;

/// Scheduler state shared between the tick interrupt and the
/// foreground.
///
/// Single-writer discipline: the tick handler writes every field; the
/// foreground only reads, apart from consuming the one-shot flags and
/// resetting the display countdown after a successful console command.
#[derive(Debug)]
pub struct SchedulerState {
    /// Wraps modulo 256; selects the execution band.
    tick: AtomicU8,
    /// Increments once per tick-counter wrap (every 25.6 ms).
    long_time: AtomicU8,
    /// Counts display-band visits down to the next display slot.
    display_countdown: AtomicU8,
    /// One-shot "ready to display" flag, consumed by the renderer.
    display_flag: AtomicBool,
    /// Ticks since the last heartbeat blink.
    heartbeat: AtomicU16,
    /// One-shot blink flag, consumed by the LED task.
    blink_flag: AtomicBool,
    /// Free-running total tick count.
    total_ticks: AtomicU32,
    /// Free-running ISR invocation count.
    isr_count: AtomicU16,
}

impl SchedulerState {
    /// Create a scheduler at tick zero.
    pub const fn new() -> Self {
        Self {
            tick: AtomicU8::new(0),
            long_time: AtomicU8::new(0),
            display_countdown: AtomicU8::new(0),
            display_flag: AtomicBool::new(false),
            heartbeat: AtomicU16::new(0),
            blink_flag: AtomicBool::new(false),
            total_ticks: AtomicU32::new(0),
            isr_count: AtomicU16::new(0),
        }
    }

    /// Run one scheduler tick.
    pub fn tick(&self, timers: &TimerBank) {
        let tick = self.tick.load(Ordering::Relaxed).wrapping_add(1);
        self.tick.store(tick, Ordering::Relaxed);
        if tick == 0 {
            let long = self.long_time.load(Ordering::Relaxed).wrapping_add(1);
            self.long_time.store(long, Ordering::Relaxed);
        }

        // Fast timers run on every tick, ahead of the band chain.
        timers.decrement(0);
        timers.decrement(1);

        match Band::classify(tick) {
            Band::Group200Us => {}
            Band::Group400Us => {
                timers.decrement(2);
                timers.decrement(3);
            }
            Band::Group800Us => {}
            Band::Group1600Us => {}
            Band::Group3200Us => {
                timers.decrement(4);
                timers.decrement(5);
            }
            Band::Group6400Us => {
                timers.decrement(6);
                timers.decrement(7);
            }
            Band::Display => {
                // Unconditional wrapping decrement: 256 display-band
                // visits (~1.64 s) between display slots.
                let next = self.display_countdown.load(Ordering::Relaxed).wrapping_sub(1);
                self.display_countdown.store(next, Ordering::Relaxed);
                if next == 1 {
                    self.display_flag.store(true, Ordering::Relaxed);
                }
            }
        }

        // Heartbeat and diagnostic counters run regardless of the band.
        let beat = self.heartbeat.load(Ordering::Relaxed);
        if beat > HEARTBEAT_TICKS {
            self.blink_flag.store(true, Ordering::Relaxed);
            self.heartbeat.store(0, Ordering::Relaxed);
        } else {
            self.heartbeat.store(beat + 1, Ordering::Relaxed);
        }

        let total = self.total_ticks.load(Ordering::Relaxed).wrapping_add(1);
        self.total_ticks.store(total, Ordering::Relaxed);
        let isr = self.isr_count.load(Ordering::Relaxed).wrapping_add(1);
        self.isr_count.store(isr, Ordering::Relaxed);
    }

    /// Current tick counter value.
    pub fn tick_count(&self) -> u8 {
        self.tick.load(Ordering::Relaxed)
    }

    /// Wrap counter for the slowest (currently empty) execution band.
    pub fn long_time_state(&self) -> u8 {
        self.long_time.load(Ordering::Relaxed)
    }

    /// Free-running total tick count.
    pub fn total_ticks(&self) -> u32 {
        self.total_ticks.load(Ordering::Relaxed)
    }

    /// Free-running ISR invocation count.
    pub fn isr_count(&self) -> u16 {
        self.isr_count.load(Ordering::Relaxed)
    }

    /// Current display countdown value.
    pub fn display_countdown(&self) -> u8 {
        self.display_countdown.load(Ordering::Relaxed)
    }

    /// True when a display slot is pending, without consuming it.
    pub fn display_ready(&self) -> bool {
        self.display_flag.load(Ordering::Relaxed)
    }

    /// Consume the one-shot display flag.
    pub fn take_display_flag(&self) -> bool {
        self.display_flag.swap(false, Ordering::Relaxed)
    }

    /// Consume the one-shot heartbeat blink flag.
    pub fn take_blink_flag(&self) -> bool {
        self.blink_flag.swap(false, Ordering::Relaxed)
    }

    /// Re-synchronize the display cadence after a console command.
    pub fn reset_display_countdown(&self) {
        self.display_countdown.store(0, Ordering::Relaxed);
    }
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self::new()
    }
}
