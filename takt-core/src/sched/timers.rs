//! Software timer bank
//!
//! Eight independent 8-bit countdown timers for sub-tick-rate periodic
//! work without dedicated interrupts. The tick handler is the only
//! decrementer; any task may (re)arm or read a slot. Slot eligibility:
//!
//! | Slot | Group     | Decremented on            |
//! |------|-----------|---------------------------|
//! | 0, 1 | fast      | every tick                |
//! | 2, 3 | medium    | 400 us band ticks         |
//! | 4, 5 | slow      | 3.2 ms band ticks         |
//! | 6, 7 | very slow | 6.4 ms group A band ticks |
//!
//! Each slot is a single atomic byte, so no locking is needed between
//! the interrupt and foreground contexts.

use portable_atomic::{AtomicU8, Ordering};

/// Number of countdown slots in the bank.
pub const TIMER_COUNT: usize = 8;

/// Bank of countdown timers shared with client tasks.
#[derive(Debug)]
pub struct TimerBank {
    slots: [AtomicU8; TIMER_COUNT],
}

impl TimerBank {
    /// Create a bank with every slot expired.
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicU8::new(0) }; TIMER_COUNT],
        }
    }

    /// (Re)arm a slot with an initial countdown.
    ///
    /// Panics if `index` is out of range.
    pub fn set(&self, index: usize, count: u8) {
        self.slots[index].store(count, Ordering::Relaxed);
    }

    /// A slot is expired once its countdown has reached zero.
    pub fn is_expired(&self, index: usize) -> bool {
        self.remaining(index) == 0
    }

    /// Remaining count for a slot.
    pub fn remaining(&self, index: usize) -> u8 {
        self.slots[index].load(Ordering::Relaxed)
    }

    /// Count a slot down by one eligible tick. Expired slots stay at
    /// zero.
    ///
    /// Tick-handler only. The load-then-store pair is sound because no
    /// other context decrements; a racing foreground `set` either lands
    /// before the decrement or overwrites it.
    pub(crate) fn decrement(&self, index: usize) {
        let remaining = self.slots[index].load(Ordering::Relaxed);
        if remaining > 0 {
            self.slots[index].store(remaining - 1, Ordering::Relaxed);
        }
    }
}

impl Default for TimerBank {
    fn default() -> Self {
        Self::new()
    }
}
