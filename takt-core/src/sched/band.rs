//! Execution band classification
//!
//! Each tick is assigned to exactly one band by a priority-ordered
//! chain of bit tests against the low six bits of the tick counter.
//! Only the first matching band runs. Ticks matching none of the six
//! masks (multiples of 64) fall through to the display band.
//!
//! Because the chain is mutually exclusive, a group's real cadence is
//! one specific bit pattern, not every tick with its bit set: the
//! 400 us group fires on ticks 2, 6, 10, ... (tick = 2 mod 4), the
//! 3.2 ms group on ticks 16, 48, 80, ..., and so on. The group names
//! keep the nominal periods at the 100 us tick.

/// Execution band for one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// 200 us group (odd ticks). Reserved, currently empty.
    Group200Us,
    /// 400 us group: medium software timers (slots 2 and 3).
    Group400Us,
    /// 800 us group. Reserved slot for higher-priority periodic work.
    Group800Us,
    /// 1.6 ms group. Reserved slot.
    Group1600Us,
    /// 3.2 ms group: slow software timers (slots 4 and 5).
    Group3200Us,
    /// 6.4 ms group A: very slow software timers (slots 6 and 7).
    Group6400Us,
    /// 6.4 ms group B (tick multiples of 64): display countdown.
    Display,
}

impl Band {
    /// Classify a tick counter value into its execution band.
    pub fn classify(tick: u8) -> Band {
        if tick & 0x01 != 0 {
            Band::Group200Us
        } else if tick & 0x02 != 0 {
            Band::Group400Us
        } else if tick & 0x04 != 0 {
            Band::Group800Us
        } else if tick & 0x08 != 0 {
            Band::Group1600Us
        } else if tick & 0x10 != 0 {
            Band::Group3200Us
        } else if tick & 0x20 != 0 {
            Band::Group6400Us
        } else {
            Band::Display
        }
    }
}
