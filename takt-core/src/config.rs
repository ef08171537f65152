//! Build-time configuration constants
//!
//! Every tunable in this firmware is a compile-time constant; there is
//! no persisted machine configuration.

/// Scheduler tick period in microseconds.
///
/// The tick counter wraps every 256 ticks, so the full scheduler period
/// is 25.6 ms and the display cadence (256 baseline-band visits) is
/// ~1.64 s.
pub const TICK_PERIOD_US: u64 = 100;

/// Ticks between heartbeat blinks (0.5 s at the 100 us tick period).
pub const HEARTBEAT_TICKS: u16 = 5000;

/// Command line buffer capacity in bytes.
pub const CMD_BUF_CAPACITY: usize = 16;

/// Capacity of the hex address entry buffer.
pub const HEX_ENTRY_CAPACITY: usize = 16;

/// Words shown by the stack dump command.
pub const STACK_DUMP_WORDS: u32 = 16;

/// Words shown by the memory dump command.
pub const MEM_DUMP_WORDS: u32 = 32;

/// Version string reported by the `V` command.
pub const CODE_VERSION: &str = "Takt 0.1.0";
