//! Embassy async tasks
//!
//! The tick task runs on the high-priority interrupt executor; the
//! console and LED tasks share the thread-mode executor and talk to the
//! tick context only through the atomic scheduler state.

pub mod console;
pub mod led;
pub mod tick;

pub use console::console_task;
pub use led::led_task;
pub use tick::tick_task;
