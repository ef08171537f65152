//! Hardware abstraction traits
//!
//! These traits define the seams between the core logic and the target
//! hardware. The firmware crate provides one implementation per target;
//! tests provide in-memory fakes.

pub mod probe;
pub mod serial;

pub use probe::{Introspect, RegisterFile};
pub use serial::{SerialError, SerialPort};
