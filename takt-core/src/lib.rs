//! Board-agnostic core logic for the Takt diagnostic firmware
//!
//! This crate contains all scheduler and console logic that does not
//! depend on specific hardware implementations:
//!
//! - Fixed-period tick scheduler with priority-ordered execution bands
//! - Software timer bank polled by client tasks
//! - Display mode controller and command line processor
//! - Periodic status renderer
//! - Register/memory dump formatting
//! - Base-N numeric codec
//!
//! Two execution contexts share state: the periodic tick interrupt and
//! the foreground console loop. Every shared field is an atomic cell
//! with a single writer per direction, so no locking is needed anywhere.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod dump;
pub mod radix;
pub mod sched;
pub mod traits;
