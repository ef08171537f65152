//! Serial console port abstraction
//!
//! The console polls for input so the foreground loop can interleave
//! command processing with status rendering; it never waits on the
//! receiver except while collecting a memory address.

/// Receive-side fault classes a UART can report.
///
/// The console counts these and shows the total in DEBUG mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Receive FIFO overrun
    Overrun,
    /// Stop bit not found where expected
    Framing,
    /// Parity check failed
    Parity,
    /// Break condition on the line
    Break,
}

/// Byte-oriented serial console port.
pub trait SerialPort {
    /// Fetch the next received byte, if one is pending.
    ///
    /// Non-blocking: returns `Ok(None)` when nothing has arrived.
    fn poll_byte(&mut self) -> Result<Option<u8>, SerialError>;

    /// Write a single byte, blocking until the transmitter accepts it.
    fn write_byte(&mut self, byte: u8);

    /// Write a string as raw bytes.
    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte);
        }
    }
}
