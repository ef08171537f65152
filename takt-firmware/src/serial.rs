//! Console UART port
//!
//! Adapts the buffered RP2040 UART to the core's `SerialPort` trait:
//! non-blocking reads against the receive buffer, blocking writes.

use embassy_rp::uart::{BufferedUart, Error as UartError};
use embedded_io::{Read, ReadReady, Write};

use takt_core::traits::{SerialError, SerialPort};

/// Serial console port over UART0.
pub struct ConsoleUart {
    uart: BufferedUart,
}

impl ConsoleUart {
    pub fn new(uart: BufferedUart) -> Self {
        Self { uart }
    }
}

impl SerialPort for ConsoleUart {
    fn poll_byte(&mut self) -> Result<Option<u8>, SerialError> {
        match self.uart.read_ready() {
            Ok(false) => Ok(None),
            Ok(true) => {
                let mut byte = [0u8; 1];
                match self.uart.read(&mut byte) {
                    Ok(0) => Ok(None),
                    Ok(_) => Ok(Some(byte[0])),
                    Err(error) => Err(map_error(error)),
                }
            }
            Err(error) => Err(map_error(error)),
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let _ = self.uart.write_all(&[byte]);
    }
}

/// Map the HAL's receive faults onto the console's error classes.
fn map_error(error: UartError) -> SerialError {
    match error {
        UartError::Break => SerialError::Break,
        UartError::Parity => SerialError::Parity,
        UartError::Framing => SerialError::Framing,
        _ => SerialError::Overrun,
    }
}
