//! Register and memory dump rendering
//!
//! Hex formatting for the DEBUG-gated console commands: the labeled
//! register dump and rows of raw 32-bit memory words.

use crate::config::STACK_DUMP_WORDS;
use crate::traits::{Introspect, RegisterFile, SerialPort};

/// Words per memory dump row.
const ROW_WORDS: u32 = 4;

/// Register labels in dump order.
const REG_LABELS: [&str; 16] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "sp", "lr",
    "pc",
];

/// Emit one byte as two uppercase hex digits.
fn put_hex_byte<S: SerialPort>(serial: &mut S, byte: u8) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    serial.write_byte(DIGITS[usize::from(byte >> 4)]);
    serial.write_byte(DIGITS[usize::from(byte & 0x0F)]);
}

/// Emit a 32-bit word as 8 hex digits, high byte first.
fn put_hex_word<S: SerialPort>(serial: &mut S, word: u32) {
    put_hex_byte(serial, (word >> 24) as u8);
    put_hex_byte(serial, (word >> 16) as u8);
    put_hex_byte(serial, (word >> 8) as u8);
    put_hex_byte(serial, word as u8);
}

/// Print the labeled register dump.
pub fn dump_registers<S: SerialPort>(serial: &mut S, regs: &RegisterFile) {
    serial.write_str("\r\n***Register values***");
    for (label, value) in REG_LABELS.iter().zip(regs.ordered()) {
        serial.write_str("\r\n");
        serial.write_str(label);
        serial.write_str(":\t");
        put_hex_word(serial, value);
    }
    serial.write_str("\r\n");
}

/// Print `count` 32-bit words starting at `start`.
///
/// Each row is an 8-digit address label followed by up to four
/// space-separated words; the final partial row holds the remainder.
pub fn dump_words<S: SerialPort, P: Introspect>(serial: &mut S, probe: &P, start: u32, count: u32) {
    let mut addr = start;
    let mut printed = 0;
    while printed < count {
        put_hex_word(serial, addr);
        serial.write_str(":");
        let mut col = 0;
        while col < ROW_WORDS && printed < count {
            serial.write_str(" ");
            put_hex_word(serial, probe.read_word(addr));
            addr = addr.wrapping_add(4);
            col += 1;
            printed += 1;
        }
        serial.write_str("\r\n");
    }
}

/// Dump the top of the stack as seen by a fresh register snapshot.
pub fn dump_stack<S: SerialPort, P: Introspect>(serial: &mut S, probe: &mut P) {
    serial.write_str("\r\n*** Top 16 words of Stack ***\r\n");
    let sp = probe.snapshot().sp;
    dump_words(serial, probe, sp, STACK_DUMP_WORDS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SerialError;
    use heapless::Vec;

    struct BufSerial {
        out: Vec<u8, 2048>,
    }

    impl BufSerial {
        fn new() -> Self {
            Self { out: Vec::new() }
        }

        fn as_str(&self) -> &str {
            core::str::from_utf8(&self.out).unwrap()
        }
    }

    impl SerialPort for BufSerial {
        fn poll_byte(&mut self) -> Result<Option<u8>, SerialError> {
            Ok(None)
        }

        fn write_byte(&mut self, byte: u8) {
            let _ = self.out.push(byte);
        }
    }

    struct PatternProbe;

    impl Introspect for PatternProbe {
        fn snapshot(&mut self) -> RegisterFile {
            let mut gpr = [0u32; 13];
            for (i, reg) in gpr.iter_mut().enumerate() {
                *reg = 0x1111_0000 + i as u32;
            }
            RegisterFile {
                gpr,
                sp: 0x2000_7F00,
                lr: 0x0000_0123,
                pc: 0x0000_0456,
            }
        }

        fn read_word(&self, addr: u32) -> u32 {
            addr ^ 0xFFFF_FFFF
        }
    }

    #[test]
    fn test_register_dump_format() {
        let mut serial = BufSerial::new();
        let regs = PatternProbe.snapshot();
        dump_registers(&mut serial, &regs);
        let text = serial.as_str();
        assert!(text.starts_with("\r\n***Register values***"));
        assert!(text.contains("\r\nr0:\t11110000"));
        assert!(text.contains("\r\nr12:\t1111000C"));
        assert!(text.contains("\r\nsp:\t20007F00"));
        assert!(text.contains("\r\npc:\t00000456"));
        assert!(text.ends_with("\r\n"));
    }

    #[test]
    fn test_memory_dump_rows_of_four() {
        let mut serial = BufSerial::new();
        dump_words(&mut serial, &PatternProbe, 0x2000_0000, 6);
        let rows: heapless::Vec<&str, 8> = serial
            .as_str()
            .split("\r\n")
            .filter(|row| !row.is_empty())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "20000000: DFFFFFFF DFFFFFFB DFFFFFF7 DFFFFFF3");
        assert_eq!(rows[1], "20000010: DFFFFFEF DFFFFFEB");
    }

    #[test]
    fn test_stack_dump_header_and_extent() {
        let mut serial = BufSerial::new();
        let mut probe = PatternProbe;
        dump_stack(&mut serial, &mut probe);
        let text = serial.as_str();
        assert!(text.starts_with("\r\n*** Top 16 words of Stack ***\r\n"));
        assert!(text.contains("20007F00:"));
        // 16 words at 4 per row.
        assert_eq!(text.matches(':').count(), 4);
    }
}
