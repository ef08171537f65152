//! Interactive diagnostic console
//!
//! Polls the serial port, accumulates command bytes, dispatches the
//! command table, and renders the periodic status text. The console
//! owns the display mode, the command buffer and the serial error
//! counter; it only ever reads the scheduler state, apart from
//! consuming the one-shot display flag and re-synchronizing the
//! display countdown after successful commands.

pub mod command;
pub mod mode;
pub mod status;

pub use command::Command;
pub use mode::{DisplayMode, ModeController};
pub use status::Readings;

use heapless::Vec;

use crate::config::{CMD_BUF_CAPACITY, CODE_VERSION, HEX_ENTRY_CAPACITY, MEM_DUMP_WORDS};
use crate::dump;
use crate::radix;
use crate::sched::SchedulerState;
use crate::traits::{Introspect, SerialPort};

/// Carriage return: dispatch the buffer.
const CR: u8 = 0x0D;
/// Backspace: destructive erase.
const BS: u8 = 0x08;
/// Control byte allowed as a QUIET-mode command prefix; never echoed.
const CTRL_B: u8 = 0x02;

/// Command dispatch failures reported on the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleError {
    /// No matching token
    Unrecognized,
    /// DEBUG-gated command while not in DEBUG mode
    NotInDebug,
}

/// The command line processor and status renderer.
pub struct Console<'a, S, P> {
    serial: S,
    probe: P,
    sched: &'a SchedulerState,
    mode: ModeController,
    buf: Vec<u8, CMD_BUF_CAPACITY>,
    error_count: u16,
}

impl<'a, S: SerialPort, P: Introspect> Console<'a, S, P> {
    /// Create a console in Normal mode with an empty buffer.
    pub fn new(serial: S, probe: P, sched: &'a SchedulerState) -> Self {
        Self {
            serial,
            probe,
            sched,
            mode: ModeController::new(),
            buf: Vec::new(),
            error_count: 0,
        }
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode.mode()
    }

    /// True while periodic rendering is paused.
    pub fn paused(&self) -> bool {
        self.mode.paused()
    }

    /// Serial transmission errors seen so far.
    pub fn error_count(&self) -> u16 {
        self.error_count
    }

    /// Print the boot-time mode selection menu.
    pub fn print_menu(&mut self) {
        self.serial.write_str("\r\nSelect Mode");
        self.serial.write_str("\r\n Hit NOR - Normal");
        self.serial.write_str("\r\n Hit QUI - Quiet");
        self.serial.write_str("\r\n Hit DEB - Debug");
        self.serial.write_str("\r\n Hit V - Version#\r\n");
        self.serial.write_str("\r\nSelect:  ");
    }

    /// Drain all pending serial input.
    pub fn poll(&mut self) {
        loop {
            match self.serial.poll_byte() {
                Ok(Some(byte)) => self.accept(byte),
                Ok(None) => break,
                Err(_) => self.error_count = self.error_count.saturating_add(1),
            }
        }
    }

    /// Process one received byte.
    fn accept(&mut self, byte: u8) {
        match byte {
            CR => {
                self.serial.write_str("\r\n");
                self.dispatch();
            }
            BS => {
                if !self.buf.is_empty() {
                    self.serial.write_str("\x08 \x08");
                    self.buf.pop();
                }
            }
            _ => {
                if self.buf.is_full() {
                    self.serial.write_str("\r\nToo Long!");
                    self.buf.clear();
                } else if self.mode.mode() == DisplayMode::Quiet
                    && self.buf.is_empty()
                    && !quiet_prefix_allowed(byte)
                {
                    // Noise filter: QUIET stays silent for stray input.
                } else {
                    let _ = self.buf.push(byte);
                    if byte != CTRL_B {
                        self.serial.write_byte(byte);
                    }
                    // Recognized commands are at most three bytes, so a
                    // third byte dispatches without a terminator.
                    if self.buf.len() > 2 {
                        self.dispatch();
                    }
                }
            }
        }
    }

    /// Dispatch the accumulated buffer and clear it.
    fn dispatch(&mut self) {
        let outcome = self.run_buffer();
        self.buf.clear();
        match outcome {
            Ok(()) => {}
            Err(ConsoleError::Unrecognized) => self.serial.write_str("\n\rError!"),
            Err(ConsoleError::NotInDebug) => self.serial.write_str("\n\rNot in DEBUG Mode!"),
        }
    }

    fn run_buffer(&mut self) -> Result<(), ConsoleError> {
        if self.buf.is_empty() {
            // A bare terminator after a dispatched command is not an
            // error.
            return Ok(());
        }
        let cmd = Command::parse(&self.buf).ok_or(ConsoleError::Unrecognized)?;
        if cmd.requires_debug() && !self.mode.debug_commands_allowed() {
            return Err(ConsoleError::NotInDebug);
        }
        self.execute(cmd);
        Ok(())
    }

    fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::SetMode(new_mode) => {
                self.mode.set_mode(new_mode);
                self.serial.write_str("\r\nMode=");
                self.serial.write_str(new_mode.name());
                self.serial.write_str("\n");
                self.sched.reset_display_countdown();
            }
            Command::Version => {
                self.mode.set_mode(DisplayMode::Version);
                self.serial.write_str("\r\n");
                self.serial.write_str(CODE_VERSION);
                self.serial.write_str("\r\nSelect  ");
                self.sched.reset_display_countdown();
            }
            Command::TogglePause => self.mode.toggle_pause(),
            Command::DumpRegisters => {
                let regs = self.probe.snapshot();
                dump::dump_registers(&mut self.serial, &regs);
                self.sched.reset_display_countdown();
            }
            Command::DumpStack => {
                dump::dump_stack(&mut self.serial, &mut self.probe);
                self.sched.reset_display_countdown();
            }
            Command::DumpMemory => {
                self.serial.write_str("\r\nInput memory location in hex: ");
                let addr = self.collect_hex_address();
                if addr == 0 {
                    self.serial.write_str("\r\nInvalid input.\r\n");
                } else {
                    dump::dump_words(&mut self.serial, &self.probe, addr, MEM_DUMP_WORDS);
                }
                self.sched.reset_display_countdown();
            }
        }
    }

    /// Read hex digits (echoing each byte) until carriage return or the
    /// entry buffer fills, then parse base 16.
    ///
    /// Blocks the foreground; the scheduler keeps running underneath.
    /// Returns 0 for unparsable input, which the caller treats as
    /// invalid; a literal address of 0 is indistinguishable.
    fn collect_hex_address(&mut self) -> u32 {
        let mut entry: Vec<u8, HEX_ENTRY_CAPACITY> = Vec::new();
        loop {
            let byte = match self.serial.poll_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => continue,
                Err(_) => {
                    self.error_count = self.error_count.saturating_add(1);
                    continue;
                }
            };
            self.serial.write_byte(byte);
            if byte == CR || entry.push(byte).is_err() {
                break;
            }
        }
        radix::parse_int(&entry, 16).unwrap_or(0) as u32
    }
}

/// Leading bytes accepted while QUIET: the prefixes that can start a
/// legal command. `Q` is deliberately absent.
fn quiet_prefix_allowed(byte: u8) -> bool {
    matches!(
        byte,
        CTRL_B
            | b'D'
            | b'd'
            | b'N'
            | b'n'
            | b'V'
            | b'v'
            | b'R'
            | b'r'
            | b'S'
            | b's'
            | b'M'
            | b'm'
            | b'P'
            | b'p'
    )
}
