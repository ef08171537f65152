//! Periodic status rendering
//!
//! Consumes the scheduler's one-shot display flag and prints the
//! per-mode status text roughly every 1.64 s. While paused, the flag is
//! left pending so rendering resumes immediately on unpause.

use super::{Console, DisplayMode};
use crate::dump;
use crate::radix;
use crate::traits::{Introspect, SerialPort};

/// Latest outputs of the sensor tasks, displayed read-only.
///
/// The tasks that produce these values schedule themselves through the
/// software timer bank; the console never writes them.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Flow rate in gallons per minute
    pub flow_gpm: u16,
    /// Water temperature in degrees C
    pub temperature_c: i16,
    /// Vortex shedding frequency in Hz
    pub frequency_hz: u16,
}

impl<'a, S: SerialPort, P: Introspect> Console<'a, S, P> {
    /// Render the periodic status text if a display slot is pending.
    pub fn render(&mut self, readings: &Readings) {
        match self.mode.mode() {
            DisplayMode::Quiet | DisplayMode::Version => {
                // Nothing to show; still consume the one-shot flag.
                let _ = self.sched.take_display_flag();
            }
            DisplayMode::Normal => {
                if !self.mode.paused() && self.sched.take_display_flag() {
                    self.status_line("NORMAL", readings);
                }
            }
            DisplayMode::Debug => {
                if !self.mode.paused() && self.sched.take_display_flag() {
                    self.status_line("DEBUG", readings);
                    let regs = self.probe.snapshot();
                    dump::dump_registers(&mut self.serial, &regs);
                    self.serial.write_str("\r\nUART Transmission Error Count:\t");
                    self.put_decimal(i32::from(self.error_count));
                    self.serial.write_str("\r\n");
                }
            }
        }
    }

    fn status_line(&mut self, label: &str, readings: &Readings) {
        self.serial.write_str("\r\n");
        self.serial.write_str(label);
        self.serial.write_str("  Flow: ");
        self.put_decimal(i32::from(readings.flow_gpm));
        self.serial.write_str(" Temp: ");
        self.put_decimal(i32::from(readings.temperature_c));
        self.serial.write_str(" Freq: ");
        self.put_decimal(i32::from(readings.frequency_hz));
        self.serial.write_str("\r\n");
    }

    fn put_decimal(&mut self, value: i32) {
        if let Ok(text) = radix::format_int(value, 10) {
            self.serial.write_str(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{console, feed, output};
    use super::*;
    use crate::sched::{SchedulerState, TimerBank};

    /// Run the scheduler until the display flag is raised.
    fn raise_display_flag(sched: &SchedulerState, timers: &TimerBank) {
        for _ in 0..(256 * 64) {
            sched.tick(timers);
            if sched.display_ready() {
                return;
            }
        }
        panic!("display flag never set");
    }

    #[test]
    fn test_no_output_without_display_flag() {
        let sched = SchedulerState::new();
        let mut console = console(&sched);
        console.render(&Readings::default());
        assert_eq!(output(&console), "");
    }

    #[test]
    fn test_normal_status_line() {
        let sched = SchedulerState::new();
        let timers = TimerBank::new();
        raise_display_flag(&sched, &timers);
        let mut console = console(&sched);
        let readings = Readings {
            flow_gpm: 12,
            temperature_c: -3,
            frequency_hz: 377,
        };
        console.render(&readings);
        assert_eq!(
            output(&console),
            "\r\nNORMAL  Flow: 12 Temp: -3 Freq: 377\r\n"
        );
    }

    #[test]
    fn test_display_flag_consumed_once() {
        let sched = SchedulerState::new();
        let timers = TimerBank::new();
        raise_display_flag(&sched, &timers);
        let mut console = console(&sched);
        console.render(&Readings::default());
        let first = output(&console).len();
        assert!(first > 0);
        console.render(&Readings::default());
        assert_eq!(output(&console).len(), first);
    }

    #[test]
    fn test_pause_defers_rendering() {
        let sched = SchedulerState::new();
        let timers = TimerBank::new();
        let mut console = console(&sched);
        feed(&mut console, b"P\r");
        raise_display_flag(&sched, &timers);
        let before = output(&console).len();
        console.render(&Readings::default());
        assert_eq!(output(&console).len(), before);
        assert!(sched.display_ready());
        // Unpause: the pending slot renders on the next pass.
        feed(&mut console, b"P\r");
        console.render(&Readings::default());
        assert!(output(&console).contains("\r\nNORMAL  Flow: "));
    }

    #[test]
    fn test_quiet_consumes_flag_silently() {
        let sched = SchedulerState::new();
        let timers = TimerBank::new();
        let mut console = console(&sched);
        feed(&mut console, b"QUI");
        let before = output(&console).len();
        raise_display_flag(&sched, &timers);
        console.render(&Readings::default());
        assert_eq!(output(&console).len(), before);
        assert!(!sched.display_ready());
    }

    #[test]
    fn test_version_mode_renders_nothing() {
        let sched = SchedulerState::new();
        let timers = TimerBank::new();
        let mut console = console(&sched);
        feed(&mut console, b"V\r");
        let before = output(&console).len();
        raise_display_flag(&sched, &timers);
        console.render(&Readings::default());
        assert_eq!(output(&console).len(), before);
    }

    #[test]
    fn test_debug_render_includes_registers_and_errors() {
        let sched = SchedulerState::new();
        let timers = TimerBank::new();
        let mut console = console(&sched);
        feed(&mut console, b"DEB");
        raise_display_flag(&sched, &timers);
        console.render(&Readings::default());
        let text = output(&console);
        assert!(text.contains("\r\nDEBUG  Flow: "));
        assert!(text.contains("***Register values***"));
        assert!(text.contains("\r\nUART Transmission Error Count:\t0\r\n"));
    }
}
