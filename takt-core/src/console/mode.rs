//! Display mode controller
//!
//! Holds the operator-selected diagnostic mode and the pause flag, and
//! gates the DEBUG-only console commands. Transitions happen only
//! through validated console commands.

/// Diagnostic display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Mode and state changes plus calculated outputs
    #[default]
    Normal,
    /// No unsolicited output
    Quiet,
    /// Everything Normal shows, plus registers and error counts
    Debug,
    /// Version banner only
    Version,
}

impl DisplayMode {
    /// Name used in the `Mode=` confirmation text.
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Normal => "NORMAL",
            DisplayMode::Quiet => "QUIET",
            DisplayMode::Debug => "DEBUG",
            DisplayMode::Version => "VERSION",
        }
    }
}

/// Mode and pause state, owned by the foreground console.
#[derive(Debug, Default)]
pub struct ModeController {
    mode: DisplayMode,
    paused: bool,
}

impl ModeController {
    /// Start in Normal mode, not paused.
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Normal,
            paused: false,
        }
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// True while periodic status rendering is suppressed.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Switch the display mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Flip the pause flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Register, stack and memory dumps are legal only in Debug mode.
    pub fn debug_commands_allowed(&self) -> bool {
        self.mode == DisplayMode::Debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_normal_unpaused() {
        let ctrl = ModeController::new();
        assert_eq!(ctrl.mode(), DisplayMode::Normal);
        assert!(!ctrl.paused());
        assert!(!ctrl.debug_commands_allowed());
    }

    #[test]
    fn test_debug_gating_follows_mode() {
        let mut ctrl = ModeController::new();
        ctrl.set_mode(DisplayMode::Debug);
        assert!(ctrl.debug_commands_allowed());
        ctrl.set_mode(DisplayMode::Quiet);
        assert!(!ctrl.debug_commands_allowed());
    }

    #[test]
    fn test_pause_toggle_is_independent_of_mode() {
        let mut ctrl = ModeController::new();
        ctrl.toggle_pause();
        assert!(ctrl.paused());
        ctrl.set_mode(DisplayMode::Debug);
        assert!(ctrl.paused());
        ctrl.toggle_pause();
        assert!(!ctrl.paused());
    }
}
