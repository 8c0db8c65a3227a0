//! Gate commands and the input lines that produce them

/// A request to move the gate
///
/// Produced by the edge source, consumed exactly once by the actuator task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateCommand {
    /// Drive the gate to the open position
    Open,
    /// Drive the gate to the closed position
    Close,
}

impl GateCommand {
    /// Gate position this command drives towards (`true` = open)
    pub fn target_open(self) -> bool {
        matches!(self, GateCommand::Open)
    }

    /// Check if applying this command to a gate in the given position
    /// would move it
    pub fn changes(self, is_open: bool) -> bool {
        self.target_open() != is_open
    }
}

/// Falling-edge input lines wired to the operator buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    /// OPEN button
    Open,
    /// CLOSE button
    Close,
    /// EMERGENCY button (toggles the interlock)
    Emergency,
}

impl InputLine {
    /// The gate command carried by this line, if any
    ///
    /// The emergency line carries no command; it posts the emergency signal.
    pub fn command(self) -> Option<GateCommand> {
        match self {
            InputLine::Open => Some(GateCommand::Open),
            InputLine::Close => Some(GateCommand::Close),
            InputLine::Emergency => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_position() {
        assert!(GateCommand::Open.target_open());
        assert!(!GateCommand::Close.target_open());
    }

    #[test]
    fn test_redundant_commands_do_not_change() {
        assert!(!GateCommand::Open.changes(true));
        assert!(!GateCommand::Close.changes(false));
        assert!(GateCommand::Open.changes(false));
        assert!(GateCommand::Close.changes(true));
    }

    #[test]
    fn test_line_commands() {
        assert_eq!(InputLine::Open.command(), Some(GateCommand::Open));
        assert_eq!(InputLine::Close.command(), Some(GateCommand::Close));
        assert_eq!(InputLine::Emergency.command(), None);
    }
}
