#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Picking and arranging words
    Composing,
    /// Typing into the command deck
    Command,
    Help,
    /// The answer has been handed to the form
    Submitted,
    Quit,
}

impl AppMode {
    /// Modes that end the event loop
    pub fn is_final(self) -> bool {
        matches!(self, AppMode::Submitted | AppMode::Quit)
    }
}

/// Which strip keyboard input acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Pool,
    Answer,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Pool => Focus::Answer,
            Focus::Answer => Focus::Pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_modes() {
        assert!(AppMode::Submitted.is_final());
        assert!(AppMode::Quit.is_final());
        assert!(!AppMode::Composing.is_final());
        assert!(!AppMode::Command.is_final());
        assert!(!AppMode::Help.is_final());
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::default(), Focus::Pool);
        assert_eq!(Focus::Pool.toggled(), Focus::Answer);
        assert_eq!(Focus::Answer.toggled(), Focus::Pool);
    }
}
