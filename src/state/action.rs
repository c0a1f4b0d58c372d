//! Menu actions that can be applied to a running countdown

use std::{fmt, str::FromStr};

use crate::error::Error;

/// A user-selected menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Cancel,
    Exit,
}

impl Action {
    /// All actions in menu order
    pub const ALL: [Action; 4] = [Action::Pause, Action::Resume, Action::Cancel, Action::Exit];

    /// Label shown in the menu
    pub fn label(&self) -> &'static str {
        match self {
            Action::Pause => "Pause",
            Action::Resume => "Resume",
            Action::Cancel => "Cancel",
            Action::Exit => "Exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the 1-based menu number or the label, case-insensitively
impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        if let Ok(index) = choice.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Action::ALL.get(i).copied())
                .ok_or(Error::InvalidAction);
        }

        Action::ALL
            .iter()
            .copied()
            .find(|action| action.label().eq_ignore_ascii_case(choice))
            .ok_or(Error::InvalidAction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_labels() {
        assert_eq!("1".parse::<Action>().unwrap(), Action::Pause);
        assert_eq!(" 4 ".parse::<Action>().unwrap(), Action::Exit);
        assert_eq!("resume".parse::<Action>().unwrap(), Action::Resume);
        assert_eq!("CANCEL".parse::<Action>().unwrap(), Action::Cancel);
    }

    #[test]
    fn rejects_unknown_choices() {
        for input in ["", "0", "5", "stop", "p"] {
            assert!(matches!(input.parse::<Action>(), Err(Error::InvalidAction)), "{:?}", input);
        }
    }
}
