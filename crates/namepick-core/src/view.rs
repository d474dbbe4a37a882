//! Derived view state rendered by the front ends.

use crate::constants::{PLAY_LABEL, RESET_LABEL};
use crate::selector::Selector;

/// One row of the name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name: String,
    /// Already drawn since the last reset.
    pub chosen: bool,
}

/// State of the dual-purpose spin/reset button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinButton {
    /// The group has no members.
    Hidden,
    /// Names remain to be drawn.
    Play,
    /// Every name has been drawn; pressing resets the group.
    Reset,
}

impl SpinButton {
    /// Derive the button from the group size and the number of names left.
    #[must_use]
    pub fn from_counts(total: usize, remaining: usize) -> Self {
        if total == 0 {
            Self::Hidden
        } else if remaining == 0 {
            Self::Reset
        } else {
            Self::Play
        }
    }

    /// Button text, `None` when hidden.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Hidden => None,
            Self::Play => Some(PLAY_LABEL),
            Self::Reset => Some(RESET_LABEL),
        }
    }
}

/// Snapshot of everything a front end needs to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub group: String,
    pub groups: Vec<String>,
    pub names: Vec<NameEntry>,
    pub spin_button: SpinButton,
    pub display: String,
    pub spinning: bool,
}

impl ViewState {
    /// Idle view of a selector: empty display, not spinning.
    #[must_use]
    pub fn of_selector(selector: &Selector) -> Self {
        let names: Vec<NameEntry> = selector
            .original_names()
            .iter()
            .map(|name| NameEntry {
                name: name.clone(),
                chosen: selector.is_chosen(name),
            })
            .collect();
        Self {
            group: selector.group_name().to_string(),
            groups: selector.list_groups(),
            spin_button: SpinButton::from_counts(names.len(), selector.remaining_names().len()),
            names,
            display: String::new(),
            spinning: false,
        }
    }

    /// Number of names still available to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.names.iter().filter(|n| !n.chosen).count()
    }
}
