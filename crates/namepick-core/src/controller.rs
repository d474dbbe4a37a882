//! Controller: Idle/Spinning state machine over the active group.
//!
//! Front ends translate user input into controller calls and render
//! [`Controller::view`]. Time is always passed in, so the controller never
//! blocks and can be driven by any event loop.

use std::time::Instant;

use crate::animator::{AnimationEvent, Animator, SpinTiming};
use crate::constants::RESULT_SUFFIX;
use crate::error::PickerError;
use crate::group::parse_names;
use crate::selector::Selector;
use crate::view::ViewState;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
}

/// Result of pressing the spin/reset button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    /// The animation started.
    Started,
    /// Every name had been drawn; the group was reset instead.
    Reset,
    /// Nothing to do: already spinning or the group is empty.
    Ignored,
}

/// Routes user intents to the selector and animator.
pub struct Controller {
    selector: Selector,
    animator: Animator,
    display: String,
    last_pick: Option<String>,
}

impl Controller {
    #[must_use]
    pub fn new(selector: Selector, timing: SpinTiming) -> Self {
        Self {
            selector,
            animator: Animator::new(timing),
            display: String::new(),
            last_pick: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.animator.is_spinning() {
            Phase::Spinning
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Text currently shown in the result display.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Name drawn by the most recent completed spin.
    #[must_use]
    pub fn last_pick(&self) -> Option<&str> {
        self.last_pick.as_deref()
    }

    /// Instant of the next animation event, if spinning.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.animator.next_deadline()
    }

    /// Spin/reset button pressed.
    pub fn handle_spin(&mut self, now: Instant) -> SpinOutcome {
        if self.animator.is_spinning() {
            tracing::debug!("spin ignored: already spinning");
            return SpinOutcome::Ignored;
        }
        if !self.selector.has_names_remaining() {
            if self.selector.original_names().is_empty() {
                return SpinOutcome::Ignored;
            }
            self.selector.reset();
            self.display.clear();
            tracing::debug!(group = self.selector.group_name(), "group reset");
            return SpinOutcome::Reset;
        }
        match self.animator.spin(self.selector.remaining_names(), now) {
            Ok(()) => SpinOutcome::Started,
            Err(_) => SpinOutcome::Ignored,
        }
    }

    /// Advance the animation; returns the drawn name when a spin completes.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        match self.animator.poll(now)? {
            AnimationEvent::Frame(name) => {
                self.display = name;
                None
            }
            AnimationEvent::Finished => {
                let picked = self.selector.choose_name()?;
                self.display = format!("{picked} {RESULT_SUFFIX}");
                self.last_pick = Some(picked.clone());
                Some(picked)
            }
        }
    }

    /// Add one name, or several when the input is comma separated.
    ///
    /// Returns how many names were actually added.
    pub fn handle_add_name(&mut self, input: &str) -> Result<usize, PickerError> {
        let names = parse_names(input);
        if names.is_empty() {
            return Ok(0);
        }
        self.interrupt();
        let mut added = 0;
        for name in &names {
            if self.selector.add_name(name)? {
                added += 1;
            }
        }
        tracing::debug!(added, ignored = names.len() - added, "names added");
        Ok(added)
    }

    /// Remove every name from the active group.
    pub fn handle_clear(&mut self) -> Result<(), PickerError> {
        self.interrupt();
        self.selector.clear()
    }

    /// Remove a single name from the active group.
    pub fn remove_name(&mut self, name: &str) -> Result<bool, PickerError> {
        self.interrupt();
        self.selector.remove_name(name)
    }

    /// Activate another group, creating it if it does not exist.
    pub fn switch_group(&mut self, name: &str) -> Result<(), PickerError> {
        self.interrupt();
        self.selector.load_group(name)?;
        self.display.clear();
        self.last_pick = None;
        Ok(())
    }

    /// Create a new group and make it active.
    pub fn create_group(&mut self, name: &str) -> Result<(), PickerError> {
        let name = self.selector.create_group(name)?;
        self.switch_group(&name)
    }

    /// Rename the active group.
    pub fn rename_group(&mut self, new_name: &str) -> Result<(), PickerError> {
        let current = self.selector.group_name().to_string();
        self.selector.rename_group(&current, new_name)?;
        Ok(())
    }

    /// Delete a group; deleting the active one activates another.
    pub fn delete_group(&mut self, name: &str) -> Result<(), PickerError> {
        let active = self.selector.group_name() == name;
        if active {
            self.interrupt();
        }
        self.selector.delete_group(name)?;
        if active {
            self.display.clear();
            self.last_pick = None;
        }
        Ok(())
    }

    /// Derived state for rendering.
    #[must_use]
    pub fn view(&self) -> ViewState {
        ViewState {
            display: self.display.clone(),
            spinning: self.animator.is_spinning(),
            ..ViewState::of_selector(&self.selector)
        }
    }

    /// Cancel a running spin before the group changes under it.
    fn interrupt(&mut self) {
        if self.animator.cancel() {
            self.display.clear();
            tracing::debug!("spin interrupted by group change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SPIN_MS, PLAY_LABEL, RESET_LABEL};
    use crate::storage::MemoryStore;
    use crate::view::SpinButton;
    use std::time::Duration;

    fn controller(names: &str) -> (Controller, MemoryStore) {
        let store = MemoryStore::new();
        let selector = Selector::new(Box::new(store.clone())).with_seed(3);
        let mut controller = Controller::new(selector, SpinTiming::default());
        controller.handle_add_name(names).unwrap();
        (controller, store)
    }

    fn finish_spin(controller: &mut Controller, start: Instant) -> Option<String> {
        controller.tick(start + Duration::from_millis(DEFAULT_SPIN_MS))
    }

    #[test]
    fn add_comma_separated() {
        let (controller, _store) = controller(" A, B ,, C ");
        assert_eq!(controller.selector().original_names(), ["A", "B", "C"]);
    }

    #[test]
    fn add_reports_count() {
        let (mut controller, _store) = controller("A");
        assert_eq!(controller.handle_add_name("A, B").unwrap(), 1);
        assert_eq!(controller.handle_add_name("   ").unwrap(), 0);
    }

    #[test]
    fn spin_then_draw() {
        let (mut controller, _store) = controller("A, B");
        let start = Instant::now();
        assert_eq!(controller.handle_spin(start), SpinOutcome::Started);
        assert_eq!(controller.phase(), Phase::Spinning);

        let picked = finish_spin(&mut controller, start).unwrap();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.display(), format!("{picked} {RESULT_SUFFIX}"));
        assert_eq!(controller.last_pick(), Some(picked.as_str()));
        assert_eq!(controller.selector().remaining_names().len(), 1);
    }

    #[test]
    fn frames_update_display() {
        let (mut controller, _store) = controller("A, B");
        let start = Instant::now();
        controller.handle_spin(start);
        // Two names: 350ms per tick.
        assert_eq!(controller.tick(start + Duration::from_millis(350)), None);
        assert_eq!(controller.display(), "A");
        controller.tick(start + Duration::from_millis(700));
        assert_eq!(controller.display(), "B");
    }

    #[test]
    fn spin_while_spinning_is_ignored() {
        let (mut controller, _store) = controller("A, B, C");
        let start = Instant::now();
        controller.handle_spin(start);
        assert_eq!(controller.handle_spin(start), SpinOutcome::Ignored);
        assert!(finish_spin(&mut controller, start).is_some());
        assert_eq!(controller.selector().remaining_names().len(), 2);
    }

    #[test]
    fn exhausted_group_resets_without_animation() {
        let (mut controller, _store) = controller("A");
        let start = Instant::now();
        controller.handle_spin(start);
        assert_eq!(finish_spin(&mut controller, start).as_deref(), Some("A"));
        assert_eq!(controller.view().spin_button.label(), Some(RESET_LABEL));

        assert_eq!(controller.handle_spin(start), SpinOutcome::Reset);
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.display(), "");
        assert_eq!(controller.view().spin_button.label(), Some(PLAY_LABEL));
    }

    #[test]
    fn empty_group_ignores_spin() {
        let (mut controller, _store) = controller("");
        assert_eq!(controller.handle_spin(Instant::now()), SpinOutcome::Ignored);
        assert_eq!(controller.view().spin_button, SpinButton::Hidden);
    }

    #[test]
    fn mutation_cancels_spin() {
        let (mut controller, _store) = controller("A, B");
        let start = Instant::now();
        controller.handle_spin(start);
        controller.handle_add_name("C").unwrap();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(finish_spin(&mut controller, start), None);
        assert_eq!(controller.selector().remaining_names().len(), 3);
    }

    #[test]
    fn view_marks_chosen_names() {
        let (mut controller, _store) = controller("A, B, C");
        let start = Instant::now();
        controller.handle_spin(start);
        let picked = finish_spin(&mut controller, start).unwrap();
        let view = controller.view();
        assert_eq!(view.names.len(), 3);
        assert_eq!(view.remaining(), 2);
        for entry in &view.names {
            assert_eq!(entry.chosen, entry.name == picked);
        }
    }

    #[test]
    fn clear_and_remove() {
        let (mut controller, store) = controller("A, B, C");
        assert!(controller.remove_name("B").unwrap());
        assert_eq!(controller.selector().original_names(), ["A", "C"]);
        controller.handle_clear().unwrap();
        assert!(controller.view().names.is_empty());
        assert!(store.snapshot()[controller.view().group.as_str()].is_empty());
    }

    #[test]
    fn group_lifecycle() {
        let (mut controller, _store) = controller("A");
        controller.create_group("Team").unwrap();
        assert_eq!(controller.view().group, "Team");
        controller.handle_add_name("X, Y").unwrap();

        controller.rename_group("Crew").unwrap();
        assert_eq!(controller.view().groups, ["Crew", "Default"]);

        controller.switch_group("Default").unwrap();
        assert_eq!(controller.selector().original_names(), ["A"]);

        controller.delete_group("Crew").unwrap();
        assert_eq!(controller.view().groups, ["Default"]);
        assert_eq!(controller.view().group, "Default");
    }

    #[test]
    fn switching_clears_display() {
        let (mut controller, _store) = controller("A");
        let start = Instant::now();
        controller.handle_spin(start);
        finish_spin(&mut controller, start);
        assert!(!controller.display().is_empty());
        controller.switch_group("Other").unwrap();
        assert_eq!(controller.display(), "");
        assert_eq!(controller.last_pick(), None);
    }

    #[test]
    fn deleting_other_group_keeps_spin() {
        let (mut controller, _store) = controller("A, B");
        controller.create_group("Team").unwrap();
        controller.switch_group("Default").unwrap();
        let start = Instant::now();
        controller.handle_spin(start);
        controller.delete_group("Team").unwrap();
        assert_eq!(controller.phase(), Phase::Spinning);
    }
}
