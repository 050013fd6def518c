//! Operator target selection over the active track set.

/// Discrete operator command, produced asynchronously by an input-capture
/// collaborator and consumed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cycle to the next active track id
    Next,
    /// Cycle to the previous active track id
    Prev,
    /// Flip the binary toggle state
    Toggle,
    /// Terminate after the current frame
    Quit,
}

/// Selection state: at most one selected track id plus a binary toggle.
///
/// `Next`/`Prev` cycle through the sorted ascending list of active ids with
/// wrap-around. A selected id that has expired is kept until the next
/// command, which recovers to the first active id; the publisher simply
/// emits nothing for a stale selection in the meantime.
#[derive(Debug, Clone, Default)]
pub struct TargetSelector {
    selected: Option<u64>,
    toggle_state: bool,
}

impl TargetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected track id, if any.
    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// The binary toggle state.
    pub fn toggle_state(&self) -> bool {
        self.toggle_state
    }

    /// Apply one command against the sorted ascending active id list.
    ///
    /// `Quit` is not a selection transition and is ignored here; the owning
    /// pipeline polls it at the frame boundary.
    pub fn apply(&mut self, command: Command, active_ids: &[u64]) {
        match command {
            Command::Toggle => self.toggle_state = !self.toggle_state,
            Command::Next | Command::Prev => self.cycle(command, active_ids),
            Command::Quit => {}
        }
    }

    fn cycle(&mut self, command: Command, active_ids: &[u64]) {
        if active_ids.is_empty() {
            self.selected = None;
            return;
        }

        let position = self
            .selected
            .and_then(|id| active_ids.iter().position(|&a| a == id));

        self.selected = Some(match position {
            // Nothing selected, or the selection expired: start over.
            None => active_ids[0],
            Some(idx) => {
                let n = active_ids.len();
                let next = match command {
                    Command::Next => (idx + 1) % n,
                    _ => (idx + n - 1) % n,
                };
                active_ids[next]
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycling_closure() {
        let ids = vec![2, 5, 9];
        let mut sel = TargetSelector::new();
        sel.apply(Command::Next, &ids);
        let start = sel.selected();

        for _ in 0..ids.len() {
            sel.apply(Command::Next, &ids);
        }
        assert_eq!(sel.selected(), start);

        sel.apply(Command::Next, &ids);
        sel.apply(Command::Prev, &ids);
        assert_eq!(sel.selected(), start);
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let ids = vec![1, 4, 7];
        let mut sel = TargetSelector::new();
        sel.apply(Command::Next, &ids); // 1
        sel.apply(Command::Prev, &ids);
        assert_eq!(sel.selected(), Some(7));
    }

    #[test]
    fn test_recovery_after_expiry() {
        let mut sel = TargetSelector::new();
        sel.apply(Command::Next, &[3, 8]);
        sel.apply(Command::Next, &[3, 8]);
        assert_eq!(sel.selected(), Some(8));

        // Track 8 expired; selection is stale until the next command.
        assert_eq!(sel.selected(), Some(8));
        sel.apply(Command::Next, &[3, 12]);
        assert_eq!(sel.selected(), Some(3));
    }

    #[test]
    fn test_empty_set_clears_selection() {
        let mut sel = TargetSelector::new();
        sel.apply(Command::Next, &[6]);
        assert_eq!(sel.selected(), Some(6));
        sel.apply(Command::Next, &[]);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_toggle_independent_of_selection() {
        let mut sel = TargetSelector::new();
        assert!(!sel.toggle_state());
        sel.apply(Command::Toggle, &[1, 2]);
        assert!(sel.toggle_state());
        assert_eq!(sel.selected(), None);
        sel.apply(Command::Toggle, &[1, 2]);
        assert!(!sel.toggle_state());
    }

    #[test]
    fn test_quit_is_not_a_transition() {
        let mut sel = TargetSelector::new();
        sel.apply(Command::Next, &[1]);
        sel.apply(Command::Quit, &[1]);
        assert_eq!(sel.selected(), Some(1));
    }
}
