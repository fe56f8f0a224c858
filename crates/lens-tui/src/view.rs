//! View-state controller — the five mutually exclusive stage views.
//!
//! `ViewState` names the active view; `Sections` records which of the four
//! non-idle sections is visible.  Every transition goes through
//! `Sections::enter`, which hides everything before showing the target, so
//! at most one section is visible no matter how quickly transitions fire.

/// The active stage view.  Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Preview,
    Loading,
    Results,
    Error,
}

/// Visibility flags for the four non-idle sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sections {
    pub preview: bool,
    pub loading: bool,
    pub results: bool,
    pub error: bool,
}

impl Sections {
    pub fn hide_all(&mut self) {
        *self = Self::default();
    }

    /// Transition: hide all sections, then show the one for `state`.
    pub fn enter(&mut self, state: ViewState) {
        self.hide_all();
        match state {
            ViewState::Idle => {}
            ViewState::Preview => self.preview = true,
            ViewState::Loading => self.loading = true,
            ViewState::Results => self.results = true,
            ViewState::Error => self.error = true,
        }
    }

    pub fn visible_count(&self) -> usize {
        [self.preview, self.loading, self.results, self.error]
            .iter()
            .filter(|v| **v)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_hides_everything() {
        let sections = Sections::default();
        assert_eq!(sections.visible_count(), 0);
    }

    #[test]
    fn entering_a_state_shows_exactly_its_section() {
        let mut sections = Sections::default();
        for (state, check) in [
            (ViewState::Preview, 0usize),
            (ViewState::Loading, 1),
            (ViewState::Results, 2),
            (ViewState::Error, 3),
        ] {
            sections.enter(state);
            assert_eq!(sections.visible_count(), 1, "state {:?}", state);
            let flags = [
                sections.preview,
                sections.loading,
                sections.results,
                sections.error,
            ];
            assert!(flags[check], "state {:?}", state);
        }
    }

    #[test]
    fn rapid_repeated_transitions_never_stack_sections() {
        let mut sections = Sections::default();
        for state in [
            ViewState::Preview,
            ViewState::Loading,
            ViewState::Loading,
            ViewState::Results,
            ViewState::Error,
            ViewState::Preview,
        ] {
            sections.enter(state);
            assert!(sections.visible_count() <= 1);
        }
    }

    #[test]
    fn entering_idle_hides_all() {
        let mut sections = Sections::default();
        sections.enter(ViewState::Results);
        sections.enter(ViewState::Idle);
        assert_eq!(sections.visible_count(), 0);
    }
}
