//! Tab and disclosure state for the work gallery.
//!
//! At most one card may be expanded across the whole page, even though each
//! tab renders its own grid. Modeling the disclosure as a single tagged
//! union (rather than one nullable slot per tab) makes that exclusivity
//! hold by construction.

/// The two work grids. The first tab is active on page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Digital,
    Handmade,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Digital, Tab::Handmade];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Digital => "Design",
            Tab::Handmade => "Interactive Media & Fabrication",
        }
    }

    pub fn initial() -> Self {
        Self::ALL[0]
    }
}

/// Which card's detail panel is expanded, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    Closed,
    Open { tab: Tab, entry: &'static str },
}

/// The work section's whole interactive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkState {
    tab: Tab,
    disclosure: Disclosure,
}

impl WorkState {
    pub fn new() -> Self {
        Self {
            tab: Tab::initial(),
            disclosure: Disclosure::Closed,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch grids. Closes whatever was open, in either tab.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.disclosure = Disclosure::Closed;
    }

    /// Toggle a card's detail panel. Re-clicking the open card collapses
    /// it; opening a different card (in any tab) replaces the disclosure.
    pub fn toggle_entry(&mut self, tab: Tab, entry: &'static str) {
        self.disclosure = if self.is_open(tab, entry) {
            Disclosure::Closed
        } else {
            Disclosure::Open { tab, entry }
        };
    }

    pub fn is_open(&self, tab: Tab, entry: &str) -> bool {
        matches!(self.disclosure, Disclosure::Open { tab: t, entry: e } if t == tab && e == entry)
    }

    /// The expanded entry in `tab`, if that tab owns the disclosure.
    pub fn open_entry(&self, tab: Tab) -> Option<&'static str> {
        match self.disclosure {
            Disclosure::Open { tab: t, entry } if t == tab => Some(entry),
            _ => None,
        }
    }
}

impl Default for WorkState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(state: &WorkState) -> usize {
        Tab::ALL
            .iter()
            .filter(|t| state.open_entry(**t).is_some())
            .count()
    }

    #[test]
    fn initial_state_is_closed_on_first_tab() {
        let state = WorkState::new();
        assert_eq!(state.tab(), Tab::Digital);
        assert_eq!(state.open_entry(Tab::Digital), None);
        assert_eq!(state.open_entry(Tab::Handmade), None);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut state = WorkState::new();
        let before = state;
        state.toggle_entry(Tab::Digital, "3d-modeling");
        state.toggle_entry(Tab::Digital, "3d-modeling");
        assert_eq!(state, before);
    }

    #[test]
    fn opening_a_second_card_replaces_the_first() {
        let mut state = WorkState::new();
        state.toggle_entry(Tab::Digital, "digital-media");
        assert!(state.is_open(Tab::Digital, "digital-media"));
        state.toggle_entry(Tab::Digital, "camera-work");
        assert!(!state.is_open(Tab::Digital, "digital-media"));
        assert!(state.is_open(Tab::Digital, "camera-work"));
    }

    #[test]
    fn opening_in_one_tab_closes_the_other() {
        let mut state = WorkState::new();
        state.toggle_entry(Tab::Digital, "3d-modeling");
        state.toggle_entry(Tab::Handmade, "sculptures");
        assert_eq!(state.open_entry(Tab::Digital), None);
        assert_eq!(state.open_entry(Tab::Handmade), Some("sculptures"));
    }

    #[test]
    fn at_most_one_disclosure_after_any_toggle_sequence() {
        let mut state = WorkState::new();
        let clicks = [
            (Tab::Digital, "3d-modeling"),
            (Tab::Handmade, "programming"),
            (Tab::Handmade, "programming"),
            (Tab::Digital, "camera-work"),
            (Tab::Handmade, "3d-models"),
            (Tab::Digital, "camera-work"),
        ];
        for (tab, entry) in clicks {
            state.toggle_entry(tab, entry);
            assert!(open_count(&state) <= 1);
        }
    }

    #[test]
    fn tab_switch_clears_disclosures() {
        let mut state = WorkState::new();
        state.toggle_entry(Tab::Digital, "3d-modeling");
        state.select_tab(Tab::Handmade);
        assert_eq!(state.tab(), Tab::Handmade);
        assert_eq!(state.open_entry(Tab::Digital), None);
        assert_eq!(state.open_entry(Tab::Handmade), None);
    }

    #[test]
    fn reselecting_the_active_tab_still_closes_panels() {
        let mut state = WorkState::new();
        state.toggle_entry(Tab::Digital, "digital-media");
        state.select_tab(Tab::Digital);
        assert_eq!(state.open_entry(Tab::Digital), None);
    }
}
