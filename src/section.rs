//! Top-level page sections and the active-section state they feed.
//!
//! The closed set of section ids drives both the DOM anchors and the nav
//! highlight. The active section is published by per-section viewport
//! observers; whichever section most recently crossed the visibility
//! threshold wins, which is enough for the highlight to settle on a valid
//! section during fast scrolls.

/// Fraction of a section that must be visible before it becomes active.
pub const ACTIVE_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Work,
    About,
    Contact,
}

impl SectionId {
    /// Document order. The first entry is the initial active section.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Work,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Stable DOM id / anchor fragment.
    pub fn id_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Work => "Work",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn initial() -> Self {
        Self::ALL[0]
    }
}

/// Process-local active-section state. Wrapped in a reactive signal by the
/// UI layer; kept separate so the update rule is testable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection(SectionId);

impl ActiveSection {
    pub fn new() -> Self {
        Self(SectionId::initial())
    }

    pub fn current(&self) -> SectionId {
        self.0
    }

    /// An observer reported `section` crossing the visibility threshold.
    /// Last crossing wins unconditionally; there is no tie-break between
    /// sections reported in the same batch.
    pub fn crossed(&mut self, section: SectionId) {
        self.0 = section;
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_active_section_is_first_in_document_order() {
        assert_eq!(ActiveSection::new().current(), SectionId::Home);
        assert_eq!(SectionId::initial(), SectionId::ALL[0]);
    }

    #[test]
    fn crossing_overwrites_prior_value() {
        let mut active = ActiveSection::new();
        active.crossed(SectionId::Contact);
        active.crossed(SectionId::About);
        assert_eq!(active.current(), SectionId::About);
    }

    #[test]
    fn last_crossing_wins_regardless_of_document_order() {
        // Simultaneous crossings arrive as an ordered batch; the final
        // report decides, even if an "earlier" section is also visible.
        let mut active = ActiveSection::new();
        for section in [SectionId::Work, SectionId::Home] {
            active.crossed(section);
        }
        assert_eq!(active.current(), SectionId::Home);
    }

    #[test]
    fn ids_and_labels_are_stable() {
        let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.id_str()).collect();
        assert_eq!(ids, ["home", "work", "about", "contact"]);
        assert_eq!(SectionId::Work.label(), "Work");
    }
}
