//! Viewport tracking: active section and background media selection.
//!
//! The platform side (IntersectionObserver, scroll listener) reduces its
//! callbacks to [`VisibilityEvent`] and [`SectionBounds`] values; this module
//! applies them deterministically.

use super::section::SectionId;

/// Distance added to the scroll offset before matching sections.
pub const SCROLL_LOOK_AHEAD: f64 = 300.0;

/// Options handed to the platform visibility observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Hero counts as visible once 60% of it is on screen.
pub const HERO_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.6,
    root_margin: "0px",
};

/// About only intersects inside the vertical centre band of the viewport.
pub const ABOUT_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "-50% 0px -50% 0px",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedRegion {
    Hero,
    About,
}

impl ObservedRegion {
    pub fn options(&self) -> ObserverOptions {
        match self {
            ObservedRegion::Hero => HERO_OBSERVER,
            ObservedRegion::About => ABOUT_OBSERVER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEvent {
    pub region: ObservedRegion,
    pub is_intersecting: bool,
}

/// Layout box of one `<section>` element as read from the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open range check: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Looping background video layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundSource {
    Primary,
    Secondary,
}

impl BackgroundSource {
    pub fn src(&self) -> &'static str {
        match self {
            BackgroundSource::Primary => "/background1.mp4",
            BackgroundSource::Secondary => "/background2.mp4",
        }
    }
}

/// Finds the section under `scroll_y + SCROLL_LOOK_AHEAD`.
///
/// Sections are scanned in document order and the last match wins. Elements
/// whose id is not a known section are skipped.
pub fn section_at(scroll_y: f64, sections: &[SectionBounds]) -> Option<SectionId> {
    let position = scroll_y + SCROLL_LOOK_AHEAD;
    sections
        .iter()
        .filter(|bounds| bounds.contains(position))
        .filter_map(|bounds| bounds.id.parse::<SectionId>().ok())
        .last()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    active_section: SectionId,
    show_primary_background: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            show_primary_background: true,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn show_primary_background(&self) -> bool {
        self.show_primary_background
    }

    pub fn background(&self) -> BackgroundSource {
        if self.show_primary_background {
            BackgroundSource::Primary
        } else {
            BackgroundSource::Secondary
        }
    }

    /// Applies one observer callback. Returns `true` if the background changed.
    ///
    /// Hero mirrors its own visibility. About can only switch the primary
    /// background off; leaving the about region does nothing.
    pub fn apply_visibility(&mut self, event: VisibilityEvent) -> bool {
        let before = self.show_primary_background;
        match event.region {
            ObservedRegion::Hero => self.show_primary_background = event.is_intersecting,
            ObservedRegion::About => {
                if event.is_intersecting {
                    self.show_primary_background = false;
                }
            }
        }
        log::debug!(
            "{:?} visibility: {} (primary background: {})",
            event.region,
            event.is_intersecting,
            self.show_primary_background
        );
        before != self.show_primary_background
    }

    /// Applies one scroll event. Returns `true` if the active section changed.
    ///
    /// A position that matches no section keeps the previous value.
    pub fn apply_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        match section_at(scroll_y, sections) {
            Some(section) if section != self.active_section => {
                self.active_section = section;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(is_intersecting: bool) -> VisibilityEvent {
        VisibilityEvent {
            region: ObservedRegion::Hero,
            is_intersecting,
        }
    }

    fn about(is_intersecting: bool) -> VisibilityEvent {
        VisibilityEvent {
            region: ObservedRegion::About,
            is_intersecting,
        }
    }

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            // 10px gap left by layout rounding
            SectionBounds::new("projects", 1410.0, 1200.0),
            SectionBounds::new("experience", 2610.0, 900.0),
        ]
    }

    #[test]
    fn test_defaults() {
        let state = ViewportState::new();
        assert_eq!(state.active_section(), SectionId::Home);
        assert!(state.show_primary_background());
        assert_eq!(state.background().src(), "/background1.mp4");
    }

    #[test]
    fn test_hero_mirrors_its_visibility() {
        let mut state = ViewportState::new();
        assert!(state.apply_visibility(hero(false)));
        assert_eq!(state.background(), BackgroundSource::Secondary);
        assert!(state.apply_visibility(hero(true)));
        assert_eq!(state.background(), BackgroundSource::Primary);
    }

    #[test]
    fn test_about_override_is_one_way() {
        let mut state = ViewportState::new();
        state.apply_visibility(about(true));
        assert!(!state.show_primary_background());

        // leaving about never brings the primary background back
        assert!(!state.apply_visibility(about(false)));
        state.apply_visibility(about(true));
        state.apply_visibility(about(false));
        assert!(!state.show_primary_background());

        state.apply_visibility(hero(true));
        assert!(state.show_primary_background());
    }

    #[test]
    fn test_last_event_wins_within_one_cycle() {
        let mut state = ViewportState::new();
        state.apply_visibility(hero(true));
        state.apply_visibility(about(true));
        assert!(!state.show_primary_background());

        state.apply_visibility(about(true));
        state.apply_visibility(hero(true));
        assert!(state.show_primary_background());
    }

    #[test]
    fn test_scroll_uses_look_ahead() {
        let mut state = ViewportState::new();
        // 500 + 300 lands exactly on the top of "about"
        assert!(state.apply_scroll(500.0, &layout()));
        assert_eq!(state.active_section(), SectionId::About);
        assert!(!state.apply_scroll(500.0, &layout()));
    }

    #[test]
    fn test_scroll_into_gap_keeps_previous_section() {
        let mut state = ViewportState::new();
        state.apply_scroll(600.0, &layout());
        assert_eq!(state.active_section(), SectionId::About);

        // 1105 + 300 = 1405 falls between about and projects
        assert!(!state.apply_scroll(1105.0, &layout()));
        assert_eq!(state.active_section(), SectionId::About);

        // past the end of the page
        state.apply_scroll(10_000.0, &layout());
        assert_eq!(state.active_section(), SectionId::About);
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![
            SectionBounds::new("skills", 0.0, 1000.0),
            SectionBounds::new("education", 200.0, 1000.0),
        ];
        assert_eq!(section_at(100.0, &sections), Some(SectionId::Education));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let sections = vec![
            SectionBounds::new("contact", 0.0, 1000.0),
            SectionBounds::new("", 0.0, 1000.0),
        ];
        assert_eq!(section_at(0.0, &sections), Some(SectionId::Contact));
    }
}
