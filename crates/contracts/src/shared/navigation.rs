use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no element with id '{0}' on the page")]
    SectionNotFound(String),
}

/// Page capability: bring the element with the given id into view.
pub trait SectionScroller {
    fn scroll_into_view(&self, section_id: &str) -> Result<(), NavigationError>;
}

/// Mobile menu state plus section navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Closes the menu, then scrolls to `section_id`.
    ///
    /// A missing target is logged and otherwise ignored. Returns whether the
    /// scroll was issued.
    pub fn navigate_to<S>(&mut self, scroller: &S, section_id: &str) -> bool
    where
        S: SectionScroller + ?Sized,
    {
        self.close_menu();
        match scroller.scroll_into_view(section_id) {
            Ok(()) => {
                log::debug!("navigate_to: '{}'", section_id);
                true
            }
            Err(e) => {
                log::warn!("navigate_to skipped: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl SectionScroller for FakePage {
        fn scroll_into_view(&self, section_id: &str) -> Result<(), NavigationError> {
            if !self.ids.contains(&section_id) {
                return Err(NavigationError::SectionNotFound(section_id.to_string()));
            }
            self.scrolled.borrow_mut().push(section_id.to_string());
            Ok(())
        }
    }

    fn page() -> FakePage {
        FakePage {
            ids: vec!["home", "projects", "contact"],
            scrolled: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = NavigationState::new();
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let page = page();
        let mut nav = NavigationState::new();
        nav.toggle_menu();

        assert!(nav.navigate_to(&page, "projects"));
        assert!(!nav.is_menu_open());
        assert_eq!(*page.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let page = page();
        let mut nav = NavigationState::new();
        nav.toggle_menu();

        assert!(!nav.navigate_to(&page, "blog"));
        assert!(!nav.is_menu_open());
        assert!(page.scrolled.borrow().is_empty());
    }
}
