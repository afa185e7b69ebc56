use contracts::domain::a002_project::{projects, CatalogFilter, Project, ProjectId};
use leptos::prelude::*;

/// ViewModel for the projects section
///
/// Derived values are memoized: the grid only re-renders when its list
/// changes, not when the overlay opens or closes.
#[derive(Clone, Copy)]
pub struct ProjectGalleryViewModel {
    pub filter: RwSignal<CatalogFilter<'static>>,
    displayed: Memo<Vec<&'static Project>>,
    shows_view_more: Memo<bool>,
    selected: Memo<Option<&'static Project>>,
}

impl ProjectGalleryViewModel {
    pub fn new() -> Self {
        let filter = RwSignal::new(CatalogFilter::new(projects()));
        Self {
            filter,
            displayed: Memo::new(move |_| filter.with(|f| f.displayed())),
            shows_view_more: Memo::new(move |_| filter.with(|f| f.shows_view_more())),
            selected: Memo::new(move |_| filter.with(|f| f.selected())),
        }
    }

    /// "All" followed by every category in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.filter.with_untracked(|f| f.categories())
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.filter.with(|f| f.active_category() == category)
    }

    pub fn displayed(&self) -> Vec<&'static Project> {
        self.displayed.get()
    }

    pub fn shows_view_more(&self) -> bool {
        self.shows_view_more.get()
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected.get()
    }

    // Commands

    pub fn select_category(&self, category: &str) {
        self.filter.update(|f| {
            if let Err(e) = f.set_category(category) {
                log::warn!("{}", e);
            }
        });
    }

    pub fn expand(&self) {
        self.filter.update(|f| f.set_show_all(true));
    }

    pub fn open_details(&self, id: ProjectId) {
        self.filter.update(|f| {
            if let Err(e) = f.select_project(Some(id)) {
                log::warn!("{}", e);
            }
        });
    }

    pub fn close_details(&self) {
        self.filter.update(|f| {
            _ = f.select_project(None);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_opening_details_keeps_grid() {
        let owner = Owner::new();
        owner.set();

        let vm = ProjectGalleryViewModel::new();
        let renders = Arc::new(AtomicUsize::new(0));
        let grid = {
            let renders = renders.clone();
            Memo::new(move |_| {
                renders.fetch_add(1, Ordering::SeqCst);
                vm.displayed().len()
            })
        };
        assert_eq!(grid.get(), 6);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        let first = vm.displayed()[0].id;
        vm.open_details(first);
        assert_eq!(vm.selected().map(|p| p.id), Some(first));
        grid.get();
        vm.close_details();
        assert!(vm.selected().is_none());
        grid.get();
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        vm.select_category("AI Healthcare");
        grid.get();
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}
