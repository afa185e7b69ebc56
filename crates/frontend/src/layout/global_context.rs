use crate::shared::dom::{scroll_y, section_bounds, DomScroller, VisibilityObserver};
use contracts::shared::navigation::NavigationState;
use contracts::shared::section::SectionId;
use contracts::shared::viewport::{BackgroundSource, ObservedRegion, ViewportState, VisibilityEvent};
use leptos::html::Section;
use leptos::prelude::*;

/// Page-wide view state shared through context.
///
/// `viewport` is written only by the observers and the scroll listener,
/// `navigation` only by the nav bar and section buttons.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub viewport: RwSignal<ViewportState>,
    pub navigation: RwSignal<NavigationState>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            viewport: RwSignal::new(ViewportState::new()),
            navigation: RwSignal::new(NavigationState::new()),
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.viewport.with(|v| v.active_section())
    }

    pub fn background(&self) -> BackgroundSource {
        self.viewport.with(|v| v.background())
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigation.with(|n| n.is_menu_open())
    }

    pub fn toggle_menu(&self) {
        self.navigation.update(|n| n.toggle_menu());
    }

    /// Closes the mobile menu and smooth-scrolls to the section.
    pub fn navigate_to(&self, section: SectionId) {
        self.navigate_to_id(section.as_str());
    }

    pub fn navigate_to_id(&self, section_id: &str) {
        self.navigation.update(|n| {
            n.navigate_to(&DomScroller, section_id);
        });
    }

    /// Wires the hero/about visibility observers and the window scroll
    /// listener into `viewport`. Everything is released when the owner
    /// is disposed.
    pub fn track_viewport(&self, hero_ref: NodeRef<Section>, about_ref: NodeRef<Section>) {
        let viewport = self.viewport;
        let observers = StoredValue::new_local(Vec::<VisibilityObserver>::new());

        Effect::new(move |_| {
            let (Some(hero), Some(about)) = (hero_ref.get(), about_ref.get()) else {
                return;
            };
            observers.update_value(|list| {
                list.drain(..).for_each(|o| o.disconnect());
                for (region, element) in [(ObservedRegion::Hero, hero), (ObservedRegion::About, about)] {
                    let observed = VisibilityObserver::observe(&element, region.options(), move |is_intersecting| {
                        viewport.maybe_update(|v| {
                            v.apply_visibility(VisibilityEvent {
                                region,
                                is_intersecting,
                            })
                        });
                    });
                    match observed {
                        Ok(observer) => list.push(observer),
                        Err(e) => log::error!("Failed to observe {:?}: {:?}", region, e),
                    }
                }
            });
        });

        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let bounds = section_bounds();
            viewport.maybe_update(|v| v.apply_scroll(scroll_y(), &bounds));
        });

        on_cleanup(move || {
            scroll_handle.remove();
            observers.try_update_value(|list| list.drain(..).for_each(|o| o.disconnect()));
        });
    }
}

pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext not provided")
}
