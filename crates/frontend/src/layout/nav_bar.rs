use super::global_context::use_page_context;
use crate::shared::icons::icon;
use contracts::domain::a001_profile::profile;
use contracts::shared::section::SectionId;
use leptos::prelude::*;

/// Fixed top navigation: brand, desktop links and the mobile menu.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_page_context();

    let link = move |section: SectionId, class: &'static str| {
        view! {
            <button
                class=class
                class:is-active=move || ctx.active_section() == section
                on:click=move |_| ctx.navigate_to(section)
            >
                {section.label()}
            </button>
        }
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <button class="nav__brand" on:click=move |_| ctx.navigate_to(SectionId::Home)>
                    {profile().full_name()}
                </button>
                <div class="nav__links">
                    {SectionId::all()
                        .into_iter()
                        .map(|section| link(section, "nav__link"))
                        .collect_view()}
                </div>
                <button
                    class="nav__toggle"
                    aria-label=move || if ctx.is_menu_open() { "Close menu" } else { "Open menu" }
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if ctx.is_menu_open() { icon("x") } else { icon("menu") }}
                </button>
            </div>
            <Show when=move || ctx.is_menu_open()>
                <div class="nav__mobile">
                    {SectionId::all()
                        .into_iter()
                        .map(|section| link(section, "nav__mobile-link"))
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
