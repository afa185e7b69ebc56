use crate::layout::global_context::use_page_context;
use crate::shared::icons::icon;
use contracts::domain::a001_profile::profile;
use contracts::shared::section::SectionId;
use leptos::html::Section;
use leptos::prelude::*;

#[component]
pub fn HeroSection(section_ref: NodeRef<Section>) -> impl IntoView {
    let ctx = use_page_context();
    let profile = profile();

    view! {
        <section id=SectionId::Home.as_str() class="hero" node_ref=section_ref>
            <div class="hero__content">
                <h1 class="hero__name">
                    {profile.first_name.as_str()}
                    " "
                    <span class="accent">{profile.last_name.as_str()}</span>
                </h1>
                <h2 class="hero__title">{profile.title.as_str()}</h2>
                <p class="hero__tagline">{profile.tagline.as_str()}</p>
                <div class="hero__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| ctx.navigate_to(SectionId::Projects)
                    >
                        "View Projects"
                        {icon("chevron-down")}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| ctx.navigate_to(SectionId::Contact)
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}
