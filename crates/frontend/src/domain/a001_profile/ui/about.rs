use crate::layout::footer::social_link;
use crate::layout::global_context::use_page_context;
use crate::shared::components::SectionHeading;
use crate::shared::icons::icon;
use contracts::domain::a001_profile::{profile, Profile};
use contracts::shared::section::SectionId;
use leptos::html::Section;
use leptos::prelude::*;

/// Download link for the résumé; the file name contains spaces.
fn resume_href(profile: &Profile) -> String {
    format!(
        "{}/{}",
        profile.resume_dir,
        urlencoding::encode(&profile.resume_file)
    )
}

#[component]
pub fn AboutSection(section_ref: NodeRef<Section>) -> impl IntoView {
    let ctx = use_page_context();
    let profile = profile();

    view! {
        <section id=SectionId::About.as_str() class="section about" node_ref=section_ref>
            <div class="section__inner">
                <SectionHeading title="About Me" />
                <div class="about__grid">
                    <div class="about__photo">
                        <img src=profile.image.as_str() alt=profile.full_name() />
                    </div>
                    <div class="about__text">
                        <h3>{format!("I'm {}, an {}", profile.full_name(), profile.title)}</h3>
                        {profile
                            .about
                            .iter()
                            .map(|paragraph| view! { <p>{paragraph.as_str()}</p> })
                            .collect_view()}
                        <div class="about__links">
                            {profile.socials.iter().map(social_link).collect_view()}
                        </div>
                        <div class="about__actions">
                            <a
                                class="button button--primary"
                                href=resume_href(profile)
                                download=profile.resume_file.as_str()
                            >
                                {icon("download")}
                                "Download Resume"
                            </a>
                            <button
                                class="button button--secondary"
                                on:click=move |_| ctx.navigate_to(SectionId::Contact)
                            >
                                "Get in Touch"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
