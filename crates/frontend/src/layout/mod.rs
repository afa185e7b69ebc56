pub mod footer;
pub mod global_context;
pub mod nav_bar;
pub mod video_background;

use crate::domain::a001_profile::ui::{AboutSection, HeroSection};
use crate::domain::a002_project::ui::gallery::ProjectsSection;
use crate::domain::a003_experience::ui::ExperienceSection;
use crate::domain::a004_skill::ui::SkillsSection;
use crate::domain::a005_education::ui::EducationSection;
use crate::usecases::u501_send_contact_message::ContactSection;
use footer::Footer;
use global_context::use_page_context;
use leptos::html::Section;
use leptos::prelude::*;
use nav_bar::NavBar;
use video_background::VideoBackground;

/// Single-page layout.
///
/// ```text
/// +------------------------------------------+
/// |  NavBar (fixed)                          |
/// +------------------------------------------+
/// |  Home | About | Projects | Experience    |
/// |  Skills | Education | Contact            |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
/// The video background sits behind everything.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_page_context();
    let hero_ref = NodeRef::<Section>::new();
    let about_ref = NodeRef::<Section>::new();
    ctx.track_viewport(hero_ref, about_ref);

    view! {
        <div class="page">
            <VideoBackground />
            <NavBar />
            <main class="page__main">
                <HeroSection section_ref=hero_ref />
                <AboutSection section_ref=about_ref />
                <ProjectsSection />
                <ExperienceSection />
                <SkillsSection />
                <EducationSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
