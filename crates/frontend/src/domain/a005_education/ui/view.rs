use crate::shared::components::reveal_card::stagger;
use crate::shared::components::{RevealCard, SectionHeading};
use contracts::domain::a005_education::{certifications, education};
use contracts::shared::section::SectionId;
use leptos::prelude::*;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id=SectionId::Education.as_str() class="section section--tinted">
            <div class="section__inner">
                <SectionHeading title="Education" />
                <div class="education__grid">
                    {education()
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! {
                            <RevealCard class="education__card" delay_ms=stagger(index)>
                                <h3>{entry.degree.as_str()}</h3>
                                <p class="accent">{entry.institution.as_str()}</p>
                                <p class="muted">{entry.period.as_str()}</p>
                            </RevealCard>
                        })
                        .collect_view()}
                </div>
                <h3 class="education__subtitle">"Certifications"</h3>
                <ul class="certifications">
                    {certifications()
                        .iter()
                        .map(|name| view! { <li class="certifications__item">{*name}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
