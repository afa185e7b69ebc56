use crate::shared::components::reveal_card::stagger;
use crate::shared::components::{RevealCard, SectionHeading};
use contracts::domain::a003_experience::{experiences, Experience, Fragment};
use contracts::shared::section::SectionId;
use leptos::prelude::*;

fn render_fragments(fragments: &'static [Fragment]) -> impl IntoView {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => text.as_str().into_any(),
            Fragment::Highlight(text) => view! {
                <span class="accent">{text.as_str()}</span>
            }
            .into_any(),
        })
        .collect_view()
}

fn timeline_item(index: usize, experience: &'static Experience) -> impl IntoView {
    view! {
        <div class="timeline__item">
            <div class="timeline__marker"></div>
            <RevealCard class="timeline__card" delay_ms=stagger(index)>
                <div class="timeline__header">
                    <div>
                        <h3 class="timeline__position">{experience.position.as_str()}</h3>
                        <h4 class="timeline__company accent">{experience.company.as_str()}</h4>
                    </div>
                    <span class="timeline__period">{experience.period.as_str()}</span>
                </div>
                <ul class="timeline__highlights">
                    {experience
                        .highlights
                        .iter()
                        .map(|bullet| view! { <li>{render_fragments(bullet)}</li> })
                        .collect_view()}
                </ul>
            </RevealCard>
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="section section--tinted">
            <div class="section__inner">
                <SectionHeading title="Work Experience" />
                <div class="timeline">
                    {experiences()
                        .iter()
                        .enumerate()
                        .map(|(index, experience)| timeline_item(index, experience))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
