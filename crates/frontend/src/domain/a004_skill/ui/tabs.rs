use crate::shared::components::SectionHeading;
use contracts::domain::a004_skill::{skill_categories, Skill, SkillTabs};
use contracts::shared::section::SectionId;
use leptos::prelude::*;

fn skill_bar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="skill">
            <div class="skill__header">
                <span>{skill.name.as_str()}</span>
                <span class="accent">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill__track">
                <div class="skill__bar" style:width=skill.bar_width()></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let categories = skill_categories();
    let tabs = RwSignal::new(SkillTabs::new(categories.len()));

    view! {
        <section id=SectionId::Skills.as_str() class="section">
            <div class="section__inner">
                <SectionHeading title="Skills" />
                <div class="chip-row" role="tablist">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! {
                            <button
                                class="chip"
                                role="tab"
                                class:chip--active=move || tabs.with(|t| t.active() == index)
                                on:click=move |_| {
                                    tabs.maybe_update(|t| t.select(index));
                                }
                            >
                                {category.name.as_str()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <div class="skills__grid">
                    {move || {
                        tabs.with(|t| t.active_category(categories))
                            .map(|category| category.skills.iter().map(skill_bar).collect_view())
                    }}
                </div>
            </div>
        </section>
    }
}
