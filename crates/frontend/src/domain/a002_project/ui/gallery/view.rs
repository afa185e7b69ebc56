use super::view_model::ProjectGalleryViewModel;
use crate::domain::a002_project::ui::details::ProjectDetails;
use crate::shared::components::reveal_card::stagger;
use crate::shared::components::{RevealCard, SectionHeading};
use crate::shared::icons::icon;
use contracts::domain::a002_project::{Project, ProjectId};
use contracts::shared::section::SectionId;
use leptos::prelude::*;

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32, on_details: Callback<ProjectId>) -> impl IntoView {
    view! {
        <RevealCard class="project-card" delay_ms=delay_ms>
            <div class="project-card__image">
                <img src=project.image.as_str() alt=project.title.as_str() loading="lazy" />
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title.as_str()}</h3>
                <p class="project-card__description">{project.description.as_str()}</p>
                <div class="tag-row">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tag">{tech.as_str()}</span> })
                        .collect_view()}
                </div>
                <div class="project-card__actions">
                    <button class="link-button" on:click=move |_| on_details.run(project.id)>
                        "View Details"
                        {icon("external-link")}
                    </button>
                    {project.github.as_deref().map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="link-button">
                            {icon("github")}
                            "Code"
                        </a>
                    })}
                </div>
            </div>
        </RevealCard>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let vm = ProjectGalleryViewModel::new();
    let on_details = Callback::new(move |id: ProjectId| vm.open_details(id));

    view! {
        <section id=SectionId::Projects.as_str() class="section">
            <div class="section__inner">
                <SectionHeading
                    title="My Projects"
                    subtitle="A selection of the AI and computer vision work I have built"
                />
                <div class="chip-row">
                    {vm
                        .categories()
                        .into_iter()
                        .map(|category| view! {
                            <button
                                class="chip"
                                class:chip--active=move || vm.is_active(category)
                                on:click=move |_| vm.select_category(category)
                            >
                                {category}
                            </button>
                        })
                        .collect_view()}
                </div>
                <div class="project-grid">
                    {move || {
                        vm.displayed()
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| view! {
                                <ProjectCard
                                    project=project
                                    delay_ms=stagger(index)
                                    on_details=on_details
                                />
                            })
                            .collect_view()
                    }}
                </div>
                <Show when=move || vm.shows_view_more()>
                    <div class="section__more">
                        <button class="button button--primary" on:click=move |_| vm.expand()>
                            "View More Projects"
                            {icon("chevron-down")}
                        </button>
                    </div>
                </Show>
            </div>
            {move || vm.selected().map(|project| view! {
                <ProjectDetails project=project on_close=Callback::new(move |_| vm.close_details()) />
            })}
        </section>
    }
}
