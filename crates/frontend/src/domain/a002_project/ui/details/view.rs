use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_project::Project;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Modal with the full description of one project.
#[component]
pub fn ProjectDetails(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            {project.github.as_deref().map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="button button--secondary">
                    {icon("github")}
                    "View Code on GitHub"
                </a>
            })}
            <button class="button button--primary" on:click=move |_| on_close.run(())>
                "Close"
            </button>
        }
        .into_any()
    });

    view! {
        <Modal title=project.title.as_str() on_close=on_close footer=footer>
            <img class="modal__image" src=project.image.as_str() alt=project.title.as_str() />
            <span class="modal__category">{project.category.as_str()}</span>
            <p class="modal__description">{project.description.as_str()}</p>
            <h4>"Technologies Used"</h4>
            <div class="tag-row">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {tech.as_str()}
                        </Badge>
                    })
                    .collect_view()}
            </div>
        </Modal>
    }
}
