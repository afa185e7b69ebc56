use leptos::prelude::*;

/// Centered section title with the accent underline.
#[component]
pub fn SectionHeading(
    #[prop(into)]
    title: String,
    /// Optional lead paragraph under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="section-heading__title">{title}</h2>
            <div class="section-heading__bar"></div>
            {move || subtitle.get().map(|s| view! {
                <p class="section-heading__subtitle">{s}</p>
            })}
        </div>
    }
}
