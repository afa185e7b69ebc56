use super::global_context::use_page_context;
use contracts::shared::viewport::BackgroundSource;
use leptos::prelude::*;

/// Two stacked looping videos; the one not matching the current
/// background is faded out.
#[component]
pub fn VideoBackground() -> impl IntoView {
    let ctx = use_page_context();

    let layer = move |source: BackgroundSource| {
        view! {
            <div
                class="video-bg"
                class:video-bg--hidden=move || ctx.background() != source
            >
                <video class="video-bg__media" autoplay=true loop=true muted=true playsinline=true>
                    <source src=source.src() type="video/mp4" />
                    "Your browser does not support the video tag."
                </video>
                <div class="video-bg__shade"></div>
            </div>
        }
    };

    view! {
        <div class="video-bg__stack" aria-hidden="true">
            {layer(BackgroundSource::Primary)}
            {layer(BackgroundSource::Secondary)}
        </div>
    }
}
