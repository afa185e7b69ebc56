use crate::layout::global_context::PageContext;
use crate::layout::Shell;
use contracts::shared::config::Config;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Page-wide view state: active section, background and mobile menu.
    provide_context(PageContext::new());

    // Email provider settings for the contact form.
    provide_context(config.email);

    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme=theme>
            <Shell />
        </ConfigProvider>
    }
}
