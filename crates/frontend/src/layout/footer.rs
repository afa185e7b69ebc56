use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::domain::a001_profile::{profile, SocialKind, SocialLink};
use leptos::prelude::*;

fn icon_name(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::Github => "github",
        SocialKind::Linkedin => "linkedin",
        SocialKind::Mail => "mail",
    }
}

/// Social icon link; `mailto:` links stay in the current tab.
pub fn social_link(link: &'static SocialLink) -> impl IntoView {
    let (target, rel) = if link.opens_new_tab() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a href=link.href.as_str() target=target rel=rel class="social-link" aria-label=icon_name(link.kind)>
            {icon(icon_name(link.kind))}
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = profile();
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__socials">
                {profile.socials.iter().map(social_link).collect_view()}
            </div>
            <p class="footer__copy">
                {format!("© {} {}. All rights reserved.", year, profile.full_name())}
            </p>
        </footer>
    }
}
