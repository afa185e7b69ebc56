//! Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `style.css`. Pass increasing
//! `delay_ms` to cards in a list for a staggered reveal:
//! ```text
//! <RevealCard delay_ms=0>   // first
//! <RevealCard delay_ms=80>  // second
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between consecutive cards of one list.
pub const STAGGER_MS: u32 = 80;

#[component]
pub fn RevealCard(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.4s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

/// Delay for the card at `index` in a staggered list.
pub fn stagger(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_MS)
}
