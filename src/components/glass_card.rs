//! Frosted-glass card wrapper used by every page.

use leptos::prelude::*;

/// Translucent card centered by the page that embeds it.
#[component]
pub fn GlassCard(children: Children) -> impl IntoView {
    view! { <div class="glass-card">{children()}</div> }
}
