//! Full-screen decorative backdrop behind all pages.

use leptos::prelude::*;

/// Fixed backdrop layer; the starfield itself is pure CSS.
#[component]
pub fn Background() -> impl IntoView {
    view! { <div class="background" aria-hidden="true"></div> }
}
