//! Reusable card component for project list items on the home page.

use leptos::prelude::*;

/// A clickable card representing a project in the home list.
#[component]
pub fn ProjectCard(id: u64, name: String, description: String) -> impl IntoView {
    let href = format!("/project/{id}");

    view! {
        <a class="project-card" href=href>
            <h2 class="project-card__name">{name}</h2>
            <span class="project-card__description">{description}</span>
        </a>
    }
}
