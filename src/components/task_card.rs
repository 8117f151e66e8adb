//! Reusable card component for task list items on the project page.

use leptos::prelude::*;

/// A clickable card representing a task within a project.
#[component]
pub fn TaskCard(project_id: String, id: u64, title: String, description: String) -> impl IntoView {
    let href = format!("/project/{project_id}/task/{id}");

    view! {
        <a class="task-card" href=href>
            <h2 class="task-card__title">{title}</h2>
            <span class="task-card__description">{description}</span>
        </a>
    }
}
