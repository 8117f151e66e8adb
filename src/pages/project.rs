//! Project detail page: name, description, and the project's task list.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::glass_card::GlassCard;
use crate::components::task_card::TaskCard;
use crate::net::ApiError;
use crate::net::auth::BrowserAuthClient;
use crate::net::types::{Project, Task};
use crate::util::credentials::CredentialStore;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let client = expect_context::<BrowserAuthClient>();
    let params = use_params_map();
    let project_id = move || params.read().get("id").unwrap_or_default();

    let detail = LocalResource::new(move || {
        let id = project_id();
        let username = client.store().username().unwrap_or_default();
        async move {
            let project = crate::net::projects::get_project(&id, &username).await?;
            let tasks = crate::net::tasks::get_project_tasks(&id, &username).await?;
            Ok::<(Project, Vec<Task>), ApiError>((project, tasks))
        }
    });

    view! {
        <div class="page page--centered">
            <GlassCard>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        detail
                            .get()
                            .map(|result| match result {
                                Ok((project, tasks)) => {
                                    let new_task_href = format!(
                                        "/project/{}/task/new",
                                        project.id,
                                    );
                                    let project_id = project.id.to_string();
                                    view! {
                                        <h2 class="page__title">{project.name}</h2>
                                        <p class="project-page__description">
                                            {project.description}
                                        </p>
                                        <hr class="page__divider"/>

                                        <a class="btn btn--success" href=new_task_href>
                                            "New Task"
                                        </a>

                                        {if tasks.is_empty() {
                                            view! {
                                                <div class="project-page__empty">
                                                    "No tasks found."
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="project-page__tasks">
                                                    {tasks
                                                        .into_iter()
                                                        .map(|t| {
                                                            view! {
                                                                <TaskCard
                                                                    project_id=project_id.clone()
                                                                    id=t.id
                                                                    title=t.title
                                                                    description=t.description
                                                                />
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }}
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! { <p class="form__error">{err.to_string()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </GlassCard>
        </div>
    }
}
