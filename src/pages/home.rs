//! Home page listing the user's projects, with create and logout actions.

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::project_card::ProjectCard;
use crate::net::auth::BrowserAuthClient;
use crate::state::session::Session;
use crate::util::credentials::CredentialStore;

/// Home page: project list plus logout. Only reachable through the route
/// guard, so the session is already validated when this renders.
#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<BrowserAuthClient>();
    let session = expect_context::<Session>();

    let fetch_client = client.clone();
    let projects = LocalResource::new(move || {
        let username = session
            .username()
            .or_else(|| fetch_client.store().username())
            .unwrap_or_default();
        async move { crate::net::projects::get_projects(&username).await }
    });

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let logout_client = client;
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let client = logout_client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let username = client.store().username().unwrap_or_default();
                // Navigation runs as the post-cleanup continuation.
                client
                    .logout(&username, move || {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    })
                    .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &logout_client;
        }
    };

    view! {
        <div class="page page--centered">
            <GlassCard>
                <header class="home-page__header">
                    <h2 class="page__title">"DevTasks"</h2>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <hr class="page__divider"/>

                <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                    {move || {
                        projects
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <div class="home-page__empty">"No projects yet."</div>
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="home-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|p| {
                                                    view! {
                                                        <ProjectCard
                                                            id=p.id
                                                            name=p.name
                                                            description=p.description
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
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

                <a class="btn btn--success" href="/project/new">
                    "New Project"
                </a>
            </GlassCard>
        </div>
    }
}
