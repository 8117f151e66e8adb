//! Task detail page with inline edit and delete.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::glass_card::GlassCard;
use crate::net::auth::BrowserAuthClient;
use crate::util::credentials::CredentialStore;

#[component]
pub fn TaskPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let client = expect_context::<BrowserAuthClient>();
    let params = use_params_map();
    let project_id = move || params.read().get("id").unwrap_or_default();
    let task_id = move || params.read().get("task_id").unwrap_or_default();

    let fetch_client = client.clone();
    let task = LocalResource::new(move || {
        let id = task_id();
        let username = fetch_client.store().username().unwrap_or_default();
        async move { crate::net::tasks::get_task(&id, &username).await }
    });

    let editing = RwSignal::new(false);
    let edit_title = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let save_client = client.clone();
    let save = Callback::new(move |()| {
        let new_title = edit_title.get_untracked().trim().to_owned();
        if new_title.is_empty() {
            error.set("Title is required".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let client = save_client.clone();
            let id = task_id();
            let new_description = edit_description.get_untracked();
            leptos::task::spawn_local(async move {
                let username = client.store().username().unwrap_or_default();
                match crate::net::tasks::update_task(&id, &username, &new_title, &new_description)
                    .await
                {
                    Ok(_) => {
                        let _ = editing.try_set(false);
                        let _ = error.try_set(String::new());
                        task.refetch();
                    }
                    Err(err) => {
                        let _ = error.try_set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (new_title, &save_client);
        }
    });

    let delete_client = client;
    let delete = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Delete this task? This cannot be undone.")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let client = delete_client.clone();
            let navigate = navigate.clone();
            let id = task_id();
            let back = format!("/project/{}", project_id());
            leptos::task::spawn_local(async move {
                let username = client.store().username().unwrap_or_default();
                match crate::net::tasks::delete_task(&id, &username).await {
                    Ok(()) => navigate(&back, leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        let _ = error.try_set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &delete_client;
        }
    });

    view! {
        <div class="page page--centered">
            <GlassCard>
                <Show when=move || !error.get().is_empty()>
                    <p class="form__error">{move || error.get()}</p>
                </Show>

                <Suspense fallback=move || view! { <p>"Loading task..."</p> }>
                    {move || {
                        task.get()
                            .map(|result| match result {
                                Ok(t) => {
                                    let seed_title = t.title.clone();
                                    let seed_description = t.description.clone();
                                    let start_edit = move |_| {
                                        edit_title.set(seed_title.clone());
                                        edit_description.set(seed_description.clone());
                                        editing.set(true);
                                    };
                                    view! {
                                        <Show
                                            when=move || editing.get()
                                            fallback={
                                                let t = t.clone();
                                                let start_edit = start_edit.clone();
                                                move || {
                                                    let t = t.clone();
                                                    view! {
                                                        <h2 class="page__title">{t.title}</h2>
                                                        <p class="task-page__description">
                                                            {t.description}
                                                        </p>
                                                        <div class="task-page__actions">
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click=start_edit.clone()
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| delete.run(())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    }
                                                }
                                            }
                                        >
                                            <div class="form">
                                                <label class="form__label">
                                                    "Title"
                                                    <input
                                                        class="form__input"
                                                        type="text"
                                                        prop:value=move || edit_title.get()
                                                        on:input=move |ev| {
                                                            edit_title.set(event_target_value(&ev));
                                                        }
                                                    />
                                                </label>
                                                <label class="form__label">
                                                    "Description"
                                                    <textarea
                                                        class="form__input"
                                                        rows=10
                                                        prop:value=move || edit_description.get()
                                                        on:input=move |ev| {
                                                            edit_description
                                                                .set(event_target_value(&ev));
                                                        }
                                                    ></textarea>
                                                </label>
                                                <div class="task-page__actions">
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| save.run(())
                                                    >
                                                        "Save"
                                                    </button>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| editing.set(false)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </div>
                                            </div>
                                        </Show>
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

                <a class="form__link" href=move || format!("/project/{}", project_id())>
                    "Back to project"
                </a>
            </GlassCard>
        </div>
    }
}
