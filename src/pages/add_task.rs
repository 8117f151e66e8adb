//! New-task form for a project.

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;

#[component]
pub fn AddTaskPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::auth::BrowserAuthClient>();
    #[cfg(feature = "hydrate")]
    let params = leptos_router::hooks::use_params_map();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let task_title = title.get_untracked().trim().to_owned();
        if task_title.is_empty() {
            error.set("Task title is required".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::util::credentials::CredentialStore;

            let client = client.clone();
            let navigate = navigate.clone();
            let id = params.read_untracked().get("id").unwrap_or_default();
            let task_description = description.get_untracked();
            leptos::task::spawn_local(async move {
                let username = client.store().username().unwrap_or_default();
                match crate::net::tasks::add_task(&username, &id, &task_title, &task_description)
                    .await
                {
                    Ok(_) => navigate(
                        &format!("/project/{id}"),
                        leptos_router::NavigateOptions::default(),
                    ),
                    Err(err) => {
                        let _ = error.try_set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task_title;
        }
    });

    view! {
        <div class="page page--centered">
            <GlassCard>
                <h1 class="page__title">"New Task"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="form__error">{move || error.get()}</p>
                </Show>

                <div class="form">
                    <label class="form__label">
                        "Title"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter Task Title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Description"
                        <textarea
                            class="form__input"
                            rows=10
                            placeholder="Enter Task Description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--success" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </GlassCard>
        </div>
    }
}
