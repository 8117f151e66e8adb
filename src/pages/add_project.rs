//! New-project form.

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;

#[component]
pub fn AddProjectPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::auth::BrowserAuthClient>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let project_name = name.get_untracked().trim().to_owned();
        if project_name.is_empty() {
            error.set("Project name is required".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::util::credentials::CredentialStore;

            let client = client.clone();
            let navigate = navigate.clone();
            let project_description = description.get_untracked();
            leptos::task::spawn_local(async move {
                let username = client.store().username().unwrap_or_default();
                match crate::net::projects::add_project(
                    &username,
                    &project_name,
                    &project_description,
                )
                .await
                {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        let _ = error.try_set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_name;
        }
    });

    view! {
        <div class="page page--centered">
            <GlassCard>
                <h1 class="page__title">"New Project"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="form__error">{move || error.get()}</p>
                </Show>

                <div class="form">
                    <label class="form__label">
                        "Name"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter Project Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Description"
                        <textarea
                            class="form__input"
                            rows=10
                            placeholder="Enter Project Description"
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
