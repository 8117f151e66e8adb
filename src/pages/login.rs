//! Login page with username/password form.

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;

/// Login page. Submits credentials and navigates home on success.
/// Failures show inline and leave the form intact.
#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::auth::BrowserAuthClient>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            error.set("Please fill in all fields".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            pending.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match client.login(&user, &pass).await {
                    Ok(_) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        let _ = error.try_set(err.reason);
                    }
                }
                let _ = pending.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    });

    view! {
        <div class="page page--centered">
            <GlassCard>
                <h1 class="page__title">"DevTasks"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="form__error">{move || error.get()}</p>
                </Show>

                <div class="form">
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit.run(());
                                }
                            }
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit.run(());
                                }
                            }
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if pending.get() { "Logging in..." } else { "Log In" }}
                    </button>
                    <a class="form__link" href="/register">
                        "Don't have an account? Register"
                    </a>
                </div>
            </GlassCard>
        </div>
    }
}
