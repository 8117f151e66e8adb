//! Route guard deciding whether a navigation target may render.
//!
//! The guard renders from the shared session state, which only ever
//! reflects *completed* validation checks. While no check has completed it
//! shows a neutral placeholder, never protected content and never a
//! redirect, so there is no flicker toward `/login` on a slow first check.
//! Once a check rejects the session, protected destinations redirect to the
//! login entry point while public ones still render.
//!
//! Checks run on mount, on every navigation, and optionally on a fixed
//! interval. An in-flight flag keeps at most one validation outstanding per
//! guard instance, and a cancellation flag set on cleanup stops the polling
//! task so a torn-down guard never spawns further checks.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::{Session, SessionStatus};

/// What the guard renders for a given session state and destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// No completed check yet: show the loading placeholder.
    Wait,
    /// Render the wrapped content.
    Render,
    /// Protected destination without a session: go to the login page.
    RedirectToLogin,
}

/// Routes reachable without a session.
pub fn is_public_path(path: &str) -> bool {
    matches!(path, "/login" | "/register")
}

/// Render policy for the guard.
pub fn decide(status: SessionStatus, public_route: bool) -> GuardDecision {
    match status {
        SessionStatus::Unknown => GuardDecision::Wait,
        SessionStatus::Authenticated => GuardDecision::Render,
        SessionStatus::Unauthenticated if public_route => GuardDecision::Render,
        SessionStatus::Unauthenticated => GuardDecision::RedirectToLogin,
    }
}

/// Wraps routed content and gates it on the session state.
#[component]
pub fn RouteGuard(
    /// Re-validation cadence. `None` checks only on mount and navigation.
    #[prop(optional)]
    poll_interval: Option<Duration>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    #[cfg(feature = "hydrate")]
    start_checks(poll_interval);
    #[cfg(not(feature = "hydrate"))]
    let _ = poll_interval;

    let decision = move || decide(session.status(), is_public_path(&location.pathname.get()));

    view! {
        {move || match decision() {
            GuardDecision::Wait => view! {
                <div class="route-guard__checking">
                    <p>"Loading..."</p>
                </div>
            }
                .into_any(),
            GuardDecision::Render => children().into_any(),
            GuardDecision::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
        }}
    }
}

/// Spawn the validation machinery for one guard instance.
#[cfg(feature = "hydrate")]
fn start_checks(poll_interval: Option<Duration>) {
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::net::auth::BrowserAuthClient;
    use crate::util::credentials::CredentialStore;

    let client = expect_context::<BrowserAuthClient>();
    let location = use_location();
    let in_flight = Arc::new(AtomicBool::new(false));
    let cancelled = Arc::new(AtomicBool::new(false));

    on_cleanup({
        let cancelled = Arc::clone(&cancelled);
        move || cancelled.store(true, Ordering::Relaxed)
    });

    // At most one outstanding validation per guard instance.
    let run_check: Rc<dyn Fn()> = Rc::new({
        let cancelled = Arc::clone(&cancelled);
        let in_flight = Arc::clone(&in_flight);
        move || {
            if cancelled.load(Ordering::Relaxed) || in_flight.swap(true, Ordering::Relaxed) {
                return;
            }
            let client = client.clone();
            let in_flight = Arc::clone(&in_flight);
            leptos::task::spawn_local(async move {
                let username = client.store().username().unwrap_or_default();
                let _ = client.validate_session(&username).await;
                in_flight.store(false, Ordering::Relaxed);
            });
        }
    });

    // Initial check, then one per navigation.
    Effect::new({
        let run_check = Rc::clone(&run_check);
        move |_: Option<()>| {
            location.pathname.track();
            run_check();
        }
    });

    // Optional fixed-interval re-validation, stopped on teardown.
    if let Some(interval) = poll_interval {
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if cancelled.load(Ordering::Relaxed) {
                    break;
                }
                run_check();
            }
        });
    }
}
