//! Root application component with routing, the session guard, and context
//! providers.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::background::Background;
use crate::components::route_guard::RouteGuard;
use crate::net::auth::{AuthClient, HttpAuthApi};
use crate::pages::{
    add_project::AddProjectPage, add_task::AddTaskPage, home::HomePage, login::LoginPage,
    project::ProjectPage, register::RegisterPage, task::TaskPage,
};
use crate::state::session::Session;
use crate::util::credentials::BrowserCredentials;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and auth client contexts and sets up client-side
/// routing behind the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let auth = AuthClient::new(HttpAuthApi, BrowserCredentials, session);

    provide_context(session);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/devtasks.css"/>
        <Title text="DevTasks"/>

        <Router>
            <Background/>
            <main class="app">
                <RouteGuard poll_interval=Duration::from_secs(1)>
                    <Routes fallback=|| view! { <Redirect path="/login"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=(StaticSegment("project"), StaticSegment("new"))
                            view=AddProjectPage
                        />
                        <Route
                            path=(StaticSegment("project"), ParamSegment("id"))
                            view=ProjectPage
                        />
                        <Route
                            path=(
                                StaticSegment("project"),
                                ParamSegment("id"),
                                StaticSegment("task"),
                                StaticSegment("new"),
                            )
                            view=AddTaskPage
                        />
                        <Route
                            path=(
                                StaticSegment("project"),
                                ParamSegment("id"),
                                StaticSegment("task"),
                                ParamSegment("task_id"),
                            )
                            view=TaskPage
                        />
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
