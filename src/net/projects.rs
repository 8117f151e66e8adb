//! Fetch wrappers for the project endpoints.
//!
//! Thin request/response plumbing: form-encoded bodies, CSRF header,
//! cookies included. All session handling lives in `net::auth`; a rejected
//! call here simply surfaces as an error message on the page.

use super::ApiError;
use super::types::Project;

/// Fetch all projects for `username` from `POST /api/projects`.
pub async fn get_projects(username: &str) -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::POST,
            "/api/projects",
            &[("username", username)],
            Some(&super::csrf_token()),
        )
        .await?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        resp.json::<Vec<Project>>()
            .await
            .map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::Transport)
    }
}

/// Create a project via `POST /api/add-project`.
pub async fn add_project(
    username: &str,
    name: &str,
    description: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::POST,
            "/api/add-project",
            &[
                ("username", username),
                ("name", name),
                ("description", description),
            ],
            Some(&super::csrf_token()),
        )
        .await?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, name, description);
        Err(ApiError::Transport)
    }
}

/// Fetch one project by ID via `POST /api/project`.
pub async fn get_project(project_id: &str, username: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::POST,
            "/api/project",
            &[("username", username), ("project_id", project_id)],
            Some(&super::csrf_token()),
        )
        .await?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        resp.json::<Project>().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, username);
        Err(ApiError::Transport)
    }
}
