//! Fetch wrappers for the task endpoints.

use super::ApiError;
use super::types::Task;

/// Fetch the tasks of a project via `POST /api/tasks`.
pub async fn get_project_tasks(project_id: &str, username: &str) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::POST,
            "/api/tasks",
            &[("username", username), ("project_id", project_id)],
            Some(&super::csrf_token()),
        )
        .await?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        resp.json::<Vec<Task>>().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, username);
        Err(ApiError::Transport)
    }
}

/// Create a task via `POST /api/add-task`.
pub async fn add_task(
    username: &str,
    project_id: &str,
    title: &str,
    description: &str,
) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::POST,
            "/api/add-task",
            &[
                ("username", username),
                ("project_id", project_id),
                ("title", title),
                ("description", description),
            ],
            Some(&super::csrf_token()),
        )
        .await?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        resp.json::<Task>().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, project_id, title, description);
        Err(ApiError::Transport)
    }
}

/// Fetch one task by ID via `GET /api/task`.
pub async fn get_task(task_id: &str, username: &str) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::RequestBuilder::new("/api/task")
            .query([("task_id", task_id), ("username", username)])
            .header("X-CSRF-Token", &super::csrf_token())
            .credentials(web_sys::RequestCredentials::Include)
            .build()
            .map_err(|_| ApiError::Transport)?
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        resp.json::<Task>().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task_id, username);
        Err(ApiError::Transport)
    }
}

/// Update a task's title and description via `PUT /api/update-task`.
pub async fn update_task(
    task_id: &str,
    username: &str,
    title: &str,
    description: &str,
) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::PUT,
            "/api/update-task",
            &[
                ("username", username),
                ("task_id", task_id),
                ("title", title),
                ("description", description),
            ],
            Some(&super::csrf_token()),
        )
        .await?;
        if !resp.ok() {
            return Err(super::rejection(resp).await);
        }
        resp.json::<Task>().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task_id, username, title, description);
        Err(ApiError::Transport)
    }
}

/// Delete a task via `DELETE /api/delete-task`.
pub async fn delete_task(task_id: &str, username: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_form(
            gloo_net::http::Method::DELETE,
            "/api/delete-task",
            &[("username", username), ("task_id", task_id)],
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
        let _ = (task_id, username);
        Err(ApiError::Transport)
    }
}
