//! Routed page components. UI composition only; session decisions live in
//! the route guard and all server traffic goes through `crate::net`.

pub mod add_project;
pub mod add_task;
pub mod home;
pub mod login;
pub mod project;
pub mod register;
pub mod task;
