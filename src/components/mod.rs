//! Reusable UI components.

pub mod background;
pub mod glass_card;
pub mod project_card;
pub mod route_guard;
pub mod task_card;
