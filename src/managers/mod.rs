// NovaNav state managers
// Managers own the dashboard state: entities, the edit-mode guard, reordering, and view selection.

pub mod auth_guard;
pub mod default_data;
pub mod entity_repository;
pub mod reorder;
pub mod view_state;
