pub mod project;
pub mod task;
pub mod user;

use validator::ValidationError;

pub use project::{Project, ProjectInput, UpdateProjectInput};
pub use task::{Task, TaskInput, TaskStatus, UpdateTaskInput};
pub use user::{normalize_email, User};

/// Rejects values that are empty or whitespace-only. Stored names are
/// trimmed, so this measures what would actually be persisted.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
