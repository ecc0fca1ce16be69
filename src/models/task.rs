use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents the completion state of a task.
/// Stored in BSON as a lowercase string.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Enum)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is still open.
    Pending,
    /// Task has been finished.
    Complete,
}

impl TaskStatus {
    /// The BSON string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Complete => "complete",
        }
    }
}

/// A task as stored in the `tasks` collection and returned by the API.
///
/// Both the project reference and the owner are fixed at creation time;
/// mutations only ever touch `name` and `status`.
#[derive(Debug, Serialize, Deserialize, SimpleObject)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub status: TaskStatus,
    pub project: ObjectId,
    pub owner: ObjectId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task under a project.
#[derive(Debug, InputObject, Validate)]
pub struct TaskInput {
    /// The task name. Must be between 1 and 200 characters and not blank.
    #[validate(length(min = 1, max = 200))]
    #[validate(custom = "crate::models::validate_not_blank")]
    pub name: String,
    /// The project this task belongs to.
    pub project: ObjectId,
}

/// Partial update for a task; only provided fields are written.
#[derive(Debug, InputObject, Validate)]
pub struct UpdateTaskInput {
    #[validate(length(min = 1, max = 200))]
    #[validate(custom = "crate::models::validate_not_blank")]
    pub name: Option<String>,
    pub status: Option<TaskStatus>,
}

impl Task {
    /// Creates a new `Task` owned by `owner`. New tasks always start out
    /// pending; completion is toggled through updates later.
    pub fn new(input: TaskInput, owner: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name.trim().to_string(),
            status: TaskStatus::Pending,
            project: input.project,
            owner,
            created_at: Utc::now(),
        }
    }
}
