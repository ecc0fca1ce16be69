use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A project as stored in the `projects` collection and returned by the API.
///
/// `owner` is set once at creation time and never appears in an update
/// document; every mutation verifies it against the caller first.
#[derive(Debug, Serialize, Deserialize, SimpleObject)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub owner: ObjectId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Input for creating a project.
#[derive(Debug, InputObject, Validate)]
pub struct ProjectInput {
    /// The project name. Must be between 1 and 120 characters and not blank.
    #[validate(length(min = 1, max = 120))]
    #[validate(custom = "crate::models::validate_not_blank")]
    pub name: String,
}

/// Partial update for a project; only provided fields are written.
#[derive(Debug, InputObject, Validate)]
pub struct UpdateProjectInput {
    #[validate(length(min = 1, max = 120))]
    #[validate(custom = "crate::models::validate_not_blank")]
    pub name: Option<String>,
}

impl Project {
    /// Creates a new `Project` owned by `owner`, with a fresh id and the
    /// current time as `created_at`. The name is stored trimmed.
    pub fn new(input: ProjectInput, owner: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name.trim().to_string(),
            owner,
            created_at: Utc::now(),
        }
    }
}
