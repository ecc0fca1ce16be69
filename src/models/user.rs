use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A registered account as stored in the `users` collection.
///
/// The password hash never leaves the server: the field is skipped in the
/// GraphQL object and only compared through `auth::verify_password`.
#[derive(Debug, Serialize, Deserialize, SimpleObject)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    #[graphql(skip)]
    pub password_hash: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: &str, email: &str, password_hash: String) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.trim().to_string(),
            email: normalize_email(email),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Trims and lowercases an email address so lookups and the unique index
/// always see one canonical spelling.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
