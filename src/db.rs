use mongodb::{bson::doc, options::IndexOptions, Client, Collection, Database, IndexModel};

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Project, Task, User};

pub const USERS: &str = "users";
pub const PROJECTS: &str = "projects";
pub const TASKS: &str = "tasks";

/// Opens a client for the configured deployment and selects the application
/// database. The driver connects lazily, so a `ping` is issued to surface an
/// unreachable or misconfigured deployment at startup rather than on the
/// first request.
pub async fn connect(config: &Config) -> Result<Database, AppError> {
    let client = Client::with_uri_str(&config.database_url).await?;
    let db = client.database(&config.database_name);
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db)
}

pub fn users(db: &Database) -> Collection<User> {
    db.collection(USERS)
}

pub fn projects(db: &Database) -> Collection<Project> {
    db.collection(PROJECTS)
}

pub fn tasks(db: &Database) -> Collection<Task> {
    db.collection(TASKS)
}

/// Creates the unique index backing the email-uniqueness invariant.
/// Safe to call on every startup; MongoDB treats an existing identical
/// index as a no-op.
pub async fn ensure_indexes(db: &Database) -> Result<(), AppError> {
    let options = IndexOptions::builder().unique(true).build();
    let model = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(options)
        .build();
    users(db).create_index(model).await?;
    log::debug!("unique index on users.email is in place");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Client construction is lazy for non-SRV URIs, so no deployment is needed here.
    #[actix_rt::test]
    async fn test_collection_names() {
        let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        let db = client.database("taskhub_test");

        assert_eq!(users(&db).name(), USERS);
        assert_eq!(projects(&db).name(), PROJECTS);
        assert_eq!(tasks(&db).name(), TASKS);
    }
}
