use crate::auth::current_user;
use crate::db;
use crate::error::AppError;
use crate::models::{Project, Task};
use async_graphql::{Context, Object};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Lists the caller's projects, newest first.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>, AppError> {
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();

        let projects: Vec<Project> = db::projects(db)
            .find(doc! { "owner": user.id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(projects)
    }

    /// Lists the caller's tasks under the given project, newest first.
    async fn tasks(&self, ctx: &Context<'_>, project: ObjectId) -> Result<Vec<Task>, AppError> {
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();

        let tasks: Vec<Task> = db::tasks(db)
            .find(doc! { "project": project, "owner": user.id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(tasks)
    }
}
