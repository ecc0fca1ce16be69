use crate::auth::{
    current_user, generate_token, hash_password, verify_password, AuthPayload, LoginInput,
    RegisterInput,
};
use crate::db;
use crate::error::AppError;
use crate::models::{
    normalize_email, Project, ProjectInput, Task, TaskInput, UpdateProjectInput, UpdateTaskInput,
    User,
};
use async_graphql::{Context, Object};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Database;
use validator::Validate;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates an account. Fails when the email is already registered.
    async fn register(&self, ctx: &Context<'_>, input: RegisterInput) -> Result<User, AppError> {
        input.validate()?;
        let db = ctx.data_unchecked::<Database>();
        let users = db::users(db);

        let email = normalize_email(&input.email);
        if users.find_one(doc! { "email": &email }).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".into()));
        }

        let password_hash = hash_password(&input.password)?;
        let user = User::new(&input.name, &input.email, password_hash);
        users.insert_one(&user).await?;

        log::info!("Registered user {}", user.email);
        Ok(user)
    }

    /// Exchanges credentials for a signed access token.
    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<AuthPayload, AppError> {
        input.validate()?;
        let db = ctx.data_unchecked::<Database>();

        let email = normalize_email(&input.email);
        let user = db::users(db)
            .find_one(doc! { "email": &email })
            .await?
            .ok_or_else(|| AppError::Unauthorized("User does not exist".into()))?;

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Incorrect password".into()));
        }

        let token = generate_token(&user)?;
        log::info!("User {} logged in", user.email);
        Ok(AuthPayload {
            token,
            user_id: user.id,
        })
    }

    /// Creates a project owned by the caller.
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        input: ProjectInput,
    ) -> Result<Project, AppError> {
        input.validate()?;
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();

        let project = Project::new(input, user.id);
        db::projects(db).insert_one(&project).await?;
        Ok(project)
    }

    /// Renames a project the caller owns.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ObjectId,
        input: UpdateProjectInput,
    ) -> Result<Project, AppError> {
        input.validate()?;
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();
        let current = owned_project(db, id, user.id).await?;

        let mut changes = Document::new();
        if let Some(name) = &input.name {
            changes.insert("name", name.trim());
        }
        if changes.is_empty() {
            return Ok(current);
        }

        db::projects(db)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    /// Deletes a project the caller owns. Tasks under it are left in place.
    async fn delete_project(&self, ctx: &Context<'_>, id: ObjectId) -> Result<bool, AppError> {
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();

        owned_project(db, id, user.id).await?;
        db::projects(db).delete_one(doc! { "_id": id }).await?;
        log::info!("Deleted project {}", id);
        Ok(true)
    }

    /// Creates a task owned by the caller under the given project.
    async fn create_task(&self, ctx: &Context<'_>, input: TaskInput) -> Result<Task, AppError> {
        input.validate()?;
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();

        let task = Task::new(input, user.id);
        db::tasks(db).insert_one(&task).await?;
        Ok(task)
    }

    /// Updates the name and/or status of a task the caller owns.
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ObjectId,
        input: UpdateTaskInput,
    ) -> Result<Task, AppError> {
        input.validate()?;
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();
        let current = owned_task(db, id, user.id).await?;

        let mut changes = Document::new();
        if let Some(name) = &input.name {
            changes.insert("name", name.trim());
        }
        if let Some(status) = input.status {
            changes.insert("status", status.as_str());
        }
        if changes.is_empty() {
            return Ok(current);
        }

        db::tasks(db)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Deletes a task the caller owns.
    async fn delete_task(&self, ctx: &Context<'_>, id: ObjectId) -> Result<bool, AppError> {
        let user = current_user(ctx)?;
        let db = ctx.data_unchecked::<Database>();

        owned_task(db, id, user.id).await?;
        db::tasks(db).delete_one(doc! { "_id": id }).await?;
        Ok(true)
    }
}

/// Loads a project and checks it belongs to `owner`.
async fn owned_project(
    db: &Database,
    id: ObjectId,
    owner: ObjectId,
) -> Result<Project, AppError> {
    let project = db::projects(db)
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;
    if project.owner != owner {
        return Err(AppError::Forbidden("Insufficient permission".into()));
    }
    Ok(project)
}

/// Loads a task and checks it belongs to `owner`.
async fn owned_task(db: &Database, id: ObjectId, owner: ObjectId) -> Result<Task, AppError> {
    let task = db::tasks(db)
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;
    if task.owner != owner {
        return Err(AppError::Forbidden("Insufficient permission".into()));
    }
    Ok(task)
}
