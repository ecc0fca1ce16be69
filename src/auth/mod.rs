pub mod identity;
pub mod password;
pub mod token;

use async_graphql::{InputObject, SimpleObject};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

// Re-export necessary items
pub use identity::{bearer_token, current_user, AuthUser};
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Input for the `login` mutation.
#[derive(Debug, InputObject, Validate)]
pub struct LoginInput {
    /// User's email address.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// User's password.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Input for the `register` mutation.
#[derive(Debug, InputObject, Validate)]
pub struct RegisterInput {
    /// Display name for the new account.
    /// Must be between 1 and 60 characters and not blank.
    #[validate(length(min = 1, max = 60))]
    #[validate(custom = "crate::models::validate_not_blank")]
    pub name: String,
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Result of a successful `login` mutation.
/// Contains the signed access token and the ID of the authenticated user.
#[derive(Debug, SimpleObject)]
pub struct AuthPayload {
    /// The signed token for session authentication.
    pub token: String,
    /// The unique identifier of the authenticated user.
    pub user_id: ObjectId,
}
