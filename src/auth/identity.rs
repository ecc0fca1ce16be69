use crate::auth::token::Claims;
use crate::error::AppError;
use actix_web::http::header;
use actix_web::HttpRequest;
use async_graphql::Context;
use mongodb::bson::oid::ObjectId;

/// The authenticated caller, as established from a verified token.
///
/// Inserted into the GraphQL request context by the HTTP layer when a valid
/// `Authorization: Bearer <token>` header is present. Resolvers that require
/// authentication obtain it through [`current_user`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: ObjectId,
    pub email: String,
    pub name: String,
}

impl AuthUser {
    /// Builds an identity from verified token claims.
    ///
    /// Fails with `AppError::Unauthorized` if the subject claim does not
    /// parse as an object id.
    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        let id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".into()))?;
        Ok(AuthUser {
            id,
            email: claims.email.clone(),
            name: claims.name.clone(),
        })
    }
}

/// Extracts the bearer token from a request's `Authorization` header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Returns the authenticated caller for this request.
///
/// Fails with `AppError::Unauthorized` when the request carried no valid
/// token, so anonymous callers are turned away with a single message.
pub fn current_user<'a>(ctx: &'a Context<'_>) -> Result<&'a AuthUser, AppError> {
    ctx.data_opt::<AuthUser>()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".into()))
}
