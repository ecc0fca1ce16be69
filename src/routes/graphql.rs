use crate::auth::{bearer_token, verify_token, AuthUser};
use crate::error::AppError;
use crate::schema::AppSchema;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

/// GraphQL endpoint.
///
/// Requests may carry an `Authorization: Bearer <token>` header. A valid
/// token attaches the caller's identity to the request so protected
/// resolvers can see it. An invalid or expired token is rejected here with
/// a `401` before any resolver runs. Requests without the header execute
/// anonymously and only reach the public operations.
#[post("/graphql")]
pub async fn graphql(
    schema: web::Data<AppSchema>,
    req: HttpRequest,
    gql_request: GraphQLRequest,
) -> Result<GraphQLResponse, AppError> {
    let mut request = gql_request.into_inner();

    if let Some(token) = bearer_token(&req) {
        let claims = verify_token(token).map_err(|e| {
            log::warn!("Rejected token on {}: {}", req.path(), e);
            e
        })?;
        request = request.data(AuthUser::from_claims(&claims)?);
    }

    Ok(schema.execute(request).await.into())
}

/// Serves the GraphiQL IDE for interactive exploration of the schema.
#[get("/graphql")]
pub async fn graphiql() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
