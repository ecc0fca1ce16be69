pub mod graphql;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(graphql::graphql)
        .service(graphql::graphiql);
}
