use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use taskhub::{config::Config, db, routes, schema};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("JWT_SECRET").is_err() {
        log::warn!("JWT_SECRET is not set; login and token verification will fail");
    }

    let db = db::connect(&config)
        .await
        .expect("Failed to connect to database");
    db::ensure_indexes(&db)
        .await
        .expect("Failed to create database indexes");

    let schema = schema::build(db);

    log::info!("Starting TaskHub server at {}", config.server_url());
    log::info!("GraphiQL available at {}/graphql", config.server_url());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
