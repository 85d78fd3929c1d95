use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};

use crate::config::ServerConfig;
use crate::handler;
use crate::store::UserStore;

/// Mounts the auth endpoints under `/api/v1/user`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handler::error::json_error_handler))
        .service(
            web::scope("/api/v1/user")
                .route("/login", web::post().to(handler::user::login))
                .route("/register", web::post().to(handler::user::register)),
        )
        .default_service(web::route().to(handler::user::default_handler));
}

/// Only `origin` may call the API, with credentials.
pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .block_on_origin_mismatch(true)
        .max_age(3600)
}

pub async fn run(config: ServerConfig, store: Arc<dyn UserStore>) -> std::io::Result<()> {
    let store = web::Data::from(store);
    let origin = config.allowed_origin.clone();

    log::info!(
        "starting HTTP server at http://{}:{} (allowed origin {})",
        config.host,
        config.port,
        origin
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(cors(&origin))
            .wrap(actix_web::middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .workers(num_cpus::get() * 2)
    .run()
    .await
}
