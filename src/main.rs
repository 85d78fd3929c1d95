use std::sync::Arc;

use authgate::config::ServerConfig;
use authgate::database;
use authgate::server;
use authgate::store::{DieselUserStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|err| {
        log::error!("invalid configuration: {err}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    let pool = database::initialize_db_pool(&config.database_url)
        .and_then(|pool| database::initialize_schema(&pool).map(|()| pool))
        .map_err(|err| {
            log::error!("couldn't initialize database: {err}");
            std::io::Error::new(std::io::ErrorKind::Other, err)
        })?;

    let store: Arc<dyn UserStore> = Arc::new(DieselUserStore::new(pool));

    server::run(config, store).await
}
