use actix_web::{middleware::Logger, web, App, HttpServer};
use hour_bank::config::{config, EnvConfig, CONFIG};
use hour_bank::db::postgres_service::PostgresService;
use hour_bank::routes::configure_routes;
use hour_bank::utils::password::hash_password;
use hour_bank::utils::session::{session_key, session_middleware};
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let _ = CONFIG.set(EnvConfig::from_env());
    let config = config();
    let addr = format!("0.0.0.0:{}", config.port);

    let key = session_key(&config.session_secret)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?,
    );

    if let Some(admin) = &config.admin {
        let hash = hash_password(&admin.password).map_err(|e| io::Error::other(e.to_string()))?;
        postgres_service
            .ensure_admin(&admin.email, &admin.name, hash)
            .await
            .map_err(|e| io::Error::other(e.to_string()))?;
    }

    info!("Starting server on {}", addr);

    let cookie_secure = config.cookie_secure;
    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(key.clone(), cookie_secure))
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
