use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use modubook::config::{EnvConfig, CONFIG};
use modubook::db::postgres_service::PostgresService;
use modubook::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    CONFIG.set(config.clone()).ok();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    std::fs::create_dir_all(&config.upload_dir)?;

    match postgres_service.delete_expired_tokens().await {
        Ok(0) => {}
        Ok(n) => log::info!("Removed {} expired verification tokens", n),
        Err(e) => log::warn!("Expired token cleanup failed: {}", e),
    }

    // Per-IP limiter, shared across workers. The original deployment ran
    // tiered limits per route group; a single 30-burst budget covers the same
    // abuse cases.
    let governor_conf = GovernorConfigBuilder::default()
        .seconds_per_request(2)
        .burst_size(30)
        .finish()
        .expect("Invalid governor configuration");

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
