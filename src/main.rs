use actix_web::{App, HttpServer, middleware, web};

use attendee_admin::auth::rate_limit::LoginLimiter;
use attendee_admin::config::AppConfig;
use attendee_admin::{db, handlers};

fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    log::error!("Startup failed: {e}");
    std::io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(startup_error)?;

    let pool = db::init_pool(&config.database_url, config.max_connections)
        .await
        .map_err(startup_error)?;
    db::run_migrations(&pool).await.map_err(startup_error)?;

    match &config.admin {
        Some(seed) => db::seed_admin(&pool, seed).await.map_err(startup_error)?,
        None => log::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set; using existing admins table"),
    }

    let limiter = web::Data::new(LoginLimiter::default());

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(limiter.clone())
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
