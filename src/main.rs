use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use wanderplan::backend::{Backend, MemoryBackend, PgBackend};
use wanderplan::config::Config;
use wanderplan::web::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(
        env_logger::Env::default().default_filter_or("info"),
    );

    let config = Config::load();

    let backend: Arc<dyn Backend> = match &config.database_url {
        Some(url) => {
            let pg = PgBackend::connect(url).await.map_err(|e| {
                std::io::Error::other(format!(
                    "Failed to connect to database / run migrations: {e}"
                ))
            })?;
            Arc::new(pg)
        }
        None => {
            log::warn!(
                "DATABASE_URL not set, running with the in-memory backend; \
                 all data is lost on shutdown"
            );
            Arc::new(MemoryBackend::new())
        }
    };

    let state = Data::new(AppState::new(backend));
    let bind_addr = config.bind_addr.clone();

    log::info!("Wanderplan listening on {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
