use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use log::info;

use message_board::config::{Settings, StoreBackend};
use message_board::databases::messages::{MemoryMessageStore, MessageStore, PgMessageStore};
use message_board::databases::setup_database;
use message_board::routes;

async fn build_store(settings: &Settings) -> Result<Arc<dyn MessageStore>> {
    match settings.store {
        StoreBackend::Postgres => {
            let url = settings
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let pool = setup_database(url).await?;
            info!("Using Postgres message store");
            Ok(Arc::new(PgMessageStore::new(pool)))
        }
        StoreBackend::Memory => {
            info!("Using in-memory message store, messages will not survive a restart");
            Ok(Arc::new(MemoryMessageStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let store = web::Data::from(build_store(&settings).await?);
    let assets = settings.assets.clone();
    let serve_assets = routes::assets::bundle_built(&assets);

    info!("Listening on http://{}:{}", settings.host, settings.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(web::Data::new(assets.clone()))
            .configure(routes::init)
            .configure(|cfg| {
                if serve_assets {
                    routes::assets::init(cfg, &assets);
                }
            })
    })
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?
    .run()
    .await
    .context("Server error")
}
