use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use redis::aio::ConnectionManager;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use live_admin_api::config::Config;
use live_admin_api::db::Database;
use live_admin_api::mail::SmtpMailSender;
use live_admin_api::realtime::{CentrifugoClient, HsTokenSigner};
use live_admin_api::services::{Collaborators, Services};
use live_admin_api::store::postgres::{
    PgBroadcastStore, PgIdentityStore, PgImageStore, PgLiveStore, PgMessageStore,
    PgRecordingStore, PgStreamStore,
};
use live_admin_api::store::redis::RedisParticipantCache;
use live_admin_api::{api, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "live_admin_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::connect(&config).await?;
    db.run_migrations().await?;

    let redis_conn = ConnectionManager::new(db.redis.clone()).await?;
    let op_timeout = Duration::from_secs(config.redis.op_timeout_secs);

    let services = Services::new(Collaborators {
        identity: Arc::new(PgIdentityStore::new(db.pg.clone())),
        broadcasts: Arc::new(PgBroadcastStore::new(db.pg.clone())),
        messages: Arc::new(PgMessageStore::new(db.pg.clone())),
        images: Arc::new(PgImageStore::new(db.pg.clone())),
        streams: Arc::new(PgStreamStore::new(db.pg.clone())),
        live: Arc::new(PgLiveStore::new(db.pg.clone())),
        recordings: Arc::new(PgRecordingStore::new(db.pg.clone())),
        participants: Arc::new(RedisParticipantCache::new(redis_conn, op_timeout)),
        bus: Arc::new(CentrifugoClient::new(&config.centrifugo)?),
        signer: Arc::new(HsTokenSigner::new(&config.centrifugo)),
        mail: Arc::new(SmtpMailSender::new(&config.smtp)?),
    });

    let state = AppState {
        services: Arc::new(services),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api::routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
