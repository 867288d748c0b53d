use std::sync::Arc;

mod app;
mod config;
mod db;
mod error;
mod seed;
mod state;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::users::repo::MySqlUserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "users_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env();

    // Bootstrap the schema and dataset before accepting traffic. Never fatal.
    seed::run_best_effort(&config.db).await;

    let pool = db::connect_pool(&config.db);
    match db::ping(&pool).await {
        Ok(()) => tracing::info!("database connected"),
        Err(e) => tracing::warn!(error = %e, "database unreachable at startup, serving anyway"),
    }

    let state = AppState {
        store: Arc::new(MySqlUserStore::new(pool)),
        env: config.env,
    };

    let app = app::build_app(state);
    app::serve(app, config.port).await
}
