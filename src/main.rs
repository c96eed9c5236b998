use std::sync::Arc;

use reelrank::{AppState, build_router, config::Config, db, store::MovieStore, tmdb::TmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("reelrank/0.1")
        .timeout(config.http_timeout)
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let tmdb = TmdbClient::new(http, &config);

    let state = Arc::new(AppState { store: MovieStore::new(db), provider: Arc::new(tmdb) });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
