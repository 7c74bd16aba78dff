use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sahamview=info,tower_http=info,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = sahamview::state::AppState::new();

    // Quote board re-perturbation every 30s, market clock every 60s.
    // The handles keep the loops alive for the process lifetime.
    let _quote_ticker =
        sahamview::tasks::spawn_quote_ticker(state.clone(), Duration::from_secs(30));
    let _market_clock =
        sahamview::tasks::spawn_market_clock(state.clone(), Duration::from_secs(60));

    let app: Router = sahamview::app(state);
    let addr: SocketAddr = env::var("SAHAMVIEW_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
