use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use screener_core::config::Settings;
use screener_core::ingest::{FileDataSource, FixtureDataSource, SecurityDataSource};

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let overrides = settings.recommendation_overrides()?;
    let source = select_source(&settings);

    // A failed first fetch still serves, with an empty universe, until a refresh succeeds.
    let state = match routes::AppState::load(source.clone(), overrides.clone()).await {
        Ok(state) => state,
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(
                error = %format!("{e:#}"),
                "initial screening failed; starting API in degraded mode"
            );
            routes::AppState::empty(source, overrides)
        }
    };

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn select_source(settings: &Settings) -> Arc<dyn SecurityDataSource> {
    match settings.universe_path.as_deref() {
        Some(path) => Arc::new(FileDataSource::new(path)),
        None => Arc::new(FixtureDataSource),
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
