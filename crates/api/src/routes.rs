use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::RwLock;

use screener_core::domain::contract::Universe;
use screener_core::domain::recommendation::{ScoredSecurity, ScreeningSnapshot};
use screener_core::ingest::SecurityDataSource;
use screener_core::screening::criteria::{self, CriteriaMatch};
use screener_core::screening::overrides::RecommendationOverrides;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn SecurityDataSource>,
    overrides: Arc<RecommendationOverrides>,
    snapshot: Arc<RwLock<ScreeningSnapshot>>,
}

impl AppState {
    pub async fn load(
        source: Arc<dyn SecurityDataSource>,
        overrides: RecommendationOverrides,
    ) -> anyhow::Result<Self> {
        let snapshot = run_screening(source.as_ref(), &overrides).await?;
        Ok(Self {
            source,
            overrides: Arc::new(overrides),
            snapshot: Arc::new(RwLock::new(snapshot)),
        })
    }

    pub fn empty(source: Arc<dyn SecurityDataSource>, overrides: RecommendationOverrides) -> Self {
        let snapshot = screener_core::screening::snapshot(
            source.provider_name(),
            Universe::default(),
            &overrides,
        );
        Self {
            source,
            overrides: Arc::new(overrides),
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }
}

async fn run_screening(
    source: &dyn SecurityDataSource,
    overrides: &RecommendationOverrides,
) -> anyhow::Result<ScreeningSnapshot> {
    let universe = source.fetch_universe().await?;
    Ok(screener_core::screening::snapshot(
        source.provider_name(),
        universe,
        overrides,
    ))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/screening", get(get_screening))
        .route("/screening/shortlist", get(get_shortlist))
        .route("/screening/refresh", post(refresh))
        .route("/securities/:symbol", get(get_security))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiScreening {
    #[serde(flatten)]
    snapshot: ScreeningSnapshot,
    selected: Option<String>,
}

impl From<ScreeningSnapshot> for ApiScreening {
    fn from(snapshot: ScreeningSnapshot) -> Self {
        let selected = snapshot.selected().map(|s| s.symbol().to_string());
        Self { snapshot, selected }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiSecurity {
    security: ScoredSecurity,
    criteria: CriteriaMatch,
    in_shortlist: bool,
}

async fn get_screening(State(state): State<AppState>) -> Json<ApiScreening> {
    let snapshot = state.snapshot.read().await.clone();
    Json(snapshot.into())
}

async fn get_shortlist(State(state): State<AppState>) -> Json<Vec<ScoredSecurity>> {
    Json(state.snapshot.read().await.shortlist.clone())
}

async fn get_security(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiSecurity>, StatusCode> {
    let snapshot = state.snapshot.read().await;
    let security = snapshot.find(&symbol).ok_or(StatusCode::NOT_FOUND)?.clone();
    let in_shortlist = snapshot
        .shortlist
        .iter()
        .any(|s| s.symbol() == security.symbol());

    Ok(Json(ApiSecurity {
        criteria: criteria::analyze(&security.security),
        security,
        in_shortlist,
    }))
}

async fn refresh(State(state): State<AppState>) -> Result<Json<ApiScreening>, StatusCode> {
    let snapshot = run_screening(state.source.as_ref(), &state.overrides)
        .await
        .map_err(|e| {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %format!("{e:#}"), "refresh failed");
            StatusCode::BAD_GATEWAY
        })?;

    tracing::info!(
        run_id = %snapshot.run_id,
        universe_len = snapshot.universe.len(),
        "screening refreshed"
    );

    *state.snapshot.write().await = snapshot.clone();
    Ok(Json(snapshot.into()))
}
