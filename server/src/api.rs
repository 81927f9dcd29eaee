//! HTTP routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use ratebridge_common::ExchangeRate;
use ratebridge_fx::FxEngine;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, warn};

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};

/// Shared, immutable application state.
pub struct AppState {
    pub engine: FxEngine,
}

impl AppState {
    pub fn new(engine: FxEngine) -> Self {
        Self { engine }
    }
}

/// USD rate of every currency reachable from the upstream observations.
async fn get_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ExchangeRate>>> {
    match state.engine.usd_rates().await {
        Ok(rates) => Ok(Json(rates)),
        Err(e) => {
            if e.is_upstream() {
                warn!(error = %e, code = e.error_code(), "Failed to fetch upstream rates");
            } else {
                error!(error = %e, code = e.error_code(), "Failed to resolve USD rates");
            }
            Err(ApiError::from(e))
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rates", get(get_rates))
}

pub fn app_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
