//! # Regulation Queries
//!
//! Routes:
//! - GET  /v1/regulations/{id}/target - resolved target, scope level and primary location
//! - POST /v1/regulations/search - filter by text, locations, categories and statuses
//! - GET  /v1/scopes - regulations grouped by scope level

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use regmap_core::{PlaceId, Regulation, RegulationId, RegulationTarget, ScopeLevel};
use regmap_engine::RegulationFilter;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TargetResponse {
    pub id: RegulationId,
    pub target: RegulationTarget,
    pub scope: ScopeLevel,
    pub primary_location: Option<PlaceId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: usize,
    pub regulations: Vec<Regulation>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/regulations/{id}/target", get(target))
        .route("/v1/regulations/search", post(search))
        .route("/v1/scopes", get(scopes))
}

async fn target(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TargetResponse>, AppError> {
    let regulation = state
        .dataset
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("regulation '{id}'")))?;
    let target = state.engine.resolve_target(regulation);
    Ok(Json(TargetResponse {
        id: regulation.id.clone(),
        target,
        scope: state.engine.scope_of_target(target),
        primary_location: state.engine.primary_location(regulation),
    }))
}

async fn search(
    State(state): State<AppState>,
    body: Result<Json<RegulationFilter>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(filter) = body?;
    let regulations: Vec<Regulation> = state
        .engine
        .filter_regulations(&filter, state.dataset.regulations())
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!(count = regulations.len(), "regulation search");
    Ok(Json(SearchResponse {
        count: regulations.len(),
        regulations,
    }))
}

async fn scopes(State(state): State<AppState>) -> Response {
    let groups = state.engine.group_by_scope(state.dataset.regulations());
    Json(groups).into_response()
}
