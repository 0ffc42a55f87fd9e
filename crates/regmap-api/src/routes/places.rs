//! # Place Queries
//!
//! Routes:
//! - GET /v1/places/{name}/ancestors - ancestor chain, nearest first
//! - GET /v1/places/{name}/regulations - regulations applying to a place or region bucket
//!
//! Unknown names are not errors: the chain is `["Global"]` and only
//! global regulations apply.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use regmap_core::Regulation;
use regmap_engine::PlaceQuery;
use regmap_geo::Ancestor;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AncestorsResponse {
    pub query: String,
    /// Canonical place name, when the query resolved to a place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    pub ancestors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaceRegulationsResponse {
    pub query: String,
    pub resolved: PlaceQuery,
    pub count: usize,
    pub regulations: Vec<Regulation>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/places/{name}/ancestors", get(ancestors))
        .route("/v1/places/{name}/regulations", get(regulations))
}

async fn ancestors(State(state): State<AppState>, Path(name): Path<String>) -> Json<AncestorsResponse> {
    let hierarchy = state.engine.hierarchy();
    let place = match PlaceQuery::parse(&name) {
        PlaceQuery::Place(id) => Some(id),
        _ => None,
    };
    let chain = match place {
        Some(id) => hierarchy.ancestors(id),
        None => hierarchy.ancestors_of(&name),
    };
    Json(AncestorsResponse {
        query: name,
        place: place.map(|id| id.as_str().to_string()),
        ancestors: chain.iter().map(Ancestor::name).map(str::to_string).collect(),
    })
}

async fn regulations(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<PlaceRegulationsResponse> {
    let resolved = PlaceQuery::parse(&name);
    let regulations: Vec<Regulation> = state
        .engine
        .regulations_matching(&resolved, state.dataset.regulations())
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!(place = %name, count = regulations.len(), "place regulations query");
    Json(PlaceRegulationsResponse {
        query: name,
        resolved,
        count: regulations.len(),
        regulations,
    })
}
