//! # Map and Sidebar
//!
//! Routes:
//! - GET /v1/pins - map pins with coordinates and listed regulation ids
//! - GET /v1/sidebar - countries grouped by region, plus facet counts

use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use regmap_core::{PlaceId, Region};
use regmap_engine::{FacetCounts, Pin};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SidebarResponse {
    pub groups: BTreeMap<Region, Vec<PlaceId>>,
    pub facets: FacetCounts,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/pins", get(pins))
        .route("/v1/sidebar", get(sidebar))
}

async fn pins(State(state): State<AppState>) -> Json<Vec<Pin>> {
    Json(state.engine.pins(state.dataset.regulations()))
}

async fn sidebar(State(state): State<AppState>) -> Json<SidebarResponse> {
    let regulations = state.dataset.regulations();
    Json(SidebarResponse {
        groups: state.engine.sidebar_groups(regulations),
        facets: state.engine.facet_counts(regulations),
    })
}
