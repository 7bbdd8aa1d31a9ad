//! HTTP route handlers for the vector database API.

use crate::collection::{Collection, Metadata};
use crate::distance::DistanceMetric;
use crate::error::VectorDbError;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

// --- Request/Response types ---

#[derive(Deserialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub dimension: usize,
    pub distance: String,
}

#[derive(Serialize)]
pub struct CollectionInfo {
    pub name: String,
    pub dimension: usize,
    pub distance: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ListCollectionsResponse {
    pub collections: Vec<String>,
}

#[derive(Deserialize)]
pub struct PointPayload {
    pub id: String,
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Deserialize)]
pub struct UpsertPointsRequest {
    pub points: Vec<PointPayload>,
}

#[derive(Serialize)]
pub struct UpsertPointsResponse {
    pub upserted: u64,
}

#[derive(Deserialize)]
pub struct DeletePointsRequest {
    pub ids: Vec<String>,
}

#[derive(Serialize)]
pub struct DeletePointsResponse {
    pub deleted: bool,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: Vec<f32>,
    pub top_k: usize,
    #[serde(default)]
    pub include_vectors: bool,
    #[serde(default)]
    pub include_metadata: bool,
    /// Accepted but not applied; metadata filtering is not implemented yet.
    #[serde(default)]
    pub filter: Option<Value>,
}

#[derive(Serialize)]
pub struct ScoredPointResponse {
    pub id: String,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredPointResponse>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub collections: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a core error onto the HTTP status the request layer promises:
/// not-found -> 404, already-exists -> 409, the invalid-argument class
/// -> 400. The enum is exhaustive, so nothing falls through to 500 today;
/// a future non-validation variant would land there.
fn map_core_err(err: VectorDbError) -> ApiError {
    use VectorDbError::*;
    let status = match err {
        CollectionNotFound { .. } => StatusCode::NOT_FOUND,
        CollectionExists { .. } => StatusCode::CONFLICT,
        EmptyCollectionName
        | InvalidDimension
        | UnknownMetric { .. }
        | EmptyPointId
        | InvalidK
        | DimensionMismatch { .. } => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn bad_request(msg: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: msg.into() }),
    )
}

fn collection_info(col: &Collection) -> CollectionInfo {
    CollectionInfo {
        name: col.name().to_string(),
        dimension: col.dimension(),
        distance: col.metric().as_str().to_string(),
        count: col.size(),
    }
}

// --- Router ---

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/collections", post(create_collection).get(list_collections))
        .route("/collections/:name", get(get_collection))
        .route("/collections/:name/points", post(upsert_points))
        .route("/collections/:name/points/delete", post(delete_points))
        .route("/collections/:name/search", post(search))
        .route("/health", get(health))
        .with_state(state)
}

// --- Handlers ---

async fn create_collection(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<CollectionInfo>), ApiError> {
    if req.name.is_empty() {
        return Err(bad_request("name must not be empty"));
    }
    if req.dimension == 0 {
        return Err(bad_request("dimension must be > 0"));
    }

    let metric = DistanceMetric::parse(&req.distance).map_err(map_core_err)?;

    let col = state
        .store
        .create_collection(&req.name, req.dimension, metric)
        .map_err(map_core_err)?;

    tracing::info!(
        name = %col.name(),
        dimension = col.dimension(),
        metric = %col.metric(),
        "collection created"
    );

    Ok((StatusCode::CREATED, Json(collection_info(&col))))
}

async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CollectionInfo>, ApiError> {
    let col = state.store.get_collection(&name).map_err(map_core_err)?;
    Ok(Json(collection_info(&col)))
}

async fn list_collections(State(state): State<Arc<AppState>>) -> Json<ListCollectionsResponse> {
    Json(ListCollectionsResponse {
        collections: state.store.list_collections(),
    })
}

async fn upsert_points(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<UpsertPointsRequest>,
) -> Result<Json<UpsertPointsResponse>, ApiError> {
    let col = state.store.get_collection(&name).map_err(map_core_err)?;

    let mut upserted = 0u64;
    for (i, p) in req.points.into_iter().enumerate() {
        if p.id.is_empty() {
            // Points already applied stay applied; there is no rollback.
            return Err(bad_request(format!("points[{i}].id must not be empty")));
        }
        col.upsert(&p.id, &p.vector, p.metadata)
            .map_err(map_core_err)?;
        upserted += 1;
    }

    tracing::debug!(collection = %name, upserted, "points upserted");
    Ok(Json(UpsertPointsResponse { upserted }))
}

async fn delete_points(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<DeletePointsRequest>,
) -> Result<Json<DeletePointsResponse>, ApiError> {
    let col = state.store.get_collection(&name).map_err(map_core_err)?;

    for id in &req.ids {
        // Delete is idempotent; unknown and empty ids are ignored.
        let _ = col.delete(id);
    }

    Ok(Json(DeletePointsResponse { deleted: true }))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let col = state.store.get_collection(&name).map_err(map_core_err)?;

    if req.filter.is_some() {
        tracing::debug!(collection = %name, "search filter ignored (not implemented)");
    }

    let results = col
        .search(&req.query, req.top_k, req.include_vectors, req.include_metadata)
        .map_err(map_core_err)?;

    let results = results
        .into_iter()
        .map(|r| ScoredPointResponse {
            id: r.id,
            score: r.score,
            vector: r.vector,
            metadata: r.metadata,
        })
        .collect();

    Ok(Json(SearchResponse { results }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        collections: state.store.list_collections().len(),
    })
}
