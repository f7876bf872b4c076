use axum::{
    Json,
    extract::{Path, Query, State},
};
use geojson::FeatureCollection;

use crate::{
    api::AppState,
    dto::{
        request::{ArretCreateRequest, NearbyQuery},
        response::{ArretDto, NearbyArretDto},
    },
    error::ServiceError,
    model::ArretId,
    service::arret,
};

pub async fn get_all(State(state): State<AppState>) -> Json<Vec<ArretDto>> {
    let store = state.store.read().await;
    Json(arret::get_all(&store))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ArretId>,
) -> Result<Json<ArretDto>, ServiceError> {
    let store = state.store.read().await;
    arret::get(&store, id).map(Json)
}

pub async fn nearby(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyArretDto>>, ServiceError> {
    let store = state.store.read().await;
    arret::nearby(&store, query).map(Json)
}

pub async fn feature_collection(
    State(state): State<AppState>,
) -> Result<Json<FeatureCollection>, ServiceError> {
    let store = state.store.read().await;
    arret::feature_collection(&store).map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<ArretCreateRequest>,
) -> Result<Json<ArretDto>, ServiceError> {
    let mut store = state.store.write().await;
    arret::create(&mut store, request).map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ArretId>,
) -> Result<(), ServiceError> {
    let mut store = state.store.write().await;
    arret::delete(&mut store, id)
}
