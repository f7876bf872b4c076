use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::AppState,
    dto::{
        request::TrajetCreateRequest,
        response::{HoraireDto, TrajetDto},
    },
    error::ServiceError,
    model::TrajetId,
    service::{horaire, trajet},
};

pub async fn get_all(State(state): State<AppState>) -> Json<Vec<TrajetDto>> {
    let store = state.store.read().await;
    Json(trajet::get_all(&store))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<TrajetId>,
) -> Result<Json<TrajetDto>, ServiceError> {
    let store = state.store.read().await;
    trajet::get(&store, id).map(Json)
}

pub async fn horaires(
    State(state): State<AppState>,
    Path(id): Path<TrajetId>,
) -> Result<Json<Vec<HoraireDto>>, ServiceError> {
    let store = state.store.read().await;
    horaire::for_trajet(&store, id).map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<TrajetCreateRequest>,
) -> Result<Json<TrajetDto>, ServiceError> {
    let mut store = state.store.write().await;
    trajet::create(&mut store, request).map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TrajetId>,
) -> Result<(), ServiceError> {
    let mut store = state.store.write().await;
    trajet::delete(&mut store, id)
}
