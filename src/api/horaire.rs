use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::AppState,
    dto::{
        request::HoraireCreateRequest,
        response::{HoraireArretDto, HoraireDto},
    },
    error::ServiceError,
    model::HoraireId,
    service::{horaire, horaire_arret},
};

pub async fn get_all(State(state): State<AppState>) -> Json<Vec<HoraireDto>> {
    let store = state.store.read().await;
    Json(horaire::get_all(&store))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<HoraireId>,
) -> Result<Json<HoraireDto>, ServiceError> {
    let store = state.store.read().await;
    horaire::get(&store, id).map(Json)
}

pub async fn arrets(
    State(state): State<AppState>,
    Path(id): Path<HoraireId>,
) -> Result<Json<Vec<HoraireArretDto>>, ServiceError> {
    let store = state.store.read().await;
    horaire_arret::for_horaire(&store, id).map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<HoraireCreateRequest>,
) -> Result<Json<HoraireDto>, ServiceError> {
    let mut store = state.store.write().await;
    horaire::create(&mut store, request).map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<HoraireId>,
) -> Result<(), ServiceError> {
    let mut store = state.store.write().await;
    horaire::delete(&mut store, id)
}
