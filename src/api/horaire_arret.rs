use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    api::AppState,
    dto::{
        request::{HoraireArretCreateRequest, HoraireArretKey},
        response::HoraireArretDto,
    },
    error::ServiceError,
    service::horaire_arret,
};

pub async fn get_all(State(state): State<AppState>) -> Json<Vec<HoraireArretDto>> {
    let store = state.store.read().await;
    Json(horaire_arret::get_all(&store))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<HoraireArretCreateRequest>,
) -> Result<Json<HoraireArretDto>, ServiceError> {
    let mut store = state.store.write().await;
    horaire_arret::create(&mut store, request).map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Query(key): Query<HoraireArretKey>,
) -> Result<(), ServiceError> {
    let mut store = state.store.write().await;
    horaire_arret::delete(&mut store, key.horaire_id, key.arret_id)
}
