mod arret;
mod horaire;
mod horaire_arret;
mod trajet;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Store;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/horaires/arrets",
            get(horaire_arret::get_all)
                .post(horaire_arret::create)
                .delete(horaire_arret::delete),
        )
        .route("/api/horaires", get(horaire::get_all).post(horaire::create))
        .route("/api/horaires/{id}", get(horaire::get).delete(horaire::delete))
        .route("/api/horaires/{id}/arrets", get(horaire::arrets))
        .route("/api/arrets", get(arret::get_all).post(arret::create))
        .route("/api/arrets/nearby", get(arret::nearby))
        .route("/api/arrets/geojson", get(arret::feature_collection))
        .route("/api/arrets/{id}", get(arret::get).delete(arret::delete))
        .route("/api/trajets", get(trajet::get_all).post(trajet::create))
        .route("/api/trajets/{id}", get(trajet::get).delete(trajet::delete))
        .route("/api/trajets/{id}/horaires", get(trajet::horaires))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
