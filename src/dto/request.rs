use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::{ArretId, HoraireId, TrajetId};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoraireArretCreateRequest {
    pub horaire_id: HoraireId,
    pub arret_id: ArretId,
    pub heure_passage: NaiveTime,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoraireCreateRequest {
    pub heure_depart: NaiveTime,
    pub heure_arrivee: NaiveTime,
    pub trajet_id: TrajetId,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArretCreateRequest {
    pub nom: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrajetCreateRequest {
    pub nom: String,
}

/// Query string of `DELETE /api/horaires/arrets`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoraireArretKey {
    pub horaire_id: HoraireId,
    pub arret_id: ArretId,
}

const DEFAULT_RADIUS_M: f64 = 500.0;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    /// Metres.
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_M
}
