use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::{Arret, ArretId, Horaire, HoraireArret, HoraireId, Trajet, TrajetId};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoraireArretDto {
    pub horaire_id: HoraireId,
    pub arret_id: ArretId,
    pub arret_nom: String,
    pub heure_passage: NaiveTime,
}

impl HoraireArretDto {
    pub fn new(passage: &HoraireArret, arret: &Arret) -> Self {
        Self {
            horaire_id: passage.horaire_id,
            arret_id: passage.arret_id,
            arret_nom: arret.nom.clone(),
            heure_passage: passage.heure_passage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoraireDto {
    pub id: HoraireId,
    pub heure_depart: NaiveTime,
    pub heure_arrivee: NaiveTime,
    pub trajet_id: TrajetId,
}

impl From<&Horaire> for HoraireDto {
    fn from(h: &Horaire) -> Self {
        Self {
            id: h.id,
            heure_depart: h.heure_depart,
            heure_arrivee: h.heure_arrivee,
            trajet_id: h.trajet_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArretDto {
    pub id: ArretId,
    pub nom: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Arret> for ArretDto {
    fn from(a: &Arret) -> Self {
        Self {
            id: a.id,
            nom: a.nom.clone(),
            lat: a.lat,
            lon: a.lon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyArretDto {
    pub id: ArretId,
    pub nom: String,
    pub distance_m: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrajetDto {
    pub id: TrajetId,
    pub nom: String,
}

impl From<&Trajet> for TrajetDto {
    fn from(t: &Trajet) -> Self {
        Self {
            id: t.id,
            nom: t.nom.clone(),
        }
    }
}
