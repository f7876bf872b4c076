use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveTime;
use serde_json::json;
use thiserror::Error;

use crate::model::{ArretId, HoraireId, TrajetId};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("trajet {0} not found")]
    TrajetNotFound(TrajetId),
    #[error("arret {0} not found")]
    ArretNotFound(ArretId),
    #[error("horaire {0} not found")]
    HoraireNotFound(HoraireId),
    #[error("arret {arret_id} is not served by horaire {horaire_id}")]
    HoraireArretNotFound {
        horaire_id: HoraireId,
        arret_id: ArretId,
    },
    #[error("arret {arret_id} is already served by horaire {horaire_id}")]
    DuplicateHoraireArret {
        horaire_id: HoraireId,
        arret_id: ArretId,
    },
    #[error("passage at {heure_passage} is outside horaire {horaire_id} ({depart} - {arrivee})")]
    PassageOutsideHoraire {
        horaire_id: HoraireId,
        heure_passage: NaiveTime,
        depart: NaiveTime,
        arrivee: NaiveTime,
    },
    #[error("departure and arrival times are both {0}")]
    EmptyHoraire(NaiveTime),
    #[error("name must not be blank")]
    BlankName,
    #[error("invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("invalid search radius {0}")]
    InvalidRadius(f64),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::TrajetNotFound(_)
            | ServiceError::ArretNotFound(_)
            | ServiceError::HoraireNotFound(_)
            | ServiceError::HoraireArretNotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::DuplicateHoraireArret { .. } => StatusCode::CONFLICT,
            ServiceError::PassageOutsideHoraire { .. }
            | ServiceError::EmptyHoraire(_)
            | ServiceError::BlankName
            | ServiceError::InvalidCoordinates { .. }
            | ServiceError::InvalidRadius(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:#}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
