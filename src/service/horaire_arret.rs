use itertools::Itertools;
use tracing::info;

use crate::{
    dto::{request::HoraireArretCreateRequest, response::HoraireArretDto},
    error::ServiceError,
    model::{ArretId, HoraireArret, HoraireId},
    store::Store,
};

/// Every passage, grouped by horaire and ordered along each schedule.
pub fn get_all(store: &Store) -> Vec<HoraireArretDto> {
    store
        .horaires()
        .flat_map(|h| passages(store, h.id))
        .collect()
}

/// Stops served by one horaire, in passage order.
pub fn for_horaire(store: &Store, horaire_id: HoraireId) -> Result<Vec<HoraireArretDto>, ServiceError> {
    store
        .horaire(horaire_id)
        .ok_or(ServiceError::HoraireNotFound(horaire_id))?;
    Ok(passages(store, horaire_id))
}

fn passages(store: &Store, horaire_id: HoraireId) -> Vec<HoraireArretDto> {
    let Some(horaire) = store.horaire(horaire_id) else {
        return vec![];
    };

    store
        .horaire_arrets_for_horaire(horaire_id)
        .sorted_by_key(|p| (horaire.offset_of(p.heure_passage), p.arret_id))
        .filter_map(|p| store.arret(p.arret_id).map(|a| HoraireArretDto::new(p, a)))
        .collect()
}

pub fn create(
    store: &mut Store,
    request: HoraireArretCreateRequest,
) -> Result<HoraireArretDto, ServiceError> {
    let HoraireArretCreateRequest {
        horaire_id,
        arret_id,
        heure_passage,
    } = request;

    let horaire = store
        .horaire(horaire_id)
        .ok_or(ServiceError::HoraireNotFound(horaire_id))?;
    let arret = store
        .arret(arret_id)
        .ok_or(ServiceError::ArretNotFound(arret_id))?;

    if store.horaire_arret(horaire_id, arret_id).is_some() {
        return Err(ServiceError::DuplicateHoraireArret {
            horaire_id,
            arret_id,
        });
    }

    if !horaire.covers(heure_passage) {
        return Err(ServiceError::PassageOutsideHoraire {
            horaire_id,
            heure_passage,
            depart: horaire.heure_depart,
            arrivee: horaire.heure_arrivee,
        });
    }

    let passage = HoraireArret {
        horaire_id,
        arret_id,
        heure_passage,
    };
    let dto = HoraireArretDto::new(&passage, arret);

    store.insert_horaire_arret(passage);

    info!("Horaire {horaire_id} now serves arret {arret_id} at {heure_passage}");
    Ok(dto)
}

pub fn delete(store: &mut Store, horaire_id: HoraireId, arret_id: ArretId) -> Result<(), ServiceError> {
    store
        .remove_horaire_arret(horaire_id, arret_id)
        .ok_or(ServiceError::HoraireArretNotFound {
            horaire_id,
            arret_id,
        })?;

    info!("Horaire {horaire_id} no longer serves arret {arret_id}");
    Ok(())
}
