use tracing::{debug, info};

use crate::{
    dto::{request::HoraireCreateRequest, response::HoraireDto},
    error::ServiceError,
    model::{HoraireId, TrajetId},
    store::Store,
};

pub fn get_all(store: &Store) -> Vec<HoraireDto> {
    store.horaires().map(HoraireDto::from).collect()
}

pub fn get(store: &Store, id: HoraireId) -> Result<HoraireDto, ServiceError> {
    store
        .horaire(id)
        .map(HoraireDto::from)
        .ok_or(ServiceError::HoraireNotFound(id))
}

/// Schedules of a trip, earliest departure first.
pub fn for_trajet(store: &Store, trajet_id: TrajetId) -> Result<Vec<HoraireDto>, ServiceError> {
    store
        .trajet(trajet_id)
        .ok_or(ServiceError::TrajetNotFound(trajet_id))?;

    let mut horaires: Vec<_> = store
        .horaires_for_trajet(trajet_id)
        .map(HoraireDto::from)
        .collect();
    horaires.sort_by_key(|h| (h.heure_depart, h.id));
    Ok(horaires)
}

pub fn create(store: &mut Store, request: HoraireCreateRequest) -> Result<HoraireDto, ServiceError> {
    let HoraireCreateRequest {
        heure_depart,
        heure_arrivee,
        trajet_id,
    } = request;

    store
        .trajet(trajet_id)
        .ok_or(ServiceError::TrajetNotFound(trajet_id))?;

    if heure_depart == heure_arrivee {
        return Err(ServiceError::EmptyHoraire(heure_depart));
    }

    let horaire = store.insert_horaire(heure_depart, heure_arrivee, trajet_id);
    info!(
        "Created horaire {} on trajet {trajet_id}: {heure_depart} - {heure_arrivee}",
        horaire.id
    );
    if horaire.runs_overnight() {
        debug!("Horaire {} runs past midnight", horaire.id);
    }
    Ok(HoraireDto::from(horaire))
}

pub fn delete(store: &mut Store, id: HoraireId) -> Result<(), ServiceError> {
    store
        .remove_horaire(id)
        .ok_or(ServiceError::HoraireNotFound(id))?;

    info!("Deleted horaire {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::request::HoraireArretCreateRequest,
        service::{
            fixtures::{line, t},
            horaire_arret,
        },
    };

    #[test]
    fn create_needs_a_known_trajet() {
        let (mut store, ..) = line();
        let err = create(
            &mut store,
            HoraireCreateRequest {
                heure_depart: t(10, 0),
                heure_arrivee: t(11, 0),
                trajet_id: TrajetId::new(7),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::TrajetNotFound(_)));
    }

    #[test]
    fn create_rejects_zero_length_schedule() {
        let (mut store, trajet, ..) = line();
        let err = create(
            &mut store,
            HoraireCreateRequest {
                heure_depart: t(10, 0),
                heure_arrivee: t(10, 0),
                trajet_id: trajet,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::EmptyHoraire(_)));
    }

    #[test]
    fn overnight_schedule_is_accepted() -> Result<(), ServiceError> {
        let (mut store, trajet, ..) = line();
        let dto = create(
            &mut store,
            HoraireCreateRequest {
                heure_depart: t(23, 30),
                heure_arrivee: t(0, 30),
                trajet_id: trajet,
            },
        )?;
        assert_eq!(get(&store, dto.id)?, dto);
        Ok(())
    }

    #[test]
    fn for_trajet_orders_by_departure() -> Result<(), ServiceError> {
        let (mut store, trajet, morning, ..) = line();
        let early = store.insert_horaire(t(6, 0), t(7, 0), trajet).id;

        let ids: Vec<_> = for_trajet(&store, trajet)?.into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![early, morning]);
        Ok(())
    }

    #[test]
    fn delete_drops_passages() -> Result<(), ServiceError> {
        let (mut store, _, horaire, gare, _) = line();
        horaire_arret::create(
            &mut store,
            HoraireArretCreateRequest {
                horaire_id: horaire,
                arret_id: gare,
                heure_passage: t(8, 0),
            },
        )?;

        delete(&mut store, horaire)?;

        assert!(get_all(&store).is_empty());
        assert!(horaire_arret::get_all(&store).is_empty());
        assert!(matches!(
            delete(&mut store, horaire),
            Err(ServiceError::HoraireNotFound(_))
        ));
        Ok(())
    }
}
