use tracing::info;

use crate::{
    dto::{request::TrajetCreateRequest, response::TrajetDto},
    error::ServiceError,
    model::TrajetId,
    service::non_blank,
    store::Store,
};

pub fn get_all(store: &Store) -> Vec<TrajetDto> {
    store.trajets().map(TrajetDto::from).collect()
}

pub fn get(store: &Store, id: TrajetId) -> Result<TrajetDto, ServiceError> {
    store
        .trajet(id)
        .map(TrajetDto::from)
        .ok_or(ServiceError::TrajetNotFound(id))
}

pub fn create(store: &mut Store, request: TrajetCreateRequest) -> Result<TrajetDto, ServiceError> {
    let nom = non_blank(&request.nom)?;
    let trajet = store.insert_trajet(nom);
    info!("Created trajet {} ({})", trajet.id, trajet.nom);
    Ok(TrajetDto::from(trajet))
}

/// Deletes the trip together with its schedules and their passages.
pub fn delete(store: &mut Store, id: TrajetId) -> Result<(), ServiceError> {
    store
        .remove_trajet(id)
        .ok_or(ServiceError::TrajetNotFound(id))?;

    info!("Deleted trajet {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{fixtures::line, horaire};

    #[test]
    fn create_and_fetch() -> Result<(), ServiceError> {
        let mut store = Store::new();
        let dto = create(
            &mut store,
            TrajetCreateRequest {
                nom: "Grenoble - Chambery".to_owned(),
            },
        )?;
        assert_eq!(get(&store, dto.id)?.nom, "Grenoble - Chambery");
        assert!(matches!(
            create(&mut store, TrajetCreateRequest { nom: String::new() }),
            Err(ServiceError::BlankName)
        ));
        Ok(())
    }

    #[test]
    fn delete_cascades_to_horaires() -> Result<(), ServiceError> {
        let (mut store, trajet, ..) = line();

        delete(&mut store, trajet)?;

        assert!(get_all(&store).is_empty());
        assert!(horaire::get_all(&store).is_empty());
        assert!(matches!(
            horaire::for_trajet(&store, trajet),
            Err(ServiceError::TrajetNotFound(_))
        ));
        Ok(())
    }
}
