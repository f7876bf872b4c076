use geojson::FeatureCollection;
use tracing::info;

use crate::{
    dto::{
        request::{ArretCreateRequest, NearbyQuery},
        response::{ArretDto, NearbyArretDto},
    },
    error::ServiceError,
    geo,
    model::ArretId,
    service::non_blank,
    store::Store,
};

pub fn get_all(store: &Store) -> Vec<ArretDto> {
    store.arrets().map(ArretDto::from).collect()
}

pub fn get(store: &Store, id: ArretId) -> Result<ArretDto, ServiceError> {
    store
        .arret(id)
        .map(ArretDto::from)
        .ok_or(ServiceError::ArretNotFound(id))
}

pub fn create(store: &mut Store, request: ArretCreateRequest) -> Result<ArretDto, ServiceError> {
    let nom = non_blank(&request.nom)?;
    let (lat, lon) = (request.lat, request.lon);
    if !geo::valid_coordinates(lat, lon) {
        return Err(ServiceError::InvalidCoordinates { lat, lon });
    }

    let arret = store.insert_arret(nom, lat, lon);
    info!("Created arret {} ({}) at ({lat}, {lon})", arret.id, arret.nom);
    Ok(ArretDto::from(arret))
}

pub fn delete(store: &mut Store, id: ArretId) -> Result<(), ServiceError> {
    store.remove_arret(id).ok_or(ServiceError::ArretNotFound(id))?;

    info!("Deleted arret {id}");
    Ok(())
}

pub fn nearby(store: &Store, query: NearbyQuery) -> Result<Vec<NearbyArretDto>, ServiceError> {
    let NearbyQuery { lat, lon, radius } = query;
    if !geo::valid_coordinates(lat, lon) {
        return Err(ServiceError::InvalidCoordinates { lat, lon });
    }
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(ServiceError::InvalidRadius(radius));
    }

    let found = store
        .stop_index()
        .stops_within_radius(lat, lon, radius)
        .into_iter()
        .filter_map(|(id, distance_m)| {
            store.arret(id).map(|a| NearbyArretDto {
                id,
                nom: a.nom.clone(),
                distance_m,
            })
        })
        .collect();

    Ok(found)
}

pub fn feature_collection(store: &Store) -> Result<FeatureCollection, ServiceError> {
    Ok(geo::to_feature_collection(store.arrets())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::line;

    #[test]
    fn create_trims_and_validates() -> Result<(), ServiceError> {
        let mut store = Store::new();

        let dto = create(
            &mut store,
            ArretCreateRequest {
                nom: "  Victor Hugo ".to_owned(),
                lat: 45.19,
                lon: 5.72,
            },
        )?;
        assert_eq!(dto.nom, "Victor Hugo");
        assert_eq!(get(&store, dto.id)?, dto);

        let blank = create(
            &mut store,
            ArretCreateRequest {
                nom: "   ".to_owned(),
                lat: 45.0,
                lon: 5.0,
            },
        );
        assert!(matches!(blank, Err(ServiceError::BlankName)));

        let off_map = create(
            &mut store,
            ArretCreateRequest {
                nom: "Nulle part".to_owned(),
                lat: 120.0,
                lon: 5.0,
            },
        );
        assert!(matches!(off_map, Err(ServiceError::InvalidCoordinates { .. })));
        assert_eq!(get_all(&store).len(), 1);
        Ok(())
    }

    #[test]
    fn nearby_finds_close_stops_only() -> Result<(), ServiceError> {
        let (mut store, _, _, gare, mairie) = line();
        store.insert_arret("Loin".to_owned(), 45.5, 5.7);

        let found = nearby(
            &store,
            NearbyQuery {
                lat: 45.1885,
                lon: 5.7245,
                radius: 1_000.0,
            },
        )?;

        let ids: Vec<_> = found.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![gare, mairie]);
        assert!(found[0].distance_m < 1.0);
        Ok(())
    }

    #[test]
    fn nearby_tracks_created_and_deleted_stops() -> Result<(), ServiceError> {
        let (mut store, _, _, gare, _) = line();
        let query = NearbyQuery {
            lat: 45.1885,
            lon: 5.7245,
            radius: 100.0,
        };

        let voisin = create(
            &mut store,
            ArretCreateRequest {
                nom: "Voisin".to_owned(),
                lat: 45.1886,
                lon: 5.7245,
            },
        )?;
        let ids: Vec<_> = nearby(&store, query)?.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![gare, voisin.id]);

        delete(&mut store, gare)?;
        let ids: Vec<_> = nearby(&store, query)?.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![voisin.id]);
        Ok(())
    }

    #[test]
    fn nearby_with_huge_radius_returns_every_stop() -> Result<(), ServiceError> {
        let (mut store, _, _, gare, mairie) = line();
        let antipode = store.insert_arret("Antipode".to_owned(), -45.1885, -174.2755).id;

        let ids: Vec<_> = nearby(
            &store,
            NearbyQuery {
                lat: 45.1885,
                lon: 5.7245,
                radius: 40_000_000.0,
            },
        )?
        .into_iter()
        .map(|a| a.id)
        .collect();
        assert_eq!(ids, vec![gare, mairie, antipode]);
        Ok(())
    }

    #[test]
    fn nearby_rejects_negative_radius() {
        let (store, ..) = line();
        let result = nearby(
            &store,
            NearbyQuery {
                lat: 45.0,
                lon: 5.0,
                radius: -1.0,
            },
        );
        assert!(matches!(result, Err(ServiceError::InvalidRadius(_))));
    }

    #[test]
    fn geojson_lists_every_stop() -> Result<(), ServiceError> {
        let (store, ..) = line();
        assert_eq!(feature_collection(&store)?.features.len(), 2);
        Ok(())
    }
}
