use std::{f64::consts::PI, fmt};

use geojson::{Feature, FeatureCollection, ser::serialize_geometry};
use itertools::Itertools;
use kiddo::{KdTree, SquaredEuclidean};
use serde::Serialize;

use crate::model::{Arret, ArretId};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArretFeature<'a> {
    id: ArretId,
    nom: &'a str,
    #[serde(serialize_with = "serialize_geometry")]
    geometry: geo_types::Point<f64>,
}

/// Spatial index over stops, on the unit sphere so that chord distance maps
/// monotonically to great-circle distance.
pub struct StopIndex {
    tree: KdTree<f64, 3>,
}

impl Default for StopIndex {
    fn default() -> Self {
        Self {
            tree: KdTree::new(),
        }
    }
}

impl fmt::Debug for StopIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}

impl<'a> FromIterator<&'a Arret> for StopIndex {
    fn from_iter<I: IntoIterator<Item = &'a Arret>>(arrets: I) -> Self {
        let mut index = Self::default();
        arrets.into_iter().for_each(|a| index.insert(a));
        index
    }
}

impl StopIndex {
    pub fn insert(&mut self, arret: &Arret) {
        self.tree
            .add(&unit_vector(arret.lat, arret.lon), arret.id.get());
    }

    pub fn remove(&mut self, arret: &Arret) {
        self.tree
            .remove(&unit_vector(arret.lat, arret.lon), arret.id.get());
    }

    pub fn len(&self) -> usize {
        self.tree.size() as usize
    }

    /// Stops within `distance` metres of the point, nearest first.
    pub fn stops_within_radius(&self, lat: f64, lon: f64, distance: f64) -> Vec<(ArretId, f64)> {
        self.tree
            .within::<SquaredEuclidean>(&unit_vector(lat, lon), squared_chord(distance))
            .into_iter()
            .map(|x| (ArretId::new(x.item), arc_length(x.distance)))
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .collect()
    }
}

pub fn valid_coordinates(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

const EARTH_RADIUS_M: f64 = 6_371_008.8;
const HALF_CIRCUMFERENCE_M: f64 = PI * EARTH_RADIUS_M;

fn unit_vector(lat_deg: f64, lon_deg: f64) -> [f64; 3] {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Squared straight-line distance between two unit-sphere points `arc_m`
/// apart along the surface.
fn squared_chord(arc_m: f64) -> f64 {
    // Beyond the antipode the chord shrinks again; the whole sphere is in range.
    if arc_m >= HALF_CIRCUMFERENCE_M {
        return f64::INFINITY;
    }
    let chord = 2.0 * (arc_m / (2.0 * EARTH_RADIUS_M)).sin();
    chord * chord
}

/// Surface distance in metres for a squared unit-sphere chord.
fn arc_length(squared_chord: f64) -> f64 {
    let half_chord = (squared_chord.sqrt() / 2.0).min(1.0);
    2.0 * EARTH_RADIUS_M * half_chord.asin()
}

pub fn to_feature_collection<'a, I>(arrets: I) -> anyhow::Result<FeatureCollection>
where
    I: IntoIterator<Item = &'a Arret>,
{
    let features = arrets
        .into_iter()
        .map(|a| {
            geojson::ser::to_feature(ArretFeature {
                id: a.id,
                nom: &a.nom,
                geometry: geo_types::Point::new(a.lon, a.lat),
            })
        })
        .collect::<Result<Vec<Feature>, geojson::Error>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
