mod snapshot;

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{
    geo::StopIndex,
    model::{Arret, ArretId, Horaire, HoraireArret, HoraireId, Trajet, TrajetId},
};

#[derive(Debug, Serialize, Deserialize)]
struct Sequence(u64);

impl Default for Sequence {
    fn default() -> Self {
        Self(1)
    }
}

impl Sequence {
    fn next(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// In-memory tables for trips, stops, schedules and their stop passages.
///
/// Removals cascade: a trajet takes its horaires with it, and a horaire or an
/// arret takes its passages with it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    trajets: BTreeMap<TrajetId, Trajet>,
    arrets: BTreeMap<ArretId, Arret>,
    horaires: BTreeMap<HoraireId, Horaire>,
    horaire_arrets: BTreeMap<(HoraireId, ArretId), HoraireArret>,
    trajet_seq: Sequence,
    arret_seq: Sequence,
    horaire_seq: Sequence,
    /// Rebuilt from `arrets` when a snapshot is loaded.
    #[serde(skip)]
    stop_index: StopIndex,
}

impl Store {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert_trajet(&mut self, nom: String) -> &Trajet {
        let id = TrajetId::new(self.trajet_seq.next());
        self.trajets.entry(id).or_insert(Trajet { id, nom })
    }

    pub fn trajet(&self, id: TrajetId) -> Option<&Trajet> {
        self.trajets.get(&id)
    }

    pub fn trajets(&self) -> impl Iterator<Item = &Trajet> {
        self.trajets.values()
    }

    pub fn remove_trajet(&mut self, id: TrajetId) -> Option<Trajet> {
        let trajet = self.trajets.remove(&id)?;
        let horaires: Vec<HoraireId> = self
            .horaires_for_trajet(id)
            .map(|h| h.id)
            .collect();
        for horaire_id in horaires {
            self.remove_horaire(horaire_id);
        }
        Some(trajet)
    }

    pub fn insert_arret(&mut self, nom: String, lat: f64, lon: f64) -> &Arret {
        let id = ArretId::new(self.arret_seq.next());
        let arret = self.arrets.entry(id).or_insert(Arret { id, nom, lat, lon });
        self.stop_index.insert(arret);
        arret
    }

    pub fn arret(&self, id: ArretId) -> Option<&Arret> {
        self.arrets.get(&id)
    }

    pub fn arrets(&self) -> impl Iterator<Item = &Arret> {
        self.arrets.values()
    }

    pub fn stop_index(&self) -> &StopIndex {
        &self.stop_index
    }

    pub fn remove_arret(&mut self, id: ArretId) -> Option<Arret> {
        let arret = self.arrets.remove(&id)?;
        self.stop_index.remove(&arret);
        self.horaire_arrets.retain(|&(_, arret_id), _| arret_id != id);
        Some(arret)
    }

    pub fn insert_horaire(
        &mut self,
        heure_depart: NaiveTime,
        heure_arrivee: NaiveTime,
        trajet_id: TrajetId,
    ) -> &Horaire {
        let id = HoraireId::new(self.horaire_seq.next());
        self.horaires.entry(id).or_insert(Horaire {
            id,
            heure_depart,
            heure_arrivee,
            trajet_id,
        })
    }

    pub fn horaire(&self, id: HoraireId) -> Option<&Horaire> {
        self.horaires.get(&id)
    }

    pub fn horaires(&self) -> impl Iterator<Item = &Horaire> {
        self.horaires.values()
    }

    pub fn horaires_for_trajet(&self, trajet_id: TrajetId) -> impl Iterator<Item = &Horaire> {
        self.horaires
            .values()
            .filter(move |h| h.trajet_id == trajet_id)
    }

    pub fn remove_horaire(&mut self, id: HoraireId) -> Option<Horaire> {
        let horaire = self.horaires.remove(&id)?;
        self.horaire_arrets
            .retain(|&(horaire_id, _), _| horaire_id != id);
        Some(horaire)
    }

    /// Returns `false` without touching the table when the pair is already linked.
    pub fn insert_horaire_arret(&mut self, passage: HoraireArret) -> bool {
        let key = (passage.horaire_id, passage.arret_id);
        if self.horaire_arrets.contains_key(&key) {
            return false;
        }
        self.horaire_arrets.insert(key, passage);
        true
    }

    pub fn horaire_arret(&self, horaire_id: HoraireId, arret_id: ArretId) -> Option<&HoraireArret> {
        self.horaire_arrets.get(&(horaire_id, arret_id))
    }

    pub fn horaire_arrets(&self) -> impl Iterator<Item = &HoraireArret> {
        self.horaire_arrets.values()
    }

    pub fn horaire_arrets_for_horaire(
        &self,
        horaire_id: HoraireId,
    ) -> impl Iterator<Item = &HoraireArret> {
        self.horaire_arrets
            .range((horaire_id, ArretId::new(0))..=(horaire_id, ArretId::new(u64::MAX)))
            .map(|(_, passage)| passage)
    }

    pub fn remove_horaire_arret(
        &mut self,
        horaire_id: HoraireId,
        arret_id: ArretId,
    ) -> Option<HoraireArret> {
        self.horaire_arrets.remove(&(horaire_id, arret_id))
    }
}
