use std::fmt;

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct TrajetId(u64);

impl TrajetId {
    pub fn new(idx: u64) -> Self {
        Self(idx)
    }
}

impl fmt::Display for TrajetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct ArretId(u64);

impl ArretId {
    pub fn new(idx: u64) -> Self {
        Self(idx)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct HoraireId(u64);

impl HoraireId {
    pub fn new(idx: u64) -> Self {
        Self(idx)
    }
}

impl fmt::Display for HoraireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Trajet {
    pub id: TrajetId,
    pub nom: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Arret {
    pub id: ArretId,
    pub nom: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Horaire {
    pub id: HoraireId,
    pub heure_depart: NaiveTime,
    pub heure_arrivee: NaiveTime,
    pub trajet_id: TrajetId,
}

impl Horaire {
    /// Time elapsed since departure when the clock reads `time`.
    ///
    /// Times earlier than the departure are taken to be on the following day,
    /// so a schedule leaving at 23:00 reaches 00:30 after 1h30.
    pub fn offset_of(&self, time: NaiveTime) -> TimeDelta {
        if time >= self.heure_depart {
            time - self.heure_depart
        } else {
            time - self.heure_depart + TimeDelta::days(1)
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.offset_of(self.heure_arrivee)
    }

    pub fn runs_overnight(&self) -> bool {
        self.heure_arrivee < self.heure_depart
    }

    /// Whether a vehicle on this schedule can pass a stop at `time`.
    pub fn covers(&self, time: NaiveTime) -> bool {
        self.offset_of(time) <= self.duration()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HoraireArret {
    pub horaire_id: HoraireId,
    pub arret_id: ArretId,
    pub heure_passage: NaiveTime,
}
