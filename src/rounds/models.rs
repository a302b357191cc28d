use crate::map::models::{LatLng, Location};
use serde::{Deserialize, Serialize};

/// One play session: a ground-truth location, at most one retained guess and, once validated,
/// the distance between the two.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    true_location: LatLng,
    image: String,
    guess: Option<LatLng>,
    result_distance_km: Option<u64>,
}

impl Round {
    pub fn new(location: Location) -> Self {
        Round {
            true_location: location.position,
            image: location.image,
            guess: None,
            result_distance_km: None,
        }
    }

    pub fn true_location(&self) -> LatLng {
        self.true_location
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn guess(&self) -> Option<LatLng> {
        self.guess
    }

    pub fn result_distance_km(&self) -> Option<u64> {
        self.result_distance_km
    }

    pub fn status(&self) -> RoundStatus {
        match self.result_distance_km {
            Some(_) => RoundStatus::Scored,
            None => RoundStatus::InProgress,
        }
    }

    pub(super) fn set_guess(&mut self, guess: LatLng) {
        self.guess = Some(guess);
    }

    pub(super) fn record_result(&mut self, distance_km: u64) {
        self.result_distance_km = Some(distance_km);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStatus {
    NotStarted,
    InProgress,
    Scored,
}
