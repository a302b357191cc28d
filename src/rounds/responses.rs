use crate::map::models::LatLng;
use crate::rounds::models::{Round, RoundStatus};
use serde::{Deserialize, Serialize};

/// What a player may see of a round. The true location stays hidden until the round is scored.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub status: RoundStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_distance_km: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_location: Option<LatLng>,
}

impl RoundView {
    pub fn not_started() -> Self {
        RoundView {
            status: RoundStatus::NotStarted,
            image: None,
            guess: None,
            result_distance_km: None,
            true_location: None,
        }
    }
}

impl From<&Round> for RoundView {
    fn from(round: &Round) -> Self {
        let status = round.status();
        RoundView {
            status,
            image: Some(round.image().to_string()),
            guess: round.guess(),
            result_distance_km: round.result_distance_km(),
            true_location: match status {
                RoundStatus::Scored => Some(round.true_location()),
                _ => None,
            },
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRoundResponse {
    pub error: bool,
    pub round: RoundView,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRoundResponse {
    pub error: bool,
    pub round: RoundView,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessSavingError>,
    /// `false` when the guess arrived while no round was in progress.
    pub recorded: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessSavingError {
    InvalidCoordinate,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_location: Option<LatLng>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundValidationError {
    NoGuessMade,
}
