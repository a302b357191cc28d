use crate::map::models::{LatLng, Location};
use crate::rounds::controller::RoundController;
use crate::rounds::errors::RoundError;
use crate::rounds::models::{Round, RoundStatus};
use crate::storage::interface::{IRoundStorage, RoundLifecycleHandler, RoundRepo};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapRoundsStorage {
    storage: Arc<RwLock<HashMap<String, RoundController>>>,
}

impl IRoundStorage for HashMapRoundsStorage {}

impl RoundLifecycleHandler for HashMapRoundsStorage {
    async fn start_round(&self, player_id: &str, location: Location) -> Round {
        self.storage
            .write()
            .await
            .entry(player_id.to_string())
            .or_default()
            .start_round(location)
            .clone()
    }

    async fn set_guess(&self, player_id: &str, guess: LatLng) -> bool {
        self.storage
            .write()
            .await
            .get_mut(player_id)
            .map_or(false, |controller| controller.set_guess(guess))
    }

    async fn validate(&self, player_id: &str) -> Result<Round, RoundError> {
        self.storage
            .write()
            .await
            .get_mut(player_id)
            .ok_or(RoundError::NoGuessMade)?
            .validate()
            .cloned()
    }
}

impl RoundRepo for HashMapRoundsStorage {
    async fn current_round(&self, player_id: &str) -> Option<Round> {
        self.storage
            .read()
            .await
            .get(player_id)
            .and_then(RoundController::round)
            .cloned()
    }

    async fn status(&self, player_id: &str) -> RoundStatus {
        self.storage
            .read()
            .await
            .get(player_id)
            .map_or(RoundStatus::NotStarted, RoundController::status)
    }
}
