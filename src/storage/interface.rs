use crate::map::models::{LatLng, Location};
use crate::rounds::errors::RoundError;
use crate::rounds::models::{Round, RoundStatus};

/// Per-player round storage. Every operation runs to completion against the player's round
/// before another operation on the same player can observe it.
pub trait IRoundStorage: RoundLifecycleHandler + RoundRepo {}

pub trait RoundLifecycleHandler {
    async fn start_round(&self, player_id: &str, location: Location) -> Round;

    /// Returns whether the guess was recorded.
    async fn set_guess(&self, player_id: &str, guess: LatLng) -> bool;

    /// Returns the scored round.
    async fn validate(&self, player_id: &str) -> Result<Round, RoundError>;
}

pub trait RoundRepo {
    async fn current_round(&self, player_id: &str) -> Option<Round>;

    async fn status(&self, player_id: &str) -> RoundStatus;
}
