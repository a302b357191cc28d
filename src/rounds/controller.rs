use crate::map::distance_km;
use crate::map::models::{LatLng, Location};
use crate::rounds::errors::RoundError;
use crate::rounds::models::{Round, RoundStatus};

/// Owns a single player's current round and guards its state transitions:
///
/// ```text
/// NotStarted --start_round--> InProgress --validate--> Scored --start_round--> InProgress
/// ```
///
/// Guesses are only accepted while the round is in progress; once a round is scored its guess
/// is locked until the next `start_round`.
#[derive(Clone, Debug, Default)]
pub struct RoundController {
    round: Option<Round>,
}

impl RoundController {
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn status(&self) -> RoundStatus {
        self.round
            .as_ref()
            .map_or(RoundStatus::NotStarted, Round::status)
    }

    /// Discards whatever the previous round held and starts over at `location`.
    pub fn start_round(&mut self, location: Location) -> &Round {
        self.round.insert(Round::new(location))
    }

    /// Records `point` as the guess of the current round, replacing any earlier one.
    /// Returns `false` without touching anything when no round is in progress.
    pub fn set_guess(&mut self, point: LatLng) -> bool {
        match self.round.as_mut() {
            Some(round) if round.status() == RoundStatus::InProgress => {
                round.set_guess(point);
                true
            }
            _ => false,
        }
    }

    /// Scores the stored guess against the true location, rounded to whole kilometers, and
    /// returns the scored round. Validating a scored round again recomputes the same value.
    pub fn validate(&mut self) -> Result<&Round, RoundError> {
        let round = self.round.as_mut().ok_or(RoundError::NoGuessMade)?;
        let guess = round.guess().ok_or(RoundError::NoGuessMade)?;
        let distance = distance_km(guess, round.true_location()).round() as u64;
        round.record_result(distance);
        Ok(&*round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: LatLng = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    const LONDON: LatLng = LatLng {
        lat: 51.5074,
        lng: -0.1278,
    };
    const BERLIN: LatLng = LatLng {
        lat: 52.52,
        lng: 13.405,
    };

    fn validated_distance(controller: &mut RoundController) -> Result<u64, RoundError> {
        controller.validate().map(|round| {
            round
                .result_distance_km()
                .expect("A scored round carries its distance.")
        })
    }

    fn location(position: LatLng) -> Location {
        Location {
            position,
            image: String::from("/test.jpg"),
        }
    }

    #[test]
    fn starts_not_started() {
        let controller = RoundController::default();
        assert_eq!(controller.status(), RoundStatus::NotStarted);
        assert!(controller.round().is_none());
    }

    #[test]
    fn start_round_yields_fresh_round() {
        let mut controller = RoundController::default();

        let round = controller.start_round(location(PARIS));

        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.true_location(), PARIS);
        assert_eq!(round.image(), "/test.jpg");
        assert_eq!(round.guess(), None);
        assert_eq!(round.result_distance_km(), None);
    }

    #[test]
    fn start_round_discards_previous_round() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));
        controller.set_guess(LONDON);
        controller.validate().expect("Guess was placed.");

        let round = controller.start_round(location(BERLIN));

        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.true_location(), BERLIN);
        assert_eq!(round.guess(), None);
        assert_eq!(round.result_distance_km(), None);
    }

    #[test]
    fn start_round_discards_round_in_progress() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));
        assert!(controller.set_guess(LONDON));

        let round = controller.start_round(location(BERLIN));

        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.true_location(), BERLIN);
        assert_eq!(round.guess(), None);
        assert_eq!(round.result_distance_km(), None);
        assert_eq!(
            validated_distance(&mut controller),
            Err(RoundError::NoGuessMade)
        );
    }

    #[test]
    fn guess_before_start_is_ignored() {
        let mut controller = RoundController::default();

        assert!(!controller.set_guess(LONDON));
        assert_eq!(controller.status(), RoundStatus::NotStarted);
    }

    #[test]
    fn validate_without_guess_fails() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));

        assert_eq!(validated_distance(&mut controller), Err(RoundError::NoGuessMade));
        assert_eq!(controller.status(), RoundStatus::InProgress);
        assert_eq!(controller.round().and_then(Round::result_distance_km), None);
    }

    #[test]
    fn validate_before_start_fails() {
        let mut controller = RoundController::default();

        assert_eq!(validated_distance(&mut controller), Err(RoundError::NoGuessMade));
        assert_eq!(controller.status(), RoundStatus::NotStarted);
    }

    #[test]
    fn validate_scores_the_guess() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));
        controller.set_guess(LONDON);

        let distance = validated_distance(&mut controller).expect("Guess was placed.");

        assert_eq!(distance, distance_km(LONDON, PARIS).round() as u64);
        assert_eq!(distance, 344);
        assert_eq!(controller.status(), RoundStatus::Scored);
        assert_eq!(
            controller.round().and_then(Round::result_distance_km),
            Some(344)
        );
    }

    #[test]
    fn revalidating_is_idempotent() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));
        controller.set_guess(BERLIN);

        let first = validated_distance(&mut controller);
        let second = validated_distance(&mut controller);

        assert_eq!(first, second);
        assert_eq!(controller.status(), RoundStatus::Scored);
    }

    #[test]
    fn last_guess_wins() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));

        assert!(controller.set_guess(BERLIN));
        assert!(controller.set_guess(LONDON));

        assert_eq!(validated_distance(&mut controller), Ok(344));
    }

    #[test]
    fn guess_is_locked_once_scored() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));
        controller.set_guess(LONDON);
        controller.validate().expect("Guess was placed.");

        assert!(!controller.set_guess(BERLIN));

        let round = controller.round().expect("Round was started.");
        assert_eq!(round.guess(), Some(LONDON));
        assert_eq!(validated_distance(&mut controller), Ok(344));
    }

    #[test]
    fn guess_is_stored_unvalidated() {
        let mut controller = RoundController::default();
        controller.start_round(location(PARIS));
        let odd = LatLng {
            lat: 120.0,
            lng: 500.0,
        };

        assert!(controller.set_guess(odd));
        assert_eq!(controller.round().and_then(Round::guess), Some(odd));
    }
}
