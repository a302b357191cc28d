use crate::app_context::{AppContext, RequestContext};
use crate::map::{self, models::LatLng};
use crate::rounds::errors::RoundError;
use crate::rounds::responses::{
    CurrentRoundResponse, GuessSavingError, RoundValidationError, RoundView, SaveGuessResponse,
    StartRoundResponse, ValidateRoundResponse,
};
use crate::storage::interface::IRoundStorage;

pub struct RoundsHttpHandler<'a, RS: IRoundStorage> {
    app_context: AppContext<RS>,
    request_context: &'a RequestContext,
}

impl<'a, RS: IRoundStorage> RoundsHttpHandler<'a, RS> {
    pub fn new(app_context: AppContext<RS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn start(&self) -> StartRoundResponse {
        let location = self.app_context.locations.next_location();
        let round = self
            .app_context
            .rounds
            .start_round(&self.request_context.public_id, location)
            .await;
        tracing::info!(
            task = "round",
            public_id = %self.request_context.public_id,
            image = %round.image(),
            "Started a new round."
        );
        StartRoundResponse {
            error: false,
            round: RoundView::from(&round),
        }
    }

    pub async fn current(&self) -> CurrentRoundResponse {
        let round = self
            .app_context
            .rounds
            .current_round(&self.request_context.public_id)
            .await;
        CurrentRoundResponse {
            error: false,
            round: round
                .as_ref()
                .map_or_else(RoundView::not_started, RoundView::from),
        }
    }

    pub async fn save_guess(&self, guess: LatLng) -> SaveGuessResponse {
        let guess = match guess.validated() {
            Ok(guess) => guess,
            Err(err) => {
                tracing::debug!(
                    task = "round",
                    public_id = %self.request_context.public_id,
                    "Rejected guess: {err}"
                );
                return SaveGuessResponse {
                    error: true,
                    error_code: Some(GuessSavingError::InvalidCoordinate),
                    recorded: false,
                };
            }
        };
        let recorded = self
            .app_context
            .rounds
            .set_guess(&self.request_context.public_id, guess)
            .await;
        if !recorded {
            let status = self
                .app_context
                .rounds
                .status(&self.request_context.public_id)
                .await;
            tracing::debug!(
                task = "round",
                public_id = %self.request_context.public_id,
                status = ?status,
                "Ignored a guess made while no round was in progress."
            );
        }
        SaveGuessResponse {
            error: false,
            error_code: None,
            recorded,
        }
    }

    pub async fn validate(&self) -> ValidateRoundResponse {
        match self
            .app_context
            .rounds
            .validate(&self.request_context.public_id)
            .await
        {
            Ok(round) => {
                let distance_km = round.result_distance_km();
                tracing::info!(
                    task = "round",
                    public_id = %self.request_context.public_id,
                    distance_km = ?distance_km,
                    "Scored a round."
                );
                ValidateRoundResponse {
                    error: false,
                    error_code: None,
                    distance_km,
                    points: distance_km.map(|distance| map::points(distance as f64)),
                    true_location: Some(round.true_location()),
                }
            }
            Err(RoundError::NoGuessMade) => {
                tracing::debug!(
                    task = "round",
                    public_id = %self.request_context.public_id,
                    "Validation requested before a guess was placed."
                );
                ValidateRoundResponse {
                    error: true,
                    error_code: Some(RoundValidationError::NoGuessMade),
                    distance_km: None,
                    points: None,
                    true_location: None,
                }
            }
        }
    }
}
