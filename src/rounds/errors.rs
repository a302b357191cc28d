use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("No guess was placed before validating the round.")]
    NoGuessMade,
}
