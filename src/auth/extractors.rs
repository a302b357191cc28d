use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

/// The player behind a request, taken from its `Passcode` header.
pub struct Player {
    pub public_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Player
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get("Passcode") else {
            return Err(rejection(PasscodeExtractionReason::NoPasscodeHeaderProvided));
        };
        let decoded = header
            .to_str()
            .map_err(|_err| ())
            .and_then(passcode::decode);
        match decoded {
            Ok(jwt_payload) => Ok(Player {
                public_id: jwt_payload.public_id,
            }),
            Err(()) => Err(rejection(PasscodeExtractionReason::InvalidPasscode)),
        }
    }
}

fn rejection(reason: PasscodeExtractionReason) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}
