use crate::auth::extractors::Player;
use crate::auth::passcode::{self, JwtPayload};
use crate::auth::player_id;
use crate::auth::responses::{DecodePasscodeResponse, IssuePasscodeResponse};
use axum::response::Json;

pub async fn issue_passcode() -> Json<IssuePasscodeResponse> {
    let payload = JwtPayload {
        public_id: player_id::generate_public(),
    };
    match passcode::issue(&payload) {
        Ok(passcode) => {
            tracing::info!(task = "auth", public_id = %payload.public_id, "Issued a passcode.");
            Json(IssuePasscodeResponse {
                error: false,
                public_id: Some(payload.public_id),
                passcode: Some(passcode),
            })
        }
        Err(err) => {
            tracing::error!(task = "auth", error = %err, "Failed to sign a passcode.");
            Json(IssuePasscodeResponse {
                error: true,
                public_id: None,
                passcode: None,
            })
        }
    }
}

pub async fn decode_passcode(player: Player) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        public_id: player.public_id,
    })
}
