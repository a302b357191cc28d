use crate::auth::JWT_SIGNING_KEY;
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct JwtPayload {
    pub public_id: String,
}

pub fn decode(passcode: &str) -> Result<JwtPayload, ()> {
    passcode
        .verify_with_key(
            JWT_SIGNING_KEY
                .get()
                .expect("`JWT_SIGNING_KEY` was not initialized."),
        )
        .map_err(|_err| ())
}

pub fn issue(payload: &JwtPayload) -> Result<String, jwt::Error> {
    payload.sign_with_key(
        JWT_SIGNING_KEY
            .get()
            .expect("`JWT_SIGNING_KEY` was not initialized."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth;
    use crate::cli::tests::fake_args;

    #[test]
    fn issued_passcode_decodes_to_its_payload() {
        auth::init(&fake_args());
        let payload = JwtPayload {
            public_id: String::from("roundTripper"),
        };

        let passcode = issue(&payload).expect("Failed to sign the passcode.");

        assert_eq!(decode(&passcode), Ok(payload));
    }
}
