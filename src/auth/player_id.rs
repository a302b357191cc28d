use rand::distributions::Alphanumeric;
use rand::{self, Rng};

const PUBLIC_ID_LEN: usize = 12;

/// Short random identifier a player's rounds are keyed by.
pub fn generate_public() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PUBLIC_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_ids_are_alphanumeric() {
        let id = generate_public();
        assert_eq!(id.len(), PUBLIC_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn public_ids_differ() {
        assert_ne!(generate_public(), generate_public());
    }
}
