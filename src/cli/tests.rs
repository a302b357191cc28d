use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed co construct fake listen address."),
        jwt_signing_key: String::from("testKey"),
        locations: None,
        log_filter: String::from("geogamer_server=debug"),
    }
}

#[test]
fn test_parse_defaults() {
    let args = Args::try_parse_from(["geogamer-server", "--jwt-signing-key", "secret"])
        .expect("Failed to parse minimal arguments.");

    assert_eq!(args.listen_address, SocketAddr::from_str("0.0.0.0:3030").unwrap());
    assert_eq!(args.jwt_signing_key, "secret");
    assert_eq!(args.locations, None);
    assert_eq!(args.log_filter, "geogamer_server=info");
}

#[test]
fn test_signing_key_is_required() {
    assert!(Args::try_parse_from(["geogamer-server"]).is_err());
}
