use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// Newline-delimited JSON file with `{"lat", "lng", "image"}` entries. Every round is played
    /// at the same fixed location when omitted.
    #[arg(long)]
    pub locations: Option<PathBuf>,
    #[arg(long)]
    #[arg(default_value = "geogamer_server=info")]
    pub log_filter: String,
}
