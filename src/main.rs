use clap::Parser;
use map::locations::{FixedLocation, LocationPool, LocationProvider};
use std::sync::Arc;

mod app_context;
mod auth;
mod cli;
mod health;
mod http;
mod logging;
mod map;
mod rounds;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    auth::init(&args);

    let locations: Arc<dyn LocationProvider> = match &args.locations {
        Some(path) => {
            let pool = LocationPool::from_file(path).unwrap_or_else(|err| {
                tracing::error!("{err}");
                std::process::exit(1);
            });
            tracing::info!("Loaded {} locations from {}.", pool.len(), path.display());
            Arc::new(pool)
        }
        None => {
            tracing::warn!("No locations file given, every round is played at the same place.");
            Arc::new(FixedLocation::default())
        }
    };

    let app_context = app_context::init(locations);
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to start the HTTP server.");
}
