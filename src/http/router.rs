use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::rounds::HashMapRoundsStorage;
use crate::{auth, health, http::cors, http::middleware, rounds};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapRoundsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new()
        .route("/passcode", post(auth::handlers::issue_passcode))
        .route("/passcode/decode", get(auth::handlers::decode_passcode));
    let rounds_routes = Router::new()
        .route("/", post(rounds::handlers::start))
        .route("/current", get(rounds::handlers::current))
        .route("/current/guess", post(rounds::handlers::save_guess))
        .route("/current/validate", post(rounds::handlers::validate));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/rounds", rounds_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
