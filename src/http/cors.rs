use crate::cli::Args;
use axum::http::header::{
    ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN, REFERER,
    USER_AGENT,
};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn layer(_args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            // TODO: take allowed origins from `Args` once the frontend is deployed
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://localhost:3000"),
        ])
        .allow_headers([
            USER_AGENT,
            HeaderName::from_static("sec-fetch-mode"),
            REFERER,
            ORIGIN,
            ACCESS_CONTROL_REQUEST_METHOD,
            ACCESS_CONTROL_REQUEST_HEADERS,
            CONTENT_TYPE,
            HeaderName::from_static("passcode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
