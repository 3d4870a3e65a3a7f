use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API; headers and methods match what the quiz frontend sends.
pub fn trivia_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
