// HTTP API (axum)
pub mod http;
