use crate::config::{AllowedOrigins, CorsEnvConfig};
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Translate the CORS config into a tower-http layer.
///
/// With an explicit origin list, methods and headers mirror the preflight
/// request, which stays valid when credentials are enabled.
pub fn build_cors_layer(config: &CorsEnvConfig) -> Result<CorsLayer> {
    match &config.allowed_origins {
        AllowedOrigins::Any => Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)),
        AllowedOrigins::List(origins) => {
            let values = origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid CORS origin: {}", origin))
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list(values))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(config.allow_credentials))
        }
    }
}
