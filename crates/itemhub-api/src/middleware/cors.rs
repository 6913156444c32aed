//! CORS layer configuration.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use itemhub_core::config::CorsConfig;

/// Builds the CORS layer for the item routes.
///
/// A `"*"` entry in origins or headers allows any value; entries that do not
/// parse are dropped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if allows_any(&config.allowed_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_entries::<HeaderValue>("origin", &config.allowed_origins))
    };

    let headers = if allows_any(&config.allowed_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_entries::<HeaderName>("header", &config.allowed_headers))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list(parse_entries::<Method>(
            "method",
            &config.allowed_methods,
        )))
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn allows_any(entries: &[String]) -> bool {
    entries.iter().any(|entry| entry == "*")
}

fn parse_entries<T: FromStr>(kind: &'static str, entries: &[String]) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| match entry.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(kind, entry = %entry, "Ignoring invalid CORS entry");
                None
            }
        })
        .collect()
}
