use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

// CORS configuration; no origin list means any origin may call the API
pub fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let allow_origin = match allowed_origins {
        Some(origins) if !origins.iter().any(|o| o == "*") => {
            let origins = origins
                .iter()
                .filter_map(|o| match o.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", o);
                        None
                    }
                })
                .collect::<Vec<_>>();
            tracing::info!("CORS allowed origins: {:?}", origins);
            AllowOrigin::list(origins)
        }
        _ => {
            tracing::info!("CORS allows any origin");
            AllowOrigin::from(Any)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}
