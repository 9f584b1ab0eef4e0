use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;
use crate::web::handlers as web_handlers;

/// Create the router with all endpoints (JSON + Web UI)
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    // Web UI routes
    let web_routes = Router::new()
        .route("/", get(web_handlers::index))
        .route("/search", post(web_handlers::search))
        .route("/cuisine/:cuisine_name", get(web_handlers::search_by_cuisine))
        .route(
            "/recipe/offline/:recipe_id",
            get(web_handlers::recipe_details_offline),
        )
        .route(
            "/recipe/online/:online_id",
            get(web_handlers::recipe_details_online),
        )
        .with_state(state.clone());

    // JSON routes
    let api_routes = Router::new()
        .route("/load_more", post(api_handlers::load_more))
        .route("/health", get(api_handlers::health_check))
        .with_state(state);

    // Static file serving
    let static_routes = Router::new().nest_service("/static", ServeDir::new("src/web/static"));

    // Main router with middleware
    Router::new()
        .merge(web_routes)
        .merge(api_routes)
        .merge(static_routes)
        .layer(
            // Request body size limit - forms are tiny
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            // Security headers
            SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; object-src 'none'; base-uri 'self'",
            ),
        ))
        .layer(
            // Compression
            CompressionLayer::new(),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
