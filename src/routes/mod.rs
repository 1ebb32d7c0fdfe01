pub mod analyze;

use std::any::Any as PanicPayload;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::AppError;

/// Build the application router with its middleware stack.
///
/// `body_limit` caps request bodies; oversized bodies surface as a body
/// rejection and go through the generic error response.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let mode = state.mode;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/analyze-image", post(analyze::analyze_image))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn PanicPayload + Send + 'static>| AppError::from_panic(panic).render(mode),
        ))
}
