use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::shared::errors::AppError;

/// Intent search handler (upstream stream → aggregated products)
pub mod intent;

/// Liveness probe
pub mod health;

pub use health::{health_handler, HealthResponse};
pub use intent::{intent_handler, GatewayState};

/// Build the gateway router with its middleware stack.
///
/// CORS is fully permissive; origin policy is left to whatever fronts the gateway.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/intent", post(intent_handler))
        .route("/health", get(health_handler))
        // State via Extension (NOT with_state)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
}

/// Turn a handler panic into a 500 so the server keeps serving.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(detail).into_response()
}
