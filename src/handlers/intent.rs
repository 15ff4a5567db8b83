//! Intent search handler
//!
//! Runs one upstream search per request and answers once the stream has
//! been fully aggregated. There is no partial-response mode.

use axum::{Extension, Json};
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::models::{IntentQuery, IntentResults};
use crate::infrastructure::IntentClient;
use crate::request_span;
use crate::shared::errors::AppError;
use crate::shared::logging::log_intent_request;

/// Gateway application state
#[derive(Clone)]
pub struct GatewayState {
    pub client: IntentClient,
}

impl GatewayState {
    pub fn new(client: IntentClient) -> Self {
        Self { client }
    }
}

/// POST /intent
/// Get products for a natural language intent
pub async fn intent_handler(
    Extension(state): Extension<GatewayState>,
    Json(request): Json<IntentQuery>,
) -> Result<Json<IntentResults>, AppError> {
    let request_id = Uuid::new_v4();
    let span = request_span!(request_id, request.domain.as_str());

    async move {
        log_intent_request(&request.query, &request.domain, request.thread());

        let results = state.client.search(&request).await?;

        tracing::info!(
            first_five = results.first_five_products.len(),
            total = results.all_products.len(),
            "Intent request completed"
        );

        Ok(Json(results))
    }
    .instrument(span)
    .await
}
