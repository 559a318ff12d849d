//! Mesa JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Document store status
    pub store: String,
}

/// Healthcheck handler
///
/// Reports whether the document store answers. Always 200 so load balancers
/// keep routing while the store recovers.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let store = match state.store.revision().await {
        Ok(_) => "ok",
        Err(error) => {
            warn!("document store health probe failed: {error}");

            "unreachable"
        }
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        store: store.to_string(),
    }))
}
