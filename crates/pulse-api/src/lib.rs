//! pulse-api — REST API for the Pulse tracing demo service.
//!
//! Thin glue over the health recorder plus the synthetic catalog
//! endpoints the demo uses to generate interesting traces.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/` | Hello-world greeting |
//! | GET | `/items/{id}` | Synthetic catalog item (fails ~10% of the time) |
//! | GET | `/health` | Run a probe cycle, report aggregate health |

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use pulse_health::HealthRecorder;
use pulse_history::HistoryStore;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub recorder: Arc<HealthRecorder<HistoryStore>>,
}

/// Build the demo service router.
pub fn build_router(recorder: Arc<HealthRecorder<HistoryStore>>) -> Router {
    let state = ApiState { recorder };

    Router::new()
        .route("/", get(handlers::root))
        .route("/items/{id}", get(handlers::get_item))
        .route("/health", get(handlers::health))
        .with_state(state)
}
