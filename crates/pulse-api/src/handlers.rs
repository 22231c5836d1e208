//! Route handlers for the demo service.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::field::Empty;
use tracing::info_span;

use crate::ApiState;

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "hello": "world" }))
}

/// GET /items/{id}
///
/// Returns a synthetic catalog item. Roughly one request in ten fails
/// on purpose so the trace pipeline has error spans to show.
pub async fn get_item(Path(item_id): Path<u64>) -> impl IntoResponse {
    if fastrand::f64() < 0.1 {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": "random server error" })),
        )
            .into_response();
    }

    Json(serde_json::json!({
        "item_id": item_id,
        "name": format!("Item {item_id}"),
    }))
    .into_response()
}

/// GET /health
///
/// Runs one probe cycle and reports aggregate health. Always 200: a
/// broken history store downgrades the reported status, it never turns
/// into a 5xx. The summary fields are mirrored onto the span as plain
/// scalar attributes for the trace exporter.
pub async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let span = info_span!(
        "health_probe",
        probe.status = Empty,
        probe.record_count = Empty,
        probe.average_latency_ms = Empty,
    );

    let summary = {
        let _guard = span.enter();
        state.recorder.record_and_report()
    };
    summary.record_span_attributes(&span);

    Json(summary)
}
