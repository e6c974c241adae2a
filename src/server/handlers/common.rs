pub use crate::server::app_state::AppState;

pub use axum::extract::{rejection::QueryRejection, Query, State};
pub use axum::http::StatusCode;
pub use axum::{response::IntoResponse, Json};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
use tracing::debug;

use crate::{dataset::ProvinceNotFound, graph::GraphError};

pub(super) fn debug_to_err_response<T: std::fmt::Debug>(
    err: T,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"status": "error", "message": format!("{err:?}")})),
    )
}

pub(super) fn not_found_response(err: ProvinceNotFound) -> (StatusCode, Json<serde_json::Value>) {
    debug!("Lookup error: {err}");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"status": "error", "message": err.to_string()})),
    )
}

pub(super) fn invalid_input_response(err: GraphError) -> (StatusCode, Json<serde_json::Value>) {
    debug!("Rejected graph request: {err}");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"status": "error", "message": err.to_string()})),
    )
}

pub type HandlerErr = (StatusCode, Json<serde_json::Value>);
pub type HandlerResult<T> = Result<T, HandlerErr>;

#[macro_export]
macro_rules! bad_request_json {
    ($message:expr) => {
        Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"status": "error", "message": $message})),
        ))
    };
}
pub use bad_request_json;
