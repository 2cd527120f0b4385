use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use hatworks_core::DomainError;

/// Map a domain failure onto the storefront's JSON error envelope.
///
/// `UnknownModel` keeps its full display string as the message so the
/// storefront shows the familiar "Unknown model: X" wording.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        err @ DomainError::UnknownModel(_) => {
            json_error(StatusCode::NOT_FOUND, "unknown_model", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
