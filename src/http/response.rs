//! Outward response mapping.
//!
//! - Malformed body → 400 with a fixed text body
//! - Any remote or encoding failure → 500 with an empty body; the wrapped
//!   error goes to the log stream only
//! - Success → 200 with the JSON body

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::analysis::HandlerError;

/// Body returned for a request that does not decode.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Successful analysis with an already-encoded JSON body.
pub fn analysis_response(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            HandlerError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE).into_response()
            }
            HandlerError::Analysis(err) => {
                tracing::error!(error = %err, "KYC analysis failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
