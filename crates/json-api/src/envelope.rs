//! Response envelope.
//!
//! Every route answers with the same shape, success or failure:
//! `{ "statusCode": …, "isSuccess": …, "errors": […], "result": … }`.
//! The envelope is built once at the return site of a handler and never
//! mutated afterwards.

use salvo::{Response, Scribe, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

/// Successful response envelope carrying a result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<T> {
    status_code: u16,
    is_success: bool,
    errors: Vec<String>,
    result: Option<T>,
}

impl<T: Serialize + Send> Envelope<T> {
    pub(crate) fn ok(result: T) -> Self {
        Self::with_status(StatusCode::OK, result)
    }

    pub(crate) fn created(result: T) -> Self {
        Self::with_status(StatusCode::CREATED, result)
    }

    fn with_status(status: StatusCode, result: T) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }
}

impl<T: Serialize + Send> Scribe for Envelope<T> {
    fn render(self, res: &mut Response) {
        res.status_code(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        );
        res.render(Json(self));
    }
}

/// Failure rendered in the same envelope shape, with an empty result.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    errors: Vec<String>,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            errors: vec![message.into()],
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Opaque 500; the cause belongs in the log, not the body.
    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    /// Log the underlying error and answer with an opaque 500.
    pub(crate) fn internal_from(context: &str, error: &dyn std::fmt::Display) -> Self {
        error!("{context}: {error}");

        Self::internal()
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        let envelope = Envelope::<()> {
            status_code: self.status.as_u16(),
            is_success: false,
            errors: self.errors,
            result: None,
        };

        envelope.render(res);
    }
}
