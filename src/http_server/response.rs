//! # Response Envelope
//!
//! Every book endpoint answers with
//! `{"status": "success" | "fail", "message": "...", "data": {...}}`.
//! `data` is left out when it is absent or an empty object.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::books::BookError;

/// Envelope `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Fail,
}

/// Serialized envelope body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeBody {
    pub status: EnvelopeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Response envelope builder
///
/// ```ignore
/// Envelope::success()
///     .code(StatusCode::CREATED)
///     .message("Buku berhasil ditambahkan")
///     .data(json!({ "bookId": id }))
/// ```
#[derive(Debug, Clone)]
pub struct Envelope {
    code: StatusCode,
    body: EnvelopeBody,
}

impl Envelope {
    /// Success envelope, 200 unless overridden
    pub fn success() -> Self {
        Self::with_status(EnvelopeStatus::Success, StatusCode::OK)
    }

    /// Fail envelope, 500 unless overridden
    pub fn fail() -> Self {
        Self::with_status(EnvelopeStatus::Fail, StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn with_status(status: EnvelopeStatus, code: StatusCode) -> Self {
        Self {
            code,
            body: EnvelopeBody {
                status,
                message: String::new(),
                data: None,
            },
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.body.message = message.into();
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.body.data = match data {
            Value::Object(map) if map.is_empty() => None,
            other => Some(other),
        };
        self
    }

    pub fn code(mut self, code: StatusCode) -> Self {
        self.code = code;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }

    pub fn body(&self) -> &EnvelopeBody {
        &self.body
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}

impl From<BookError> for Envelope {
    fn from(err: BookError) -> Self {
        Envelope::fail()
            .code(err.status_code())
            .message(err.to_string())
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        Envelope::from(self).into_response()
    }
}
