// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response Envelope
//!
//! Uniform success/error wrapper returned by every registry call. The
//! outcome is an enum, so an envelope carries either a payload or an error
//! detail, never both.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::ProtocolError;

/// Error detail of a failed call.
///
/// Deployments send either a bare string or an object with a code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// `"error": "Fonograma não encontrado"`
    Text(String),
    /// `"error": {"code": "NOT_FOUND", "message": "...", "details": [...]}`
    Structured {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
}

impl ErrorDetail {
    /// Machine-readable error code, when the server sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ErrorDetail::Text(_) => None,
            ErrorDetail::Structured { code, .. } => code.as_deref(),
        }
    }

    /// Human-readable message; falls back to the code.
    pub fn message(&self) -> &str {
        match self {
            ErrorDetail::Text(text) => text,
            ErrorDetail::Structured { message, code, .. } => message
                .as_deref()
                .or(code.as_deref())
                .unwrap_or("unspecified error"),
        }
    }

    /// Additional detail (e.g. the list of validation failures).
    pub fn details(&self) -> Option<&Value> {
        match self {
            ErrorDetail::Text(_) => None,
            ErrorDetail::Structured { details, .. } => details.as_ref(),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}: {}", code, self.message()),
            None => f.write_str(self.message()),
        }
    }
}

/// Pagination metadata of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

/// Optional envelope metadata, merged from every place a deployment puts it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Metadata keys the client does not interpret.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Result of a registry call as reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// `success: true`. The payload is `None` when the server sent no data.
    Success(Option<T>),
    /// `success: false` with the server's error detail.
    Failure(ErrorDetail),
}

/// Decoded response of one registry call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T = Value> {
    /// HTTP status the envelope arrived with.
    pub status: u16,
    /// Server message, present on success and failure alike.
    pub message: Option<String>,
    pub outcome: Outcome<T>,
    pub meta: EnvelopeMeta,
}

impl<T> ResponseEnvelope<T> {
    /// Mirrors the wire `success` flag.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Payload of a successful call.
    pub fn data(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success(data) => data.as_ref(),
            Outcome::Failure(_) => None,
        }
    }

    /// Consumes the envelope and returns the payload of a successful call.
    pub fn into_data(self) -> Option<T> {
        match self.outcome {
            Outcome::Success(data) => data,
            Outcome::Failure(_) => None,
        }
    }

    /// Error detail of a failed call.
    pub fn error(&self) -> Option<&ErrorDetail> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Error code from the error detail or from top-level metadata.
    pub fn error_code(&self) -> Option<&str> {
        self.error()
            .and_then(ErrorDetail::code)
            .or(self.meta.error_code.as_deref())
    }

    /// True for a failure the server reports as a missing record.
    pub fn is_not_found(&self) -> bool {
        !self.is_success() && (self.status == 404 || self.error_code() == Some("NOT_FOUND"))
    }

    /// Pagination metadata, if the server sent any.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.pagination.as_ref()
    }

    /// Converts the envelope into a `Result` over its outcome.
    pub fn into_result(self) -> Result<Option<T>, ErrorDetail> {
        match self.outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Maps the payload, keeping status, message and metadata.
    pub fn map_data<U, F>(self, f: F) -> ResponseEnvelope<U>
    where
        F: FnOnce(T) -> U,
    {
        let outcome = match self.outcome {
            Outcome::Success(data) => Outcome::Success(data.map(f)),
            Outcome::Failure(error) => Outcome::Failure(error),
        };
        ResponseEnvelope {
            status: self.status,
            message: self.message,
            outcome,
            meta: self.meta,
        }
    }
}

impl ResponseEnvelope<Value> {
    /// Decodes the opaque payload into a typed one.
    ///
    /// A `null` payload stays `None`; failures pass through untouched.
    pub fn decode_data<U: DeserializeOwned>(self) -> Result<ResponseEnvelope<U>, ProtocolError> {
        let status = self.status;
        let outcome = match self.outcome {
            Outcome::Success(Some(value)) => {
                let data = serde_json::from_value(value).map_err(|e| {
                    ProtocolError::UnexpectedData {
                        status,
                        reason: e.to_string(),
                    }
                })?;
                Outcome::Success(Some(data))
            }
            Outcome::Success(None) => Outcome::Success(None),
            Outcome::Failure(error) => Outcome::Failure(error),
        };
        Ok(ResponseEnvelope {
            status,
            message: self.message,
            outcome,
            meta: self.meta,
        })
    }
}
