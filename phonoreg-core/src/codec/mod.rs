// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire Codec
//!
//! JSON encoding of request payloads and decoding of response bodies into
//! [`ResponseEnvelope`]. The decoder accepts the union of the envelope shapes
//! the registry deployments emit:
//!
//! - `error` as a string or as `{code, message, details}`
//! - pagination under `meta` (or a top-level `pagination` object)
//! - a top-level `code` and `timestamp`

pub mod duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::envelope::{EnvelopeMeta, ErrorDetail, Outcome, Pagination, ResponseEnvelope};

/// The response arrived but is not a usable envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Body is not JSON or lacks the envelope fields.
    #[error("Malformed response (HTTP {status}): {reason}")]
    Malformed { status: u16, reason: String },

    /// Envelope parsed but `success` disagrees with `data`/`error`.
    #[error("Inconsistent envelope (HTTP {status}): {reason}")]
    Inconsistent { status: u16, reason: String },

    /// Envelope parsed but the payload does not have the expected shape.
    #[error("Unexpected payload (HTTP {status}): {reason}")]
    UnexpectedData { status: u16, reason: String },

    /// A request payload could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(String),
}

/// Envelope as it appears on the wire, every optional part included.
#[derive(Deserialize)]
struct WireEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<ErrorDetail>,
    #[serde(default)]
    meta: Option<Map<String, Value>>,
    #[serde(default)]
    pagination: Option<Pagination>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

/// HTTP 204: the registry answers a successful DELETE with no body at all.
const NO_CONTENT: u16 = 204;

/// Pagination keys that may appear inside `meta`.
const PAGINATION_KEYS: [&str; 6] = ["total", "page", "per_page", "pages", "has_next", "has_prev"];

/// Serializes a request payload to JSON bytes.
pub fn encode_payload<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ProtocolError> {
    serde_json::to_vec(value).map_err(|e| ProtocolError::Encode(e.to_string()))
}

/// Decodes a response body into an envelope with an opaque payload.
pub fn decode_envelope(status: u16, body: &[u8]) -> Result<ResponseEnvelope<Value>, ProtocolError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        if status == NO_CONTENT {
            return Ok(ResponseEnvelope {
                status,
                message: None,
                outcome: Outcome::Success(None),
                meta: EnvelopeMeta::default(),
            });
        }
        warn!(status, "empty response body");
        return Err(ProtocolError::Malformed {
            status,
            reason: "empty body".to_string(),
        });
    }

    let wire: WireEnvelope = serde_json::from_slice(body).map_err(|e| {
        warn!(status, error = %e, "response is not an envelope");
        ProtocolError::Malformed {
            status,
            reason: e.to_string(),
        }
    })?;

    let outcome = match (wire.success, wire.error) {
        (true, None) => Outcome::Success(wire.data),
        (false, Some(error)) => Outcome::Failure(error),
        (true, Some(_)) => {
            return Err(ProtocolError::Inconsistent {
                status,
                reason: "success envelope carries an error".to_string(),
            })
        }
        (false, None) => {
            return Err(ProtocolError::Inconsistent {
                status,
                reason: "failure envelope has no error".to_string(),
            })
        }
    };

    Ok(ResponseEnvelope {
        status,
        message: wire.message,
        outcome,
        meta: merge_meta(wire.meta, wire.pagination, wire.code, wire.timestamp),
    })
}

fn merge_meta(
    meta: Option<Map<String, Value>>,
    pagination: Option<Pagination>,
    code: Option<String>,
    timestamp: Option<String>,
) -> EnvelopeMeta {
    let mut extra = meta.unwrap_or_default();

    let from_meta = if PAGINATION_KEYS.iter().any(|key| extra.contains_key(*key)) {
        let subset: Map<String, Value> = extra
            .iter()
            .filter(|(key, _)| PAGINATION_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        match serde_json::from_value::<Pagination>(Value::Object(subset)) {
            Ok(parsed) => {
                extra.retain(|key, _| !PAGINATION_KEYS.contains(&key.as_str()));
                Some(parsed)
            }
            // Left in `extra` untouched when it is not pagination after all.
            Err(_) => None,
        }
    } else {
        None
    };

    let error_code = code.or_else(|| take_string(&mut extra, "code"));
    let timestamp = timestamp.or_else(|| take_string(&mut extra, "timestamp"));

    EnvelopeMeta {
        pagination: pagination.or(from_meta),
        error_code,
        timestamp,
        extra,
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(map.get(key), Some(Value::String(_))) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
