// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport Trait
//!
//! Platform-agnostic abstraction for the HTTP exchange with the registry.

use std::fmt;
use std::time::Duration;

use url::Url;

use super::error::TransportError;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Header name used to announce a request body's media type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Media type of every request body the client sends.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods used by the registry API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Query parameters in order. Values are unescaped; the transport encodes them.
    pub query: Vec<(String, String)>,
    /// Encoded request body, if any.
    pub body: Option<Vec<u8>>,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a request with no query, body or headers.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        HttpRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Appends several query parameters.
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attaches a JSON body and the matching content-type header.
    pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self.headers
            .push((CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()));
        self
    }

    /// Looks up a header value (case-insensitive name match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a query parameter value.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as received from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status code and body bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// Creates a response whose body is the given JSON value.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        HttpResponse {
            status,
            body: body.to_string().into_bytes(),
        }
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Configuration for transport connections.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Registry base URL, e.g. `http://localhost:5001`.
    pub base_url: String,
    /// Connect and read timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Retain cookies from responses and replay them on later requests.
    pub session_continuity: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            base_url: String::new(),
            timeout: Duration::from_secs(10),
            user_agent: format!("phonoreg/{}", env!("CARGO_PKG_VERSION")),
            session_continuity: true,
        }
    }
}

impl TransportConfig {
    /// Creates a config for the given base URL with default settings.
    pub fn new(base_url: &str) -> Self {
        TransportConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Sets the connect/read timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Disables cookie retention between calls.
    pub fn without_session_continuity(mut self) -> Self {
        self.session_continuity = false;
        self
    }
}

/// Strips a single trailing slash from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url
        .strip_suffix('/')
        .unwrap_or(base_url)
        .to_string()
}

/// Joins a normalized base URL with a request path and query.
///
/// Query values are form-encoded, so `Rock & Roll` becomes `Rock+%26+Roll`.
pub fn resolve_url(base_url: &str, path: &str, query: &[(String, String)]) -> TransportResult<Url> {
    let mut url = Url::parse(&format!("{}{}", base_url, path))
        .map_err(|e| TransportError::InvalidUrl(format!("{}{}: {}", base_url, path, e)))?;

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }

    Ok(url)
}

/// Transport trait for talking to the registry.
///
/// Implementations perform exactly one attempt per call: no retries, no
/// backoff. Everything that prevents a response from arriving is a
/// [`TransportError`]; any response that does arrive is returned unchanged,
/// whatever its status code.
///
/// # Synchronous Interface
///
/// Calls block the current thread for one round trip. A transport holds the
/// cookie store of one logical session, so it takes `&mut self` and is not
/// shared between concurrent callers.
pub trait Transport: Send {
    /// Sends a request and waits for the response.
    fn send(&mut self, request: &HttpRequest) -> TransportResult<HttpResponse>;

    /// Drops every retained cookie.
    fn clear_cookies(&mut self) -> TransportResult<()>;
}
