// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network + Transport Layer
//!
//! Moves raw request/response bytes between the client and the registry.
//! Nothing in this module knows about phonograms or envelopes.
//!
//! # Architecture
//!
//! - **Transport trait**: blocking, single-attempt request/response exchange
//! - **HttpTransport**: reqwest-backed implementation with a cookie store
//! - **MockTransport**: scripted responses for tests
//!
//! # Example
//!
//! ```ignore
//! use phonoreg_core::network::{HttpRequest, HttpTransport, Method, Transport, TransportConfig};
//!
//! let mut transport = HttpTransport::new(TransportConfig::new("http://localhost:5001/"))?;
//! let response = transport.send(&HttpRequest::new(Method::Get, "/api/health"))?;
//! assert_eq!(response.status, 200);
//! ```

mod error;
#[cfg(feature = "http")]
mod http;
mod mock;
mod transport;

pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use mock::MockTransport;
pub use transport::{
    normalize_base_url, resolve_url, HttpRequest, HttpResponse, Method, Transport,
    TransportConfig, TransportResult, CONTENT_TYPE, JSON_CONTENT_TYPE,
};
