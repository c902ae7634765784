// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry Client
//!
//! Domain-facing façade over a [`Transport`]. Each operation builds one
//! request, performs one round trip and returns the decoded envelope.
//!
//! # Failure kinds
//!
//! - `Err(ClientError::Transport)`: no response arrived.
//! - `Err(ClientError::Protocol)`: a response arrived but is not a usable envelope.
//! - `Ok(envelope)` with `success == false`: the registry rejected the call.
//!
//! # Example
//!
//! ```
//! use phonoreg_core::{ApiProfile, MockTransport, RegistryClient};
//! use serde_json::json;
//!
//! let mut transport = MockTransport::new();
//! transport.queue_json(200, json!({"success": true, "data": {"status": "healthy"}}));
//!
//! let mut client = RegistryClient::new(transport, ApiProfile::legacy());
//! let health = client.health_check().unwrap();
//! assert!(health.is_success());
//! ```

mod auth;
mod config;
mod ecad;
mod query;
mod reports;
mod validation;

pub use config::{ApiProfile, ClientConfig, StatsPath};
pub use query::{EcadQuery, ListQuery, SearchQuery};
pub use reports::Report;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::codec::{decode_envelope, encode_payload};
use crate::envelope::ResponseEnvelope;
use crate::error::{ClientError, ClientResult};
use crate::model::{HealthStatus, PageWire, Phonogram, PhonogramPage, PhonogramRef};
use crate::network::{HttpRequest, HttpResponse, Method, Transport};
use crate::session::Session;

#[cfg(feature = "http")]
use crate::network::HttpTransport;

const HEALTH_PATH: &str = "/api/health";
const STATUS_PATH: &str = "/api/status";

/// Client for the phonogram registry.
///
/// Owns its transport (and with it the cookie store) and its [`Session`].
/// One instance serves one logical session; independent sessions need
/// independent instances.
pub struct RegistryClient<T: Transport> {
    transport: T,
    profile: ApiProfile,
    session: Session,
}

#[cfg(feature = "http")]
impl RegistryClient<HttpTransport> {
    /// Builds a client that talks HTTP to the configured registry.
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(config.transport)?;
        Ok(Self::new(transport, config.profile))
    }
}

impl<T: Transport> RegistryClient<T> {
    /// Creates an unauthenticated client over the given transport.
    pub fn new(transport: T, profile: ApiProfile) -> Self {
        RegistryClient {
            transport,
            profile,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn profile(&self) -> &ApiProfile {
        &self.profile
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the client and returns its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Unauthenticated liveness check.
    pub fn health_check(&mut self) -> ClientResult<ResponseEnvelope<HealthStatus>> {
        self.fetch(HttpRequest::new(Method::Get, HEALTH_PATH))
    }

    /// Detailed liveness report (version, timestamp).
    pub fn service_status(&mut self) -> ClientResult<ResponseEnvelope<HealthStatus>> {
        self.fetch(HttpRequest::new(Method::Get, STATUS_PATH))
    }

    /// Lists one page of phonograms.
    pub fn list(&mut self, query: &ListQuery) -> ClientResult<ResponseEnvelope<PhonogramPage>> {
        let pairs = query.to_query(&self.profile)?;
        let request =
            HttpRequest::new(Method::Get, self.profile.collection_path()).with_query_pairs(pairs);
        self.fetch_page(request)
    }

    /// Runs the advanced search.
    pub fn search(&mut self, query: &SearchQuery) -> ClientResult<ResponseEnvelope<PhonogramPage>> {
        let pairs = query.to_query()?;
        let path = format!("{}/buscar", self.profile.collection_path());
        self.fetch_page(HttpRequest::new(Method::Get, path).with_query_pairs(pairs))
    }

    pub fn get_by_id(&mut self, id: u64) -> ClientResult<ResponseEnvelope<Phonogram>> {
        let path = self.record_path(id)?;
        self.fetch(HttpRequest::new(Method::Get, path))
    }

    pub fn get_by_isrc(&mut self, isrc: &str) -> ClientResult<ResponseEnvelope<Phonogram>> {
        let isrc = require_value("ISRC", isrc)?;
        let path = format!(
            "{}/isrc/{}",
            self.profile.collection_path(),
            path_segment(isrc)
        );
        self.fetch(HttpRequest::new(Method::Get, path))
    }

    /// Creates a phonogram. Unknown fields in `record.extra` are sent as-is.
    pub fn create(&mut self, record: &Phonogram) -> ClientResult<ResponseEnvelope<PhonogramRef>> {
        let request = with_body(
            HttpRequest::new(Method::Post, self.profile.collection_path()),
            record,
        )?;
        self.fetch(request)
    }

    /// Replaces a phonogram. Fields absent from `record` are not preserved.
    pub fn update(
        &mut self,
        id: u64,
        record: &Phonogram,
    ) -> ClientResult<ResponseEnvelope<PhonogramRef>> {
        let path = self.record_path(id)?;
        let request = with_body(HttpRequest::new(Method::Put, path), record)?;
        self.fetch(request)
    }

    pub fn delete(&mut self, id: u64) -> ClientResult<ResponseEnvelope<Value>> {
        let path = self.record_path(id)?;
        self.execute(HttpRequest::new(Method::Delete, path))
    }

    /// Aggregate counts; the shape is left to the caller.
    pub fn stats(&mut self) -> ClientResult<ResponseEnvelope<Value>> {
        self.execute(HttpRequest::new(Method::Get, self.profile.stats_path()))
    }

    fn record_path(&self, id: u64) -> ClientResult<String> {
        item_path(&self.profile.collection_path(), id, "phonogram")
    }

    fn fetch_page(&mut self, request: HttpRequest) -> ClientResult<ResponseEnvelope<PhonogramPage>> {
        let envelope = self.execute(request)?.decode_data::<PageWire>()?;
        let pagination = envelope.meta.pagination.clone();
        Ok(envelope.map_data(|wire| PhonogramPage::from_wire(wire, pagination.as_ref())))
    }

    fn fetch<U: DeserializeOwned>(&mut self, request: HttpRequest) -> ClientResult<ResponseEnvelope<U>> {
        Ok(self.execute(request)?.decode_data()?)
    }

    fn execute(&mut self, request: HttpRequest) -> ClientResult<ResponseEnvelope<Value>> {
        let response = self.exchange(&request)?;
        Ok(decode_envelope(response.status, &response.body)?)
    }

    /// One round trip, logged.
    fn exchange(&mut self, request: &HttpRequest) -> ClientResult<HttpResponse> {
        match self.transport.send(request) {
            Ok(response) => {
                debug!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status,
                    "registry call"
                );
                Ok(response)
            }
            Err(e) => {
                warn!(method = %request.method, path = %request.path, error = %e, "registry unreachable");
                Err(e.into())
            }
        }
    }
}

fn with_body<B: Serialize + ?Sized>(request: HttpRequest, body: &B) -> ClientResult<HttpRequest> {
    Ok(request.with_json_body(encode_payload(body)?))
}

/// Trims a required text argument; blank is rejected before sending.
fn require_value<'a>(label: &str, value: &'a str) -> ClientResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::InvalidArgument(format!(
            "{} must not be empty",
            label
        )));
    }
    Ok(value)
}

/// `base/id`, rejecting ids below 1.
fn item_path(base: &str, id: u64, what: &str) -> ClientResult<String> {
    if id < 1 {
        return Err(ClientError::InvalidArgument(format!(
            "{} id must be positive",
            what
        )));
    }
    Ok(format!("{}/{}", base, id))
}

/// Percent-encodes a value for use as one path segment.
fn path_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::network::{MockTransport, TransportError, JSON_CONTENT_TYPE};

    fn client_with(responses: Vec<(u16, Value)>) -> RegistryClient<MockTransport> {
        let mut transport = MockTransport::new();
        for (status, body) in responses {
            transport.queue_json(status, body);
        }
        RegistryClient::new(transport, ApiProfile::legacy())
    }

    #[test]
    fn test_path_segment_escapes() {
        assert_eq!(path_segment("BRUM71601234"), "BRUM71601234");
        assert_eq!(path_segment("BR UM/7"), "BR%20UM%2F7");
    }

    #[test]
    fn test_get_request_has_no_headers() {
        let mut client = client_with(vec![(200, json!({"success": true, "data": {"status": "healthy"}}))]);
        client.health_check().unwrap();

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/api/health");
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_create_sends_json_body() {
        let mut client = client_with(vec![(
            201,
            json!({"success": true, "message": "Fonograma criado", "data": {"id": 9, "isrc": "BRUM71601234"}}),
        )]);

        let created = client
            .create(&Phonogram::new("BRUM71601234", "Música"))
            .unwrap();
        assert_eq!(created.data().unwrap().id, 9);

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.header("Content-Type"), Some(JSON_CONTENT_TYPE));
        let body: Value = serde_json::from_slice(request.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["titulo"], "Música");
    }

    #[test]
    fn test_invalid_id_sends_nothing() {
        let mut client = client_with(vec![]);
        let result = client.get_by_id(0);

        assert!(matches!(result, Err(ClientError::InvalidArgument(_))));
        assert!(client.transport().sent_requests().is_empty());
    }

    #[test]
    fn test_blank_isrc_rejected() {
        let mut client = client_with(vec![]);
        assert!(matches!(
            client.get_by_isrc("  "),
            Err(ClientError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.validate_isrc(""),
            Err(ClientError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_transport_error_passes_through() {
        let mut transport = MockTransport::new();
        transport.inject_error(TransportError::Timeout);
        let mut client = RegistryClient::new(transport, ApiProfile::v1());

        let result = client.stats();
        assert_eq!(result, Err(ClientError::Transport(TransportError::Timeout)));
    }

    #[test]
    fn test_wrong_payload_shape_is_protocol_error() {
        let mut client = client_with(vec![(200, json!({"success": true, "data": "not a record"}))]);
        let result = client.get_by_id(1);
        assert!(result.unwrap_err().is_protocol());
    }
}
