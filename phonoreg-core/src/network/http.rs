// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP transport backed by reqwest's blocking client.
//!
//! Session continuity is provided by reqwest's cookie store: cookies set by
//! any response are replayed on later requests from the same transport.

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use super::error::TransportError;
use super::transport::{
    normalize_base_url, resolve_url, HttpRequest, HttpResponse, Method, Transport,
    TransportConfig, TransportResult,
};

/// Blocking HTTP transport for the registry.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    config: TransportConfig,
}

impl HttpTransport {
    /// Creates a transport from config.
    ///
    /// The base URL loses one trailing slash here and is validated once.
    pub fn new(config: TransportConfig) -> TransportResult<Self> {
        let base_url = normalize_base_url(&config.base_url);
        Url::parse(&base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: build_client(&config)?,
            base_url,
            config,
        })
    }

    /// Get the normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn build_client(config: &TransportConfig) -> TransportResult<Client> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .cookie_store(config.session_continuity)
        .build()
        .map_err(TransportError::from)
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        let url = resolve_url(&self.base_url, &request.path, &request.query)?;

        let mut builder = self.client.request(request.method.into(), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        debug!(
            method = %request.method,
            path = %request.path,
            status,
            bytes = body.len(),
            "registry response"
        );

        Ok(HttpResponse { status, body })
    }

    fn clear_cookies(&mut self) -> TransportResult<()> {
        // reqwest's jar cannot be emptied in place; a fresh client starts with an empty one.
        if self.config.session_continuity {
            self.client = build_client(&self.config)?;
        }
        Ok(())
    }
}
