// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Transport
//!
//! Scripted transport for tests: responses are queued up front, every sent
//! request is recorded.

use std::collections::VecDeque;

use super::error::TransportError;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportResult};

/// Transport that replays queued responses in order.
///
/// Sending with an empty queue fails with [`TransportError::ConnectionFailed`],
/// so a test that under-scripts its server shows up as a transport failure.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: VecDeque<TransportResult<HttpResponse>>,
    sent: Vec<HttpRequest>,
    cookie_clears: usize,
    clear_error: Option<TransportError>,
}

impl MockTransport {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn queue_response(&mut self, response: HttpResponse) {
        self.script.push_back(Ok(response));
    }

    /// Queues a response with a JSON body.
    pub fn queue_json(&mut self, status: u16, body: serde_json::Value) {
        self.queue_response(HttpResponse::json(status, &body));
    }

    /// Queues a transport failure for the next send.
    pub fn inject_error(&mut self, error: TransportError) {
        self.script.push_back(Err(error));
    }

    /// Makes the next `clear_cookies` call fail.
    pub fn fail_next_cookie_clear(&mut self, error: TransportError) {
        self.clear_error = Some(error);
    }

    /// Returns every request sent so far.
    pub fn sent_requests(&self) -> &[HttpRequest] {
        &self.sent
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<&HttpRequest> {
        self.sent.last()
    }

    /// Forgets recorded requests.
    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// How many times the cookie store was cleared.
    pub fn cookie_clears(&self) -> usize {
        self.cookie_clears
    }
}

impl Transport for MockTransport {
    fn send(&mut self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        self.sent.push(request.clone());
        self.script.pop_front().unwrap_or_else(|| {
            Err(TransportError::ConnectionFailed(format!(
                "no scripted response for {} {}",
                request.method, request.path
            )))
        })
    }

    fn clear_cookies(&mut self) -> TransportResult<()> {
        if let Some(error) = self.clear_error.take() {
            return Err(error);
        }
        self.cookie_clears += 1;
        Ok(())
    }
}
