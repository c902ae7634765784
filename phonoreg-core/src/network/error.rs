// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport error types.

use thiserror::Error;

/// Failures below the HTTP exchange: the registry was never reached or never
/// answered. These are surfaced to the caller as-is and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The base URL or a resolved request URL is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection refused, DNS failure, TLS handshake failure.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The connect or read timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// Any other failure while sending the request or reading the response.
    #[error("Transport failure: {0}")]
    Io(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // A connect timeout reports both is_connect and is_timeout.
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            TransportError::InvalidUrl(err.to_string())
        } else {
            TransportError::Io(err.to_string())
        }
    }
}
