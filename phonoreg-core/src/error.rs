// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client Error Types
//!
//! Errors raised by [`crate::RegistryClient`] operations. A registry that
//! answers with `success: false` is not an error here; that outcome is
//! returned inside the envelope.

use thiserror::Error;

use crate::codec::ProtocolError;
use crate::network::TransportError;

/// Unified error type for client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The registry could not be reached.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The registry answered with something other than an envelope.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The call was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ClientError {
    /// True when the failure happened before a response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// True when a response arrived but could not be decoded.
    pub fn is_protocol(&self) -> bool {
        matches!(self, ClientError::Protocol(_))
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
