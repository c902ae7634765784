// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonoreg Core Library
//!
//! Client for the phonogram registry API: recording metadata (ISRC, titles,
//! producers, creators, performers) used in royalty-collection workflows.
//!
//! Every server interaction returns a [`ResponseEnvelope`]. Failures are split
//! into three kinds that are never conflated:
//! - [`TransportError`]: the server could not be reached.
//! - [`ProtocolError`]: the server answered with something that is not an envelope.
//! - an envelope whose outcome is [`Outcome::Failure`]: the server rejected the call.

pub mod client;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod model;
pub mod network;
pub mod session;

pub use client::{
    ApiProfile, ClientConfig, EcadQuery, ListQuery, RegistryClient, Report, SearchQuery, StatsPath,
};
pub use codec::duration::TrackDuration;
pub use codec::{decode_envelope, encode_payload, ProtocolError};
pub use envelope::{EnvelopeMeta, ErrorDetail, Outcome, Pagination, ResponseEnvelope};
pub use error::{ClientError, ClientResult};
pub use model::{
    Creator, DocumentValidation, DurationValidation, EcadStatus, HealthStatus, IsrcValidation,
    Performer, Phonogram, PhonogramPage, PhonogramRef,
};
#[cfg(feature = "http")]
pub use network::HttpTransport;
pub use network::{
    HttpRequest, HttpResponse, Method, MockTransport, Transport, TransportConfig, TransportError,
};
pub use session::{Credentials, Session, SessionUser};
