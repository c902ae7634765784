// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Login and logout.
//!
//! These are the only operations that change [`Session`](crate::Session)
//! state. Re-login after an expired session is left to the caller.

use serde_json::Value;
use tracing::{info, warn};

use super::{with_body, RegistryClient};
use crate::codec::{decode_envelope, ProtocolError};
use crate::envelope::ResponseEnvelope;
use crate::error::ClientResult;
use crate::network::{HttpRequest, Method, Transport};
use crate::session::{Credentials, LoginPayload, SessionUser};

const LOGIN_PATH: &str = "/api/auth/login";
const LOGOUT_PATH: &str = "/api/auth/logout";
const ME_PATH: &str = "/api/auth/me";

impl<T: Transport> RegistryClient<T> {
    /// Logs in; the session cookie is retained by the transport.
    ///
    /// A rejection is returned as a failed envelope and leaves the session
    /// as it was.
    pub fn login(&mut self, identifier: &str, secret: &str) -> ClientResult<ResponseEnvelope<Value>> {
        self.login_with(&Credentials::new(identifier, secret))
    }

    pub fn login_with(&mut self, credentials: &Credentials) -> ClientResult<ResponseEnvelope<Value>> {
        let request = with_body(HttpRequest::new(Method::Post, LOGIN_PATH), credentials)?;
        let envelope = self.execute(request)?;

        if envelope.is_success() {
            let user = match envelope.data() {
                Some(data) => login_user(envelope.status, data)?,
                None => None,
            };
            info!(
                user_id = user.as_ref().map(|u| u.id),
                "session established"
            );
            self.session.establish(user);
        } else {
            info!(
                status = envelope.status,
                code = envelope.error_code(),
                "login rejected"
            );
        }

        Ok(envelope)
    }

    /// Logs out.
    ///
    /// The local session is cleared whatever happens. The transport's
    /// cookies are dropped only once a response has arrived; after a
    /// transport failure they are kept and the error is returned.
    pub fn logout(&mut self) -> ClientResult<ResponseEnvelope<Value>> {
        let request = HttpRequest::new(Method::Post, LOGOUT_PATH);
        let result = self.exchange(&request);
        self.session.clear();

        let response = result?;
        self.transport.clear_cookies()?;
        info!(status = response.status, "session cleared");

        Ok(decode_envelope(response.status, &response.body)?)
    }

    /// Account the registry associates with the current cookie.
    pub fn current_user(&mut self) -> ClientResult<ResponseEnvelope<SessionUser>> {
        self.fetch(HttpRequest::new(Method::Get, ME_PATH))
    }
}

/// Reads `data.user`. A user that is present but malformed fails the login
/// without touching the session.
fn login_user(status: u16, data: &Value) -> Result<Option<SessionUser>, ProtocolError> {
    serde_json::from_value::<LoginPayload>(data.clone())
        .map(|payload| payload.user)
        .map_err(|e| {
            warn!(status, error = %e, "login payload has an unexpected shape");
            ProtocolError::UnexpectedData {
                status,
                reason: e.to_string(),
            }
        })
}
