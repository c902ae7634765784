// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session State
//!
//! Client-local record of whether the current client is logged in. The
//! credential itself is the cookie held by the transport; this only tracks
//! what the client believes about it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login credentials.
#[derive(Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "email")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: &str, secret: &str) -> Self {
        Credentials {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Account the session is logged in as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub email: String,
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Login response payload: `{"user": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginPayload {
    pub user: Option<SessionUser>,
}

/// Authentication state owned by one client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    user: Option<SessionUser>,
}

impl Session {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Account reported by the last successful login.
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub(crate) fn establish(&mut self, user: Option<SessionUser>) {
        self.authenticated = true;
        self.user = user;
    }

    pub(crate) fn clear(&mut self) {
        self.authenticated = false;
        self.user = None;
    }
}
