// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Commands

pub mod ecad;
pub mod phonograms;
pub mod reports;
pub mod smoke;
pub mod system;
pub mod validation;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use phonoreg_core::{HttpTransport, Outcome, RegistryClient, ResponseEnvelope};

use crate::config::CliConfig;
use crate::display;

/// Client type used by every command.
pub type Client = RegistryClient<HttpTransport>;

/// Opens a client for the configured registry.
pub fn open_client(config: &CliConfig) -> Result<Client> {
    RegistryClient::from_config(config.client_config())
        .with_context(|| format!("Cannot use registry at {}", config.base_url))
}

/// Runs `f`, inside a logged-in session when an email is configured.
///
/// The session is closed afterwards whatever `f` returned.
pub fn with_session<R>(config: &CliConfig, f: impl FnOnce(&mut Client) -> Result<R>) -> Result<R> {
    let mut client = open_client(config)?;

    if let Some(credentials) = config.credentials()? {
        let envelope = client.login_with(&credentials)?;
        if let Some(error) = envelope.error() {
            bail!("Login failed: {}", error);
        }
        debug!(email = %credentials.identifier, "logged in");
    }

    let result = f(&mut client);

    if client.session().is_authenticated() {
        if let Err(e) = client.logout() {
            warn!(error = %e, "logout failed");
        }
    }

    result
}

/// Prints the payload of a successful call; a failed call becomes an error.
pub fn finish<T: Serialize>(
    config: &CliConfig,
    envelope: ResponseEnvelope<T>,
    show: impl FnOnce(&T),
) -> Result<()> {
    match envelope.outcome {
        Outcome::Success(Some(data)) => {
            if config.json {
                display::print_json(&data)?;
            } else {
                show(&data);
            }
            Ok(())
        }
        Outcome::Success(None) => {
            if !config.json {
                display::success(envelope.message.as_deref().unwrap_or("Done"));
            }
            Ok(())
        }
        Outcome::Failure(error) => {
            if error.code() == Some("UNAUTHORIZED") && config.email.is_none() {
                display::info("This command needs a login: pass --email or set PHONOREG_EMAIL");
            }
            bail!("{} (HTTP {})", error, envelope.status)
        }
    }
}
