// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Service Commands
//!
//! Health, status, current account and aggregate stats.

use anyhow::Result;

use super::{finish, open_client, with_session};
use crate::config::CliConfig;
use crate::display;

/// Checks that the registry is up. Never logs in.
pub fn health(config: &CliConfig) -> Result<()> {
    let mut client = open_client(config)?;
    let envelope = client.health_check()?;
    finish(config, envelope, display::display_health)
}

/// Shows the detailed service status. Never logs in.
pub fn status(config: &CliConfig) -> Result<()> {
    let mut client = open_client(config)?;
    let envelope = client.service_status()?;
    finish(config, envelope, display::display_health)
}

/// Shows the account the credentials belong to.
pub fn whoami(config: &CliConfig) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.current_user()?;
        finish(config, envelope, |user| {
            let role = if user.is_admin { "admin" } else { "user" };
            println!(
                "{} <{}> ({}, id {})",
                user.name.as_deref().unwrap_or("-"),
                user.email,
                role,
                user.id
            );
        })
    })
}

/// Prints aggregate counts.
pub fn stats(config: &CliConfig) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.stats()?;
        // Shape varies by deployment, so it is always printed as JSON.
        finish(config, envelope, display::display_value)
    })
}
