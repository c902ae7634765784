// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use dialoguer::Password;
use phonoreg_core::{ApiProfile, ClientConfig, Credentials};

/// Registry deployment the CLI talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    /// `/api/fonogramas`, `busca`, `status`
    Legacy,
    /// `/api/v1/fonogramas`, `search`, `situacao`
    V1,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Registry base URL.
    pub base_url: String,
    pub profile: ProfileKind,
    /// Overrides the profile's version segment.
    pub api_version: Option<String>,
    pub timeout: Duration,
    /// Commands log in first when an email is set.
    pub email: Option<String>,
    pub password: Option<String>,
    /// Print payloads as JSON instead of tables.
    pub json: bool,
}

impl CliConfig {
    /// Returns the API naming for the selected deployment.
    pub fn api_profile(&self) -> ApiProfile {
        let profile = match self.profile {
            ProfileKind::Legacy => ApiProfile::legacy(),
            ProfileKind::V1 => ApiProfile::v1(),
        };
        match &self.api_version {
            Some(version) => profile.with_api_version(Some(version)),
            None => profile,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url)
            .with_profile(self.api_profile())
            .with_timeout(self.timeout)
    }

    /// Returns login credentials, prompting for a missing password.
    pub fn credentials(&self) -> Result<Option<Credentials>> {
        let Some(email) = &self.email else {
            return Ok(None);
        };

        let password = match &self.password {
            Some(password) => password.clone(),
            None => Password::new()
                .with_prompt(format!("Password for {}", email))
                .interact()?,
        };

        Ok(Some(Credentials::new(email, &password)))
    }
}
