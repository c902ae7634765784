// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ECAD Commands
//!
//! Read-only views of submissions to the collection society and its returns.

use anyhow::Result;
use phonoreg_core::EcadQuery;

use super::{finish, with_session};
use crate::config::CliConfig;
use crate::display;

pub fn submissions(config: &CliConfig, query: &EcadQuery) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.list_submissions(query)?;
        if let Some(pagination) = envelope.pagination() {
            if !config.json {
                display::info(&format!(
                    "Page {} of {} ({} submissions)",
                    pagination.page,
                    pagination.pages.max(1),
                    pagination.total
                ));
            }
        }
        finish(config, envelope, display::display_value)
    })
}

pub fn submission(config: &CliConfig, id: u64) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.get_submission(id)?;
        finish(config, envelope, display::display_value)
    })
}

pub fn submission_stats(config: &CliConfig) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.submission_stats()?;
        finish(config, envelope, display::display_value)
    })
}

pub fn returns(config: &CliConfig, page: u32, per_page: u32) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.list_returns(page, per_page)?;
        finish(config, envelope, display::display_value)
    })
}

pub fn show_return(config: &CliConfig, id: u64) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.get_return(id)?;
        finish(config, envelope, display::display_value)
    })
}
