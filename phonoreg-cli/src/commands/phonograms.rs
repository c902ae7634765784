// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonogram Commands
//!
//! List, search, view, create, update and delete registry records.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use phonoreg_core::{EcadStatus, ListQuery, Phonogram, SearchQuery};

use super::{finish, with_session};
use crate::config::CliConfig;
use crate::display;

/// Reads a phonogram from a JSON file, or stdin for `-`.
fn read_record(path: &Path) -> Result<Phonogram> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&text).context("Input is not a phonogram record")
}

/// Lists one page of phonograms.
pub fn list(
    config: &CliConfig,
    page: u32,
    per_page: u32,
    search: Option<&str>,
    status: Option<EcadStatus>,
) -> Result<()> {
    let mut query = ListQuery::new(page, per_page);
    if let Some(search) = search {
        query = query.with_search(search);
    }
    if let Some(status) = status {
        query = query.with_status(status);
    }

    with_session(config, |client| {
        let envelope = client.list(&query)?;
        finish(config, envelope, display::display_page)
    })
}

/// Runs the advanced search.
pub fn search(config: &CliConfig, query: &SearchQuery) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.search(query)?;
        finish(config, envelope, display::display_page)
    })
}

/// Shows one phonogram by id.
pub fn show(config: &CliConfig, id: u64) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.get_by_id(id)?;
        finish(config, envelope, display::display_phonogram)
    })
}

/// Shows one phonogram by ISRC.
pub fn show_isrc(config: &CliConfig, isrc: &str) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.get_by_isrc(isrc)?;
        finish(config, envelope, display::display_phonogram)
    })
}

/// Creates a phonogram from a JSON file.
pub fn create(config: &CliConfig, input: &Path) -> Result<()> {
    let record = read_record(input)?;

    with_session(config, |client| {
        let envelope = client.create(&record)?;
        finish(config, envelope, |created| {
            display::success(&format!(
                "Created phonogram {} ({})",
                created.id,
                created.isrc.as_deref().unwrap_or(&record.isrc)
            ));
        })
    })
}

/// Replaces a phonogram with the contents of a JSON file.
pub fn update(config: &CliConfig, id: u64, input: &Path) -> Result<()> {
    let record = read_record(input)?;

    with_session(config, |client| {
        let envelope = client.update(id, &record)?;
        finish(config, envelope, |updated| {
            display::success(&format!("Updated phonogram {}", updated.id));
        })
    })
}

/// Deletes a phonogram.
pub fn delete(config: &CliConfig, id: u64) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.delete(id)?;
        finish(config, envelope, |_| {
            display::success(&format!("Deleted phonogram {}", id));
        })
    })
}
