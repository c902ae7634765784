// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validation Commands
//!
//! Server-side checks of single values. None of them logs in.

use anyhow::Result;
use clap::ValueEnum;

use super::{finish, open_client};
use crate::config::CliConfig;
use crate::display;

/// Kind of value to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    Isrc,
    Cpf,
    Cnpj,
    /// CPF or CNPJ, told apart by the registry
    Document,
    /// `mm:ss`, `h:mm:ss`, `m.ss` or seconds
    Duration,
}

/// Asks the registry to check one value.
pub fn validate(config: &CliConfig, kind: FieldKind, value: &str) -> Result<()> {
    let mut client = open_client(config)?;
    match kind {
        FieldKind::Isrc => {
            let envelope = client.validate_isrc(value)?;
            finish(config, envelope, display::display_validation)
        }
        FieldKind::Cpf => {
            let envelope = client.validate_cpf(value)?;
            finish(config, envelope, display::display_document_validation)
        }
        FieldKind::Cnpj => {
            let envelope = client.validate_cnpj(value)?;
            finish(config, envelope, display::display_document_validation)
        }
        FieldKind::Document => {
            let envelope = client.validate_document(value)?;
            finish(config, envelope, display::display_document_validation)
        }
        FieldKind::Duration => {
            let envelope = client.validate_duration(value)?;
            finish(config, envelope, display::display_duration_validation)
        }
    }
}
