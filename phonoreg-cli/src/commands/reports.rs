// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report Commands

use anyhow::Result;
use clap::ValueEnum;
use phonoreg_core::Report;

use super::{finish, with_session};
use crate::config::CliConfig;
use crate::display;

/// Report to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Totals and recent records
    Dashboard,
    ByGenre,
    ByStatus,
    ByYear,
    /// Records created per month
    MonthlyTrend,
}

impl From<ReportKind> for Report {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Dashboard => Report::Dashboard,
            ReportKind::ByGenre => Report::ByGenre,
            ReportKind::ByStatus => Report::ByStatus,
            ReportKind::ByYear => Report::ByYear,
            ReportKind::MonthlyTrend => Report::MonthlyTrend,
        }
    }
}

/// Prints one report as JSON.
pub fn show(config: &CliConfig, kind: ReportKind) -> Result<()> {
    with_session(config, |client| {
        let envelope = client.report(kind.into())?;
        finish(config, envelope, display::display_value)
    })
}
