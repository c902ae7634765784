// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aggregate reports over the caller's phonograms.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::RegistryClient;
use crate::envelope::ResponseEnvelope;
use crate::error::ClientResult;
use crate::network::{HttpRequest, Method, Transport};

const REPORTS_PATH: &str = "/api/relatorios";

/// Reports the registry computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    /// Totals, per-status counts and recent records.
    Dashboard,
    ByGenre,
    ByStatus,
    ByYear,
    /// Records created per month over the last year.
    MonthlyTrend,
}

impl Report {
    pub const ALL: [Report; 5] = [
        Report::Dashboard,
        Report::ByGenre,
        Report::ByStatus,
        Report::ByYear,
        Report::MonthlyTrend,
    ];

    /// Path segment under `/api/relatorios`.
    pub fn slug(&self) -> &'static str {
        match self {
            Report::Dashboard => "dashboard",
            Report::ByGenre => "por-genero",
            Report::ByStatus => "por-status",
            Report::ByYear => "por-ano",
            Report::MonthlyTrend => "evolucao-mensal",
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Report {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::ALL
            .into_iter()
            .find(|report| report.slug() == s.trim())
            .ok_or_else(|| format!("unknown report '{}'", s))
    }
}

impl<T: Transport> RegistryClient<T> {
    /// Fetches one report; the shape depends on the report.
    pub fn report(&mut self, report: Report) -> ClientResult<ResponseEnvelope<Value>> {
        let path = format!("{}/{}", REPORTS_PATH, report.slug());
        self.execute(HttpRequest::new(Method::Get, path))
    }
}
