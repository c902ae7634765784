// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Smoke Command
//!
//! End-to-end check of a live registry: health, login, create a record with
//! a fresh ISRC, read it back, compare rights-holder counts, delete it,
//! logout. Each step prints one PASS/FAIL line.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use phonoreg_core::{
    ClientResult, Creator, Credentials, Performer, Phonogram, RegistryClient, ResponseEnvelope,
    Transport,
};

use super::open_client;
use crate::config::CliConfig;
use crate::display;

/// Outcome of one smoke step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl StepReport {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        StepReport {
            name,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        StepReport {
            name,
            passed: false,
            detail: detail.into(),
        }
    }
}

/// ISRC unlikely to collide with earlier runs.
pub fn fresh_isrc() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("BRTST26{:05}", millis % 100_000)
}

/// Record created by the smoke run.
pub fn smoke_record(isrc: &str) -> Phonogram {
    Phonogram {
        work_title: Some("Obra Teste".into()),
        duration: Some(210.into()),
        release_year: Some(2026),
        genre: Some("Teste".into()),
        producer_name: Some("Produtora Teste".into()),
        producer_share_percent: Some(100.0),
        ..Phonogram::new(isrc, "Música Teste Smoke")
    }
    .with_creator(Creator::new("Autor Teste Um").with_role("AUTOR").with_share(50.0))
    .with_creator(Creator::new("Autor Teste Dois").with_role("COMPOSITOR").with_share(50.0))
    .with_performer(Performer::new("Intérprete Teste").with_category("INTERPRETE").with_share(100.0))
}

/// Judges a call: transport/protocol errors and failed envelopes both fail.
fn judge<T>(
    name: &'static str,
    result: ClientResult<ResponseEnvelope<T>>,
    on_success: impl FnOnce(Option<T>) -> StepReport,
) -> StepReport {
    match result {
        Err(e) => StepReport::fail(name, e.to_string()),
        Ok(envelope) => match envelope.into_result() {
            Ok(data) => on_success(data),
            Err(error) => StepReport::fail(name, error.to_string()),
        },
    }
}

/// Runs every step, stopping after the first failure of a step the rest depend on.
pub fn run_steps<T: Transport>(
    client: &mut RegistryClient<T>,
    credentials: &Credentials,
    isrc: &str,
) -> Vec<StepReport> {
    let mut reports = Vec::new();

    let health = judge("health", client.health_check(), |health| {
        StepReport::pass("health", health.map(|h| h.status).unwrap_or_default())
    });
    let healthy = health.passed;
    reports.push(health);
    if !healthy {
        return reports;
    }

    let login = judge("login", client.login_with(credentials), |_| {
        StepReport::pass("login", credentials.identifier.clone())
    });
    let logged_in = login.passed;
    reports.push(login);
    if !logged_in {
        return reports;
    }

    let record = smoke_record(isrc);
    let mut created_id = None;
    let create = judge("create", client.create(&record), |created| match created {
        Some(created) => {
            created_id = Some(created.id);
            StepReport::pass("create", format!("id {}", created.id))
        }
        None => StepReport::fail("create", "no id returned"),
    });
    reports.push(create);

    if created_id.is_some() {
        let mut fetched = None;
        let read = judge("get by ISRC", client.get_by_isrc(isrc), |data| match data {
            Some(stored) if stored.isrc == isrc => {
                let detail = stored.title.clone();
                fetched = Some(stored);
                StepReport::pass("get by ISRC", detail)
            }
            Some(stored) => StepReport::fail("get by ISRC", format!("got ISRC {}", stored.isrc)),
            None => StepReport::fail("get by ISRC", "no record returned"),
        });
        reports.push(read);

        if let Some(stored) = fetched {
            let expected = (record.creators.len(), record.performers.len());
            let actual = (stored.creators.len(), stored.performers.len());
            let detail = format!("{} creators, {} performers", actual.0, actual.1);
            reports.push(if expected == actual {
                StepReport::pass("rights holders", detail)
            } else {
                StepReport::fail(
                    "rights holders",
                    format!("{} (expected {}, {})", detail, expected.0, expected.1),
                )
            });
        }
    }

    if let Some(id) = created_id {
        reports.push(judge("cleanup", client.delete(id), |_| {
            StepReport::pass("cleanup", format!("deleted {}", id))
        }));
    }

    reports.push(judge("logout", client.logout(), |_| {
        StepReport::pass("logout", "session closed")
    }));

    reports
}

/// Runs the smoke test against the configured registry.
pub fn run(config: &CliConfig, isrc: Option<&str>) -> Result<()> {
    let Some(credentials) = config.credentials()? else {
        bail!("The smoke test logs in: pass --email or set PHONOREG_EMAIL");
    };
    let isrc = isrc.map(str::to_string).unwrap_or_else(fresh_isrc);

    display::info(&format!("Smoke test against {} with ISRC {}", config.base_url, isrc));
    let mut client = open_client(config)?;
    let reports = run_steps(&mut client, &credentials, &isrc);

    for report in &reports {
        display::step(report.name, report.passed, &report.detail);
    }

    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        bail!("{} of {} steps failed", failed, reports.len());
    }
    display::success(&format!("All {} steps passed", reports.len()));
    Ok(())
}
