// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use anyhow::Result;
use console::{style, Style};
use serde::Serialize;
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

use phonoreg_core::{
    DocumentValidation, DurationValidation, HealthStatus, IsrcValidation, Phonogram, PhonogramPage,
};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Tabled)]
struct PhonogramRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "ISRC")]
    isrc: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Displays one page of phonograms as a table.
pub fn display_page(page: &PhonogramPage) {
    if page.items.is_empty() {
        info("No phonograms found.");
        return;
    }

    let rows: Vec<PhonogramRow> = page
        .items
        .iter()
        .map(|p| PhonogramRow {
            id: or_dash(p.id),
            isrc: p.isrc.clone(),
            title: p.title.clone(),
            year: or_dash(p.release_year),
            status: or_dash(p.status.as_deref()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    if let Some(pagination) = &page.pagination {
        println!(
            "{}",
            style(format!(
                "Page {}/{} ({} total)",
                pagination.page,
                pagination.pages.max(1),
                pagination.total
            ))
            .dim()
        );
    }
}

/// Displays a single phonogram with its rights holders.
pub fn display_phonogram(record: &Phonogram) {
    let width = 48;
    let label = Style::new().dim();

    println!("{}", "─".repeat(width));
    println!("  {}", style(&record.title).bold().cyan());
    println!("  {:14} {}", label.apply_to("ISRC"), record.isrc);
    println!("{}", "─".repeat(width));

    let fields = [
        ("ID", or_dash(record.id)),
        ("Work", or_dash(record.work_title.as_deref())),
        ("Duration", or_dash(record.duration.as_ref())),
        ("Year", or_dash(record.release_year)),
        ("Genre", or_dash(record.genre.as_deref())),
        ("Producer", or_dash(record.producer_name.as_deref())),
        ("Status", or_dash(record.status.as_deref())),
    ];
    for (name, value) in fields {
        println!("  {:14} {}", label.apply_to(name), value);
    }

    if !record.creators.is_empty() {
        println!();
        println!("  {}", style("Creators").bold());
        for creator in &record.creators {
            println!(
                "    {} {} {}",
                creator.name,
                label.apply_to(or_dash(creator.role.as_deref())),
                or_dash(creator.share_percent.map(|p| format!("{}%", p)))
            );
        }
    }

    if !record.performers.is_empty() {
        println!();
        println!("  {}", style("Performers").bold());
        for performer in &record.performers {
            println!(
                "    {} {}",
                performer.name,
                label.apply_to(or_dash(performer.category.as_deref()))
            );
        }
    }

    println!("{}", "─".repeat(width));
}

/// Displays a liveness report.
pub fn display_health(health: &HealthStatus) {
    let status = if health.status == "healthy" || health.status == "online" {
        style(health.status.as_str()).green().bold()
    } else {
        style(health.status.as_str()).yellow().bold()
    };
    println!("Status:  {}", status);
    if let Some(service) = &health.service {
        println!("Service: {}", service);
    }
    if let Some(version) = &health.version {
        println!("Version: {}", version);
    }
}

/// Displays the registry's verdict on an ISRC.
pub fn display_validation(validation: &IsrcValidation) {
    if validation.valid {
        success(&format!("{} is well-formed", validation.isrc));
    } else {
        warning(&format!("{} is not a valid ISRC", validation.isrc));
    }
    if validation.exists {
        info("Already registered.");
    }
    if let Some(message) = &validation.message {
        println!("  {}", style(message).dim());
    }
}

/// Displays the registry's verdict on a CPF or CNPJ.
pub fn display_document_validation(validation: &DocumentValidation) {
    let shown = validation.formatted.as_deref().unwrap_or(&validation.document);
    let kind = validation.kind.as_deref().unwrap_or("document");
    if validation.valid {
        success(&format!("{} is a valid {}", shown, kind));
    } else {
        warning(&format!("{} is not a valid {}", shown, kind));
    }
    if let Some(message) = &validation.message {
        println!("  {}", style(message).dim());
    }
}

/// Displays a duration as the registry normalised it.
pub fn display_duration_validation(validation: &DurationValidation) {
    match (&validation.formatted, validation.valid) {
        (Some(formatted), true) => success(&format!(
            "{} is {} ({} s)",
            validation.original,
            formatted,
            or_dash(validation.total_seconds)
        )),
        _ => warning(&format!("{} is not a duration", validation.original)),
    }
    if let Some(message) = &validation.message {
        println!("  {}", style(message).dim());
    }
}

/// Prints a payload whose shape the client does not fix.
pub fn display_value(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => error(&format!("Cannot print payload: {}", e)),
    }
}

/// Prints one line of a step-by-step report.
pub fn step(name: &str, passed: bool, detail: &str) {
    let mark = if passed {
        style("PASS").green().bold()
    } else {
        style("FAIL").red().bold()
    };
    println!("[{}] {:22} {}", mark, name, style(detail).dim());
}
