// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonoreg CLI
//!
//! Command-line interface for the phonogram registry.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use phonoreg_core::{EcadQuery, EcadStatus, SearchQuery};
use tracing_subscriber::EnvFilter;

use commands::reports::ReportKind;
use commands::validation::FieldKind;
use config::{CliConfig, ProfileKind};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "phonoreg_core=info,phonoreg_cli=info";

#[derive(Parser)]
#[command(name = "phonoreg")]
#[command(version, about = "Client for the phonogram registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry base URL
    #[arg(
        long,
        global = true,
        env = "PHONOREG_BASE_URL",
        default_value = "http://localhost:5001"
    )]
    base_url: String,

    /// Registry deployment
    #[arg(long, global = true, value_enum, default_value = "legacy")]
    profile: ProfileKind,

    /// Override the API version path segment (e.g. "v1")
    #[arg(long, global = true)]
    api_version: Option<String>,

    /// Connect/read timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Account email; commands that need a session log in with it
    #[arg(long, global = true, env = "PHONOREG_EMAIL")]
    email: Option<String>,

    /// Account password (prompted when an email is given without one)
    #[arg(long, global = true, env = "PHONOREG_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Print payloads as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the registry is up
    Health,

    /// Show detailed service status
    Status,

    /// Show the logged-in account
    Whoami,

    /// List phonograms
    List {
        /// Page number (from 1)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Records per page
        #[arg(long, default_value_t = 20)]
        per_page: u32,

        /// Match ISRC or title
        #[arg(long)]
        search: Option<String>,

        /// Filter by collection-society status (PENDENTE, ENVIADO, ACEITO, RECUSADO)
        #[arg(long)]
        status: Option<EcadStatus>,
    },

    /// Search phonograms by term, genre and release year
    Search {
        /// Matched against ISRC, title, producer and album
        term: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        /// Earliest release year
        #[arg(long)]
        from: Option<i32>,

        /// Latest release year
        #[arg(long)]
        to: Option<i32>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        per_page: u32,
    },

    /// Show a phonogram by id
    Show {
        /// Phonogram id
        id: u64,
    },

    /// Show a phonogram by ISRC
    Isrc {
        /// ISRC code
        isrc: String,
    },

    /// Create a phonogram from a JSON file ("-" for stdin)
    Create {
        /// Input file path
        input: PathBuf,
    },

    /// Replace a phonogram with the contents of a JSON file ("-" for stdin)
    Update {
        /// Phonogram id
        id: u64,

        /// Input file path
        input: PathBuf,
    },

    /// Delete a phonogram
    Delete {
        /// Phonogram id
        id: u64,
    },

    /// Show aggregate counts
    Stats,

    /// Check a value with the registry
    Validate {
        /// Value to check
        value: String,

        /// What the value is
        #[arg(long, value_enum, default_value = "isrc")]
        kind: FieldKind,
    },

    /// Inspect ECAD submissions and returns
    #[command(subcommand)]
    Ecad(EcadCommands),

    /// Show an aggregate report
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
    },

    /// Run the end-to-end smoke test against a live registry
    Smoke {
        /// ISRC to create (default: derived from the clock)
        #[arg(long)]
        isrc: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum EcadCommands {
    /// List submissions
    Submissions {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        per_page: u32,

        /// Filter by submission status
        #[arg(long)]
        status: Option<String>,
    },

    /// Show a submission by id
    Submission { id: u64 },

    /// Show submission counts by status
    Stats,

    /// List returns
    Returns {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        per_page: u32,
    },

    /// Show a return by id
    Return { id: u64 },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display::error(&format!("{:#}", e));
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig {
        base_url: cli.base_url,
        profile: cli.profile,
        api_version: cli.api_version,
        timeout: Duration::from_secs(cli.timeout_secs),
        email: cli.email,
        password: cli.password,
        json: cli.json,
    };

    match cli.command {
        Commands::Health => commands::system::health(&config)?,
        Commands::Status => commands::system::status(&config)?,
        Commands::Whoami => commands::system::whoami(&config)?,
        Commands::List {
            page,
            per_page,
            search,
            status,
        } => {
            commands::phonograms::list(&config, page, per_page, search.as_deref(), status)?;
        }
        Commands::Search {
            term,
            genre,
            from,
            to,
            page,
            per_page,
        } => {
            let query = SearchQuery {
                term,
                genre,
                year_from: from,
                year_to: to,
                page,
                per_page,
            };
            commands::phonograms::search(&config, &query)?;
        }
        Commands::Show { id } => commands::phonograms::show(&config, id)?,
        Commands::Isrc { isrc } => commands::phonograms::show_isrc(&config, &isrc)?,
        Commands::Create { input } => commands::phonograms::create(&config, &input)?,
        Commands::Update { id, input } => commands::phonograms::update(&config, id, &input)?,
        Commands::Delete { id } => commands::phonograms::delete(&config, id)?,
        Commands::Stats => commands::system::stats(&config)?,
        Commands::Validate { value, kind } => commands::validation::validate(&config, kind, &value)?,
        Commands::Ecad(command) => run_ecad(&config, command)?,
        Commands::Report { kind } => commands::reports::show(&config, kind)?,
        Commands::Smoke { isrc } => commands::smoke::run(&config, isrc.as_deref())?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "phonoreg", &mut io::stdout());
        }
    }

    Ok(())
}

fn run_ecad(config: &CliConfig, command: EcadCommands) -> Result<()> {
    match command {
        EcadCommands::Submissions {
            page,
            per_page,
            status,
        } => {
            let mut query = EcadQuery::new(page, per_page);
            query.status = status;
            commands::ecad::submissions(config, &query)
        }
        EcadCommands::Submission { id } => commands::ecad::submission(config, id),
        EcadCommands::Stats => commands::ecad::submission_stats(config),
        EcadCommands::Returns { page, per_page } => commands::ecad::returns(config, page, per_page),
        EcadCommands::Return { id } => commands::ecad::show_return(config, id),
    }
}
