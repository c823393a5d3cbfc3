// ABOUTME: Macrolog CLI - score a day's intake and drive coaching directives from the shell
// ABOUTME: Wraps the daily aggregator, directive parser, and quest recorder over a JSON record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence
//!
//! Usage:
//! ```bash
//! # Score a stored day against targets
//! macrolog-cli score --record data/u1/2025-01-15.json --targets targets.json
//!
//! # Show how a coach message parses
//! macrolog-cli parse --message message.txt
//!
//! # Store a directive, list its items, and complete one
//! macrolog-cli directive set --user <uuid> --date 2025-01-15 --message message.txt
//! macrolog-cli directive list --user <uuid> --date 2025-01-15
//! macrolog-cli directive complete --user <uuid> --date 2025-01-15 --item 3f2a9c0d11e4b7a8 \
//!     --profiles profiles.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use macrolog_engine::errors::AppResult;
use macrolog_engine::logging::LoggingConfig;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "macrolog-cli",
    about = "Macrolog nutrition engine CLI",
    long_about = "Score daily nutrient intake and replay coaching directives into meal, workout, and condition records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine config file (YAML); overrides MACROLOG_CONFIG_FILE
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Aggregate a daily record and print its quality scores
    Score {
        /// Daily record JSON file
        #[arg(long)]
        record: PathBuf,

        /// User targets JSON file (zero targets when omitted)
        #[arg(long)]
        targets: Option<PathBuf>,

        /// Treat the day as a planned rest day (full exercise score)
        #[arg(long)]
        rest_day: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a coach message and print its items
    Parse {
        /// Message file, or `-` for stdin
        #[arg(long)]
        message: PathBuf,
    },

    /// Directive storage and completion
    Directive {
        /// Root directory of the JSON record store
        #[arg(long, global = true, default_value = "./data/records")]
        store_dir: PathBuf,

        #[command(subcommand)]
        action: DirectiveCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DirectiveCommand {
    /// Store the day's coach message
    Set {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        date: NaiveDate,
        /// Message file, or `-` for stdin
        #[arg(long)]
        message: PathBuf,
    },

    /// List the day's items with completion state
    List {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        date: NaiveDate,
    },

    /// Complete one item, creating its record
    Complete {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        date: NaiveDate,
        /// Item identifier as printed by `list`
        #[arg(long)]
        item: String,
        /// Replacement text to record instead of the coach's wording
        #[arg(long)]
        edit: Option<String>,
        /// Nutrient profiles JSON file
        #[arg(long)]
        profiles: PathBuf,
    },

    /// Complete every open item
    CompleteAll {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        date: NaiveDate,
        /// Nutrient profiles JSON file
        #[arg(long)]
        profiles: PathBuf,
    },

    /// Remove the records an item created and clear its completion
    Undo {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        item: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Score {
            record,
            targets,
            rest_day,
            json,
        } => commands::score::run(&config, &record, targets.as_deref(), rest_day, json).await?,
        Command::Parse { message } => commands::directive::parse(&config, &message).await?,
        Command::Directive { store_dir, action } => match action {
            DirectiveCommand::Set {
                user,
                date,
                message,
            } => commands::directive::set(&config, &store_dir, user, date, &message).await?,
            DirectiveCommand::List { user, date } => {
                commands::directive::list(&config, &store_dir, user, date).await?;
            }
            DirectiveCommand::Complete {
                user,
                date,
                item,
                edit,
                profiles,
            } => {
                commands::directive::complete(
                    &config,
                    &store_dir,
                    &profiles,
                    user,
                    date,
                    &item,
                    edit.as_deref(),
                )
                .await?;
            }
            DirectiveCommand::CompleteAll {
                user,
                date,
                profiles,
            } => {
                commands::directive::complete_all(&config, &store_dir, &profiles, user, date)
                    .await?;
            }
            DirectiveCommand::Undo { user, date, item } => {
                commands::directive::undo(&config, &store_dir, user, date, &item).await?;
            }
        },
    }

    Ok(())
}
