// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod error;
mod render;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use tracing::{error, info};
use versus_arena::Seeding;
use versus_arena_domain::{MatchId, Participant, Slot, TournamentId};
use versus_arena_persistence::Persistence;

use crate::error::CliError;

/// Versus Arena - run single-elimination voting brackets from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file.
    #[arg(short, long, default_value = "versus-arena.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Action {
    /// Start a tournament from a JSON file of participants
    Start {
        /// JSON array of `{"id", "name", "image"}` objects (8, 16 or 32 of them)
        file: PathBuf,
        /// Label shown alongside the tournament
        #[arg(short, long)]
        category: Option<String>,
        /// Pair participants in file order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },
    /// Show the current match and progress
    Status,
    /// Vote for slot a or b
    Vote {
        /// `a` or `b`
        #[arg(value_parser = parse_slot)]
        slot: Slot,
        /// Vote in this match (e.g. `r2-m0`) instead of the current one
        #[arg(short, long = "match", value_parser = parse_match_id)]
        match_id: Option<MatchId>,
    },
    /// Print every round
    Bracket,
    /// Print a share code for the current tournament
    Share,
    /// Open a tournament from a share code
    Open {
        /// The code printed by `share`
        code: String,
    },
    /// Forget the current tournament
    Reset,
    /// List saved tournaments
    List,
    /// Make a saved tournament current again
    Resume {
        /// Tournament id, with or without the `tournament-` prefix
        id: String,
    },
    /// Delete a saved tournament
    Delete {
        /// Tournament id, with or without the `tournament-` prefix
        id: String,
    },
}

fn parse_slot(value: &str) -> Result<Slot, String> {
    value.parse::<Slot>().map_err(|e| e.to_string())
}

fn parse_match_id(value: &str) -> Result<MatchId, String> {
    value.parse::<MatchId>().map_err(|e| e.to_string())
}

fn run(
    persistence: &mut Persistence,
    action: Action,
    now: OffsetDateTime,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match action {
        Action::Start {
            file,
            category,
            no_shuffle,
        } => {
            let participants: Vec<Participant> = commands::read_participants(&file)?;
            let seeding: Seeding = if no_shuffle {
                Seeding::Preserved
            } else {
                Seeding::Shuffled
            };
            commands::start(persistence, &participants, category, seeding, now, out)
        }
        Action::Status => commands::status(persistence, out),
        Action::Vote { slot, match_id } => commands::vote(persistence, slot, match_id, now, out),
        Action::Bracket => commands::bracket(persistence, out),
        Action::Share => commands::share(persistence, out),
        Action::Open { code } => commands::open(persistence, &code, now, out),
        Action::Reset => commands::reset(persistence, out),
        Action::List => commands::list(persistence, out),
        Action::Resume { id } => commands::resume(persistence, &TournamentId::new(&id), out),
        Action::Delete { id } => commands::delete(persistence, &TournamentId::new(&id), out),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so `share` output can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(database = %args.database.display(), "Opening tournament store");
    let mut persistence: Persistence = Persistence::new_with_file(&args.database)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&mut persistence, args.command, OffsetDateTime::now_utc(), &mut out) {
        error!(error = %err, "Command failed");
        return Err(err.into());
    }

    Ok(())
}
