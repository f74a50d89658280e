// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command handlers.
//!
//! Each handler takes the store and an output sink so the binary and the
//! tests drive exactly the same code.

use std::io::Write;
use std::path::Path;

use time::OffsetDateTime;
use tracing::info;
use versus_arena::{Command, Seeding, Tournament, TransitionResult, apply, generate_tournament_id};
use versus_arena_codec::{decode, encode};
use versus_arena_domain::{DomainError, Match, MatchId, Participant, ParticipantId, Slot, TournamentId};
use versus_arena_persistence::{Persistence, PersistenceError, TournamentStore, TournamentSummary};

use crate::error::CliError;
use crate::render::{render_bracket, render_status, render_summaries, render_up_next, render_vote};

fn require_current<S: TournamentStore>(store: &mut S) -> Result<Tournament, CliError> {
    store.load_state()?.ok_or(CliError::NoTournament)
}

/// Reads a JSON array of participants.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a participant list.
pub fn read_participants(path: &Path) -> Result<Vec<Participant>, CliError> {
    let contents: String = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::InvalidParticipants(e.to_string()))
}

/// Starts a tournament and makes it current.
///
/// # Errors
///
/// Returns an error if the participants are not a valid tournament field or
/// the store fails.
pub fn start<S: TournamentStore>(
    store: &mut S,
    participants: &[Participant],
    category: Option<String>,
    seeding: Seeding,
    now: OffsetDateTime,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tournament: Tournament = Tournament::start(
        generate_tournament_id(now),
        participants,
        category,
        seeding,
        now,
    )?;
    store.save_state(&tournament)?;
    info!(id = %tournament.id, size = tournament.bracket.size, "Started tournament");

    writeln!(out, "{}", render_status(&tournament))?;
    Ok(())
}

/// Prints the current tournament's state.
///
/// # Errors
///
/// Returns an error if nothing is current or the store fails.
pub fn status<S: TournamentStore>(store: &mut S, out: &mut impl Write) -> Result<(), CliError> {
    let tournament: Tournament = require_current(store)?;
    writeln!(out, "{}", render_status(&tournament))?;
    Ok(())
}

/// Votes for `slot` in the given match, or in the current match when none
/// is given.
///
/// # Errors
///
/// Returns an error if nothing is current, the match cannot take a vote,
/// or the store fails.
pub fn vote<S: TournamentStore>(
    store: &mut S,
    slot: Slot,
    match_id: Option<MatchId>,
    now: OffsetDateTime,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tournament: Tournament = require_current(store)?;

    let command: Command = match match_id {
        None => Command::VoteCurrent { slot },
        Some(match_id) => {
            let target: &Match = tournament
                .bracket
                .find_match(&match_id)
                .ok_or(DomainError::MatchNotFound(match_id))?;
            let winner: ParticipantId = target
                .occupant(slot)
                .map(|p| p.id.clone())
                .ok_or(DomainError::MatchNotPlayable {
                    match_id,
                    reason: "slot is empty",
                })?;
            Command::RecordVote { match_id, winner }
        }
    };

    let result: TransitionResult = apply(&tournament, command, now)?;
    store.save_state(&result.new_state)?;

    writeln!(out, "{}", render_vote(&result.event))?;
    writeln!(out, "{}", render_up_next(&result.new_state))?;
    Ok(())
}

/// Prints every round of the current tournament.
///
/// # Errors
///
/// Returns an error if nothing is current or the store fails.
pub fn bracket<S: TournamentStore>(store: &mut S, out: &mut impl Write) -> Result<(), CliError> {
    let tournament: Tournament = require_current(store)?;
    write!(out, "{}", render_bracket(&tournament.bracket))?;
    Ok(())
}

/// Prints the share code for the current tournament.
///
/// # Errors
///
/// Returns an error if nothing is current, encoding fails, or the store
/// fails.
pub fn share<S: TournamentStore>(store: &mut S, out: &mut impl Write) -> Result<(), CliError> {
    let tournament: Tournament = require_current(store)?;
    let code: String = encode(
        &tournament.participants,
        &tournament.bracket,
        tournament.id.suffix(),
    )?;
    writeln!(out, "{code}")?;
    Ok(())
}

/// Opens a shared tournament and makes it current.
///
/// # Errors
///
/// Returns an error if the code does not decode or the store fails.
pub fn open<S: TournamentStore>(
    store: &mut S,
    code: &str,
    now: OffsetDateTime,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tournament: Tournament = decode(code)
        .ok_or(CliError::InvalidShareCode)?
        .into_tournament(now);
    store.save_state(&tournament)?;
    info!(id = %tournament.id, "Opened shared tournament");

    writeln!(out, "{}", render_status(&tournament))?;
    Ok(())
}

/// Forgets the current tournament. Its saved copy is kept.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn reset<S: TournamentStore>(store: &mut S, out: &mut impl Write) -> Result<(), CliError> {
    store.clear_state()?;
    writeln!(out, "Current tournament cleared")?;
    Ok(())
}

/// Lists saved tournaments.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list(persistence: &mut Persistence, out: &mut impl Write) -> Result<(), CliError> {
    let summaries: Vec<TournamentSummary> = persistence.list_tournaments()?;
    writeln!(out, "{}", render_summaries(&summaries).trim_end())?;
    Ok(())
}

/// Makes a saved tournament current again.
///
/// # Errors
///
/// Returns an error if no tournament has this id or the store fails.
pub fn resume(
    persistence: &mut Persistence,
    id: &TournamentId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tournament: Tournament = persistence
        .load_tournament(id)?
        .ok_or_else(|| PersistenceError::TournamentNotFound(id.value().to_string()))?;
    persistence.save_state(&tournament)?;
    writeln!(out, "{}", render_status(&tournament))?;
    Ok(())
}

/// Deletes a saved tournament.
///
/// # Errors
///
/// Returns an error if no tournament has this id or the store fails.
pub fn delete(
    persistence: &mut Persistence,
    id: &TournamentId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    persistence.delete_tournament(id)?;
    writeln!(out, "Deleted {id}")?;
    Ok(())
}
