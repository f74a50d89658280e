// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use tracing::info;
use versus_arena_domain::{Bracket, DomainError, Match, MatchId, Participant, ParticipantId, round_name};

use crate::command::Command;
use crate::engine::record_vote;
use crate::error::CoreError;
use crate::state::{Tournament, TransitionResult, VoteEvent};

/// Applies a command to the current tournament, producing a new tournament
/// and a record of what the vote did.
///
/// # Arguments
///
/// * `state` - The current tournament (immutable)
/// * `command` - The command to apply
/// * `now` - Used as the completion time if this vote decides the Final
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and vote event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - `VoteCurrent` is applied when no match is playable
/// - The targeted match does not exist or is not playable
/// - The winner is not one of the match's occupants
pub fn apply(
    state: &Tournament,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let (match_id, winner): (MatchId, ParticipantId) = match command {
        Command::RecordVote { match_id, winner } => (match_id, winner),
        Command::VoteCurrent { slot } => {
            let current: &Match = state.current_match().ok_or(DomainError::NoPlayableMatch)?;
            let winner: ParticipantId = current
                .occupant(slot)
                .map(|p| p.id.clone())
                .ok_or(DomainError::NoPlayableMatch)?;
            (current.id, winner)
        }
    };

    let bracket: Bracket = record_vote(&state.bracket, &match_id, &winner)?;

    let decided: &Match = bracket
        .find_match(&match_id)
        .ok_or(DomainError::MatchNotFound(match_id))?;
    let (winner, loser): (Participant, Participant) =
        match (decided.winner.clone(), decided.loser().cloned()) {
            (Some(winner), Some(loser)) => (winner, loser),
            _ => return Err(DomainError::MatchNotFound(match_id).into()),
        };

    let event: VoteEvent = VoteEvent {
        match_id,
        round_name: round_name(match_id.round(), bracket.total_rounds()),
        winner,
        loser,
        champion: bracket.champion.clone(),
    };

    let completed_at: Option<OffsetDateTime> = if bracket.is_complete() {
        state.completed_at.or(Some(now))
    } else {
        None
    };

    let new_state: Tournament = Tournament {
        bracket,
        completed_at,
        ..state.clone()
    };

    info!(
        before = %state.summary(),
        after = %new_state.summary(),
        match_id = %event.match_id,
        winner = %event.winner.id,
        "Vote applied"
    );

    Ok(TransitionResult { new_state, event })
}
