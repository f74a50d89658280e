// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bracket engine.
//!
//! Every function here is pure: brackets go in, new brackets come out.
//! There is no cursor. "What is next" is always recomputed from the match
//! list, so a bracket rebuilt by replaying votes behaves exactly like the
//! one it was encoded from.

use tracing::debug;
use versus_arena_domain::{
    Bracket, DomainError, Match, MatchId, Participant, ParticipantId, Progress, Slot,
    validate_bracket_size, validate_unique_participants,
};

use crate::error::CoreError;
use crate::seeding::{Seeding, seed_participants};

/// Builds a fresh bracket from `participants`.
///
/// Round one pairs positions (0, 1), (2, 3), ... of the seeded list. Every
/// later round is made of empty placeholder matches, halving down to the
/// single Final.
///
/// With [`Seeding::Preserved`] the result is a pure function of the input
/// order, which is what vote replay depends on.
///
/// # Arguments
///
/// * `participants` - The competitors, in the order to seed them when preserved
/// * `seeding` - Whether to shuffle before pairing
///
/// # Errors
///
/// Returns an error if:
/// - The participant count is not a power of two of at least 2
/// - Two participants share an id
pub fn create_bracket(
    participants: &[Participant],
    seeding: Seeding,
) -> Result<Bracket, CoreError> {
    validate_bracket_size(participants.len())?;
    validate_unique_participants(participants)?;

    let seeded: Vec<Participant> = seed_participants(participants, seeding);

    let first_round: Vec<Match> = seeded
        .chunks_exact(2)
        .zip(0_u32..)
        .map(|(pair, index)| Match::seeded(1, index, pair[0].clone(), pair[1].clone()))
        .collect();

    let mut rounds: Vec<Vec<Match>> = vec![first_round];
    let mut match_count: usize = seeded.len() / 2;
    let mut round_number: u32 = 1;
    while match_count > 1 {
        match_count /= 2;
        round_number += 1;
        let placeholders: Vec<Match> = (0_u32..)
            .take(match_count)
            .map(|index| Match::pending(round_number, index))
            .collect();
        rounds.push(placeholders);
    }

    debug!(
        size = seeded.len(),
        rounds = rounds.len(),
        ?seeding,
        "Created bracket"
    );

    Ok(Bracket {
        size: seeded.len(),
        rounds,
        champion: None,
    })
}

/// Returns the first playable match in round-then-position order.
///
/// `None` means either the tournament is over or nothing downstream has
/// both of its slots filled yet.
#[must_use]
pub fn current_match(bracket: &Bracket) -> Option<&Match> {
    bracket.all_matches().find(|m| m.is_playable())
}

/// Returns the first playable match strictly after `after` in
/// round-then-position order.
///
/// Returns `None` if `after` is not in the bracket.
#[must_use]
pub fn next_match<'a>(bracket: &'a Bracket, after: &MatchId) -> Option<&'a Match> {
    let mut matches = bracket.all_matches();
    matches.by_ref().find(|m| &m.id == after)?;
    matches.find(|m| m.is_playable())
}

/// Records `winner` as the winner of `match_id`, returning the new bracket.
///
/// The input bracket is left untouched. If the match is in the last round
/// the winner becomes champion; otherwise the winner moves into round
/// `r + 1`, match `floor(i / 2)`, taking slot A when `i` is even and slot B
/// when it is odd.
///
/// # Arguments
///
/// * `bracket` - The current bracket (immutable)
/// * `match_id` - The match being decided
/// * `winner` - The id of one of the match's two occupants
///
/// # Errors
///
/// Returns an error if:
/// - No match has this id
/// - The match already has a winner or is missing an occupant
/// - `winner` is neither of the match's occupants
pub fn record_vote(
    bracket: &Bracket,
    match_id: &MatchId,
    winner: &ParticipantId,
) -> Result<Bracket, CoreError> {
    let target: &Match = bracket
        .find_match(match_id)
        .ok_or(DomainError::MatchNotFound(*match_id))?;

    if target.is_completed() {
        return Err(DomainError::MatchNotPlayable {
            match_id: *match_id,
            reason: "winner already decided",
        }
        .into());
    }
    if !target.is_filled() {
        return Err(DomainError::MatchNotPlayable {
            match_id: *match_id,
            reason: "both slots are not filled yet",
        }
        .into());
    }

    let invalid_winner = || DomainError::InvalidWinner {
        match_id: *match_id,
        participant: winner.value().to_string(),
    };
    let slot: Slot = target.slot_of(winner).ok_or_else(invalid_winner)?;
    let winning: Participant = target.occupant(slot).cloned().ok_or_else(invalid_winner)?;

    let round_idx: usize = round_index(match_id)?;
    let match_idx: usize = position_index(match_id)?;
    let is_final: bool = round_idx + 1 == bracket.rounds.len();

    let mut next: Bracket = bracket.clone();
    next.rounds
        .get_mut(round_idx)
        .and_then(|round| round.get_mut(match_idx))
        .ok_or(DomainError::MatchNotFound(*match_id))?
        .winner = Some(winning.clone());

    if is_final {
        debug!(%match_id, champion = %winning.id, "Champion decided");
        next.champion = Some(winning);
        return Ok(next);
    }

    let downstream_id: MatchId = MatchId::new(match_id.round() + 1, match_id.index() / 2);
    let downstream: &mut Match = next
        .rounds
        .get_mut(round_idx + 1)
        .and_then(|round| round.get_mut(match_idx / 2))
        .ok_or(DomainError::MatchNotFound(downstream_id))?;

    let fed: Slot = Slot::fed_by(match_id.index());
    debug!(
        %match_id,
        winner = %winning.id,
        %downstream_id,
        slot = %fed,
        "Recorded vote"
    );
    match fed {
        Slot::A => downstream.slot_a = Some(winning),
        Slot::B => downstream.slot_b = Some(winning),
    }

    Ok(next)
}

/// Records a vote for whoever occupies `slot` in `match_id`.
///
/// # Errors
///
/// Returns an error if the match does not exist, the slot is empty, or
/// the match is otherwise not playable.
pub fn record_slot_vote(
    bracket: &Bracket,
    match_id: &MatchId,
    slot: Slot,
) -> Result<Bracket, CoreError> {
    let target: &Match = bracket
        .find_match(match_id)
        .ok_or(DomainError::MatchNotFound(*match_id))?;
    let winner: ParticipantId = target
        .occupant(slot)
        .map(|p| p.id.clone())
        .ok_or(DomainError::MatchNotPlayable {
            match_id: *match_id,
            reason: "slot is empty",
        })?;
    record_vote(bracket, match_id, &winner)
}

/// Computes progress over the matches known so far.
///
/// `total` covers the filled matches (both slots occupied, decided or not)
/// in the rounds play has reached: round one, plus any later round holding
/// at least one decided match. Rounds nobody has voted in yet do not count
/// and neither do matches still waiting for an occupant, so the
/// denominator grows as the tournament advances and `is_complete` is true
/// at every fully decided round boundary, not only after the Final.
#[must_use]
pub fn progress(bracket: &Bracket) -> Progress {
    let reached: usize = bracket
        .rounds
        .iter()
        .rposition(|round| round.iter().any(Match::is_completed))
        .map_or(1, |idx| idx + 1);

    let known = || {
        bracket
            .rounds
            .iter()
            .take(reached)
            .flatten()
            .filter(|m| m.is_filled())
    };
    let completed: usize = known().filter(|m| m.is_completed()).count();
    let total: usize = known().count();

    let percentage: u8 = if total == 0 {
        0
    } else {
        u8::try_from((completed * 100 + total / 2) / total).unwrap_or(100)
    };

    Progress {
        completed,
        total,
        percentage,
        is_complete: completed == total,
    }
}

fn round_index(match_id: &MatchId) -> Result<usize, DomainError> {
    usize::try_from(match_id.round())
        .ok()
        .and_then(|r| r.checked_sub(1))
        .ok_or(DomainError::MatchNotFound(*match_id))
}

fn position_index(match_id: &MatchId) -> Result<usize, DomainError> {
    usize::try_from(match_id.index()).map_err(|_| DomainError::MatchNotFound(*match_id))
}
