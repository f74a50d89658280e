// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use versus_arena_domain::{
    Bracket, Match, MatchId, Participant, Progress, RoundName, TournamentId, round_name,
    validate_supported_size,
};

use crate::engine::{create_bracket, current_match, progress};
use crate::error::CoreError;
use crate::seeding::{Seeding, seed_participants};

/// A tournament session: a bracket plus everything needed to persist,
/// share and display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Session identifier.
    pub id: TournamentId,
    /// Optional free-form label such as "90s Hip Hop".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Participants in seeded order. Rebuilding a bracket from this list
    /// with [`Seeding::Preserved`] reproduces round one exactly.
    pub participants: Vec<Participant>,
    /// Current bracket state.
    pub bracket: Bracket,
    /// When the session was started.
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    /// When the champion was decided.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl Tournament {
    /// Starts a new tournament.
    ///
    /// # Arguments
    ///
    /// * `id` - The session identifier
    /// * `participants` - The competitors; must number 8, 16, or 32
    /// * `category` - Optional label
    /// * `seeding` - Whether to shuffle the competitors
    /// * `now` - The start time
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The participant count is not a supported tournament size
    /// - Two participants share an id
    pub fn start(
        id: TournamentId,
        participants: &[Participant],
        category: Option<String>,
        seeding: Seeding,
        now: OffsetDateTime,
    ) -> Result<Self, CoreError> {
        validate_supported_size(participants.len())?;

        let seeded: Vec<Participant> = seed_participants(participants, seeding);
        let bracket: Bracket = create_bracket(&seeded, Seeding::Preserved)?;

        Ok(Self {
            id,
            category,
            participants: seeded,
            bracket,
            started_at: now,
            completed_at: None,
        })
    }

    /// Assembles a session from an already built bracket, e.g. one decoded
    /// from a share link.
    #[must_use]
    pub fn from_parts(
        id: TournamentId,
        participants: Vec<Participant>,
        bracket: Bracket,
        now: OffsetDateTime,
    ) -> Self {
        let completed_at: Option<OffsetDateTime> = bracket.is_complete().then_some(now);
        Self {
            id,
            category: None,
            participants,
            bracket,
            started_at: now,
            completed_at,
        }
    }

    /// The match waiting for a vote, if any.
    #[must_use]
    pub fn current_match(&self) -> Option<&Match> {
        current_match(&self.bracket)
    }

    /// Name of the round the current match belongs to.
    #[must_use]
    pub fn current_round_name(&self) -> Option<RoundName> {
        self.current_match()
            .map(|m| round_name(m.round_number, self.bracket.total_rounds()))
    }

    /// Progress over the matches known so far.
    #[must_use]
    pub fn progress(&self) -> Progress {
        progress(&self.bracket)
    }

    /// The tournament winner, once decided.
    #[must_use]
    pub const fn champion(&self) -> Option<&Participant> {
        self.bracket.champion.as_ref()
    }

    /// The Final has been decided.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.bracket.is_complete()
    }

    /// Short description for logs.
    #[must_use]
    pub fn summary(&self) -> String {
        let progress: Progress = self.progress();
        format!(
            "id={},size={},completed={}/{}",
            self.id, self.bracket.size, progress.completed, progress.total
        )
    }
}

/// What a single vote did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteEvent {
    /// The decided match.
    pub match_id: MatchId,
    /// Name of the round the match belongs to.
    pub round_name: RoundName,
    /// Who won.
    pub winner: Participant,
    /// Who was eliminated.
    pub loser: Participant,
    /// Set when this vote decided the Final.
    pub champion: Option<Participant>,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: Tournament,
    /// What the transition did.
    pub event: VoteEvent,
}

/// Generates a session id from the current time: `tournament-{unix millis}`.
#[must_use]
pub fn generate_tournament_id(now: OffsetDateTime) -> TournamentId {
    let millis: i128 = now.unix_timestamp_nanos() / 1_000_000;
    TournamentId::from_suffix(&millis.to_string())
}
