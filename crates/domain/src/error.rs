// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bracket::MatchId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Participant count is not a power of two, or is below two.
    InvalidBracketSize {
        /// The rejected participant count.
        count: usize,
    },
    /// Participant count is a valid bracket size but not one a new
    /// tournament may be started with.
    UnsupportedTournamentSize {
        /// The rejected participant count.
        count: usize,
    },
    /// Two participants share the same id.
    DuplicateParticipant(String),
    /// Participant id is empty or invalid.
    InvalidParticipantId(String),
    /// No match with this id exists in the bracket.
    MatchNotFound(MatchId),
    /// The match exists but cannot take a vote right now.
    MatchNotPlayable {
        /// The match that was voted on.
        match_id: MatchId,
        /// Why the match is not playable.
        reason: &'static str,
    },
    /// The winner is not one of the two participants in the match.
    InvalidWinner {
        /// The match that was voted on.
        match_id: MatchId,
        /// The rejected winner id.
        participant: String,
    },
    /// A slot label was neither A nor B.
    InvalidSlot(String),
    /// A match id string could not be parsed.
    MalformedMatchId(String),
    /// There is no playable match left to vote on.
    NoPlayableMatch,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBracketSize { count } => {
                write!(
                    f,
                    "Invalid bracket size: {count}. Participant count must be a power of two and at least 2"
                )
            }
            Self::UnsupportedTournamentSize { count } => {
                write!(
                    f,
                    "Unsupported tournament size: {count}. Tournament must have 8, 16, or 32 participants"
                )
            }
            Self::DuplicateParticipant(id) => {
                write!(f, "Participant '{id}' appears more than once")
            }
            Self::InvalidParticipantId(msg) => write!(f, "Invalid participant id: {msg}"),
            Self::MatchNotFound(match_id) => write!(f, "Match {match_id} not found"),
            Self::MatchNotPlayable { match_id, reason } => {
                write!(f, "Match {match_id} is not playable: {reason}")
            }
            Self::InvalidWinner {
                match_id,
                participant,
            } => {
                write!(
                    f,
                    "Participant '{participant}' is not competing in match {match_id}"
                )
            }
            Self::InvalidSlot(value) => {
                write!(f, "Invalid slot: '{value}'. Expected A or B")
            }
            Self::MalformedMatchId(value) => write!(f, "Malformed match id: '{value}'"),
            Self::NoPlayableMatch => write!(f, "No playable match remains"),
        }
    }
}

impl std::error::Error for DomainError {}
