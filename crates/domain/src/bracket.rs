// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two positions in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The first (upper) position.
    A,
    /// The second (lower) position.
    B,
}

impl Slot {
    /// Returns the downstream slot fed by the match at `index` (0-based)
    /// within its round: even positions feed slot A, odd positions slot B.
    #[must_use]
    pub const fn fed_by(index: u32) -> Self {
        if index % 2 == 0 { Self::A } else { Self::B }
    }

    /// Returns the opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Returns the slot's single-letter label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Slot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" | "1" => Ok(Self::A),
            "B" | "b" | "2" => Ok(Self::B),
            other => Err(DomainError::InvalidSlot(other.to_string())),
        }
    }
}

/// Deterministic match identifier: `r{round}-m{index}`.
///
/// `round` is 1-based, `index` is the 0-based position within the round.
/// Rebuilding a bracket from the same inputs always yields the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatchId {
    round: u32,
    index: u32,
}

impl MatchId {
    /// Creates the id for the match at `index` (0-based) in `round` (1-based).
    #[must_use]
    pub const fn new(round: u32, index: u32) -> Self {
        Self { round, index }
    }

    /// The 1-based round number.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The 0-based position within the round.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}-m{}", self.round, self.index)
    }
}

impl FromStr for MatchId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::MalformedMatchId(s.to_string());

        let (round_part, index_part) = s.split_once('-').ok_or_else(malformed)?;
        let round: u32 = round_part
            .strip_prefix('r')
            .and_then(|r| r.parse().ok())
            .ok_or_else(malformed)?;
        let index: u32 = index_part
            .strip_prefix('m')
            .and_then(|m| m.parse().ok())
            .ok_or_else(malformed)?;

        if round == 0 {
            return Err(malformed());
        }
        Ok(Self { round, index })
    }
}

impl TryFrom<String> for MatchId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.to_string()
    }
}

/// One head-to-head slot pairing in the bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Deterministic identifier.
    pub id: MatchId,
    /// 1-based round number; round 1 is played first.
    pub round_number: u32,
    /// 1-based position within the round.
    pub match_number: u32,
    /// Occupant of slot A, once known.
    pub slot_a: Option<Participant>,
    /// Occupant of slot B, once known.
    pub slot_b: Option<Participant>,
    /// The decided winner. Never changes once set.
    pub winner: Option<Participant>,
}

impl Match {
    /// Creates a match with both slots and the winner empty.
    ///
    /// `index` is the 0-based position within the round; `match_number` is
    /// `index + 1`.
    #[must_use]
    pub const fn pending(round_number: u32, index: u32) -> Self {
        Self {
            id: MatchId::new(round_number, index),
            round_number,
            match_number: index.saturating_add(1),
            slot_a: None,
            slot_b: None,
            winner: None,
        }
    }

    /// Creates a match with both slots already occupied, at the 0-based
    /// `index` within its round.
    #[must_use]
    pub fn seeded(
        round_number: u32,
        index: u32,
        slot_a: Participant,
        slot_b: Participant,
    ) -> Self {
        Self {
            id: MatchId::new(round_number, index),
            round_number,
            match_number: index.saturating_add(1),
            slot_a: Some(slot_a),
            slot_b: Some(slot_b),
            winner: None,
        }
    }

    /// Both slots filled and no winner yet.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some() && self.winner.is_none()
    }

    /// A winner has been recorded.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.winner.is_some()
    }

    /// Both slots filled, decided or not.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some()
    }

    /// Returns the occupant of `slot`, if any.
    #[must_use]
    pub const fn occupant(&self, slot: Slot) -> Option<&Participant> {
        match slot {
            Slot::A => self.slot_a.as_ref(),
            Slot::B => self.slot_b.as_ref(),
        }
    }

    /// Returns which slot `participant` occupies in this match.
    #[must_use]
    pub fn slot_of(&self, participant: &ParticipantId) -> Option<Slot> {
        if self.slot_a.as_ref().is_some_and(|p| &p.id == participant) {
            Some(Slot::A)
        } else if self.slot_b.as_ref().is_some_and(|p| &p.id == participant) {
            Some(Slot::B)
        } else {
            None
        }
    }

    /// Returns the slot the winner occupied, once decided.
    #[must_use]
    pub fn winning_slot(&self) -> Option<Slot> {
        self.winner.as_ref().and_then(|w| self.slot_of(&w.id))
    }

    /// Returns the losing participant, once decided.
    #[must_use]
    pub fn loser(&self) -> Option<&Participant> {
        self.winning_slot()
            .and_then(|slot| self.occupant(slot.other()))
    }

    /// The 0-based position within the round.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.id.index()
    }
}

/// The full single-elimination tournament state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Total participant count; always a power of two.
    pub size: usize,
    /// Rounds in play order. Round 1 has `size / 2` matches, the last round
    /// holds the single Final.
    pub rounds: Vec<Vec<Match>>,
    /// Winner of the Final, once decided.
    pub champion: Option<Participant>,
}

impl Bracket {
    /// Number of rounds, including the Final.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        u32::try_from(self.rounds.len()).unwrap_or(u32::MAX)
    }

    /// Every match, round by round, in position order.
    ///
    /// This is the canonical ordering used for vote replay and progress.
    pub fn all_matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flatten()
    }

    /// Total number of matches (`size - 1`).
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }

    /// Looks a match up by id.
    #[must_use]
    pub fn find_match(&self, match_id: &MatchId) -> Option<&Match> {
        let round_idx: usize = usize::try_from(match_id.round()).ok()?.checked_sub(1)?;
        let match_idx: usize = usize::try_from(match_id.index()).ok()?;
        self.rounds.get(round_idx)?.get(match_idx)
    }

    /// The Final has been decided.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.champion.is_some()
    }
}

/// How far a tournament has advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Matches with a recorded winner.
    pub completed: usize,
    /// Filled matches in the rounds play has reached, decided or not.
    pub total: usize,
    /// `completed / total` as a rounded percentage; 0 when `total` is 0.
    pub percentage: u8,
    /// Every currently known match is decided.
    pub is_complete: bool,
}
