// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Display name of a round, derived from how many matches it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundName {
    /// One match left.
    Final,
    /// Two matches.
    SemiFinals,
    /// Four matches.
    QuarterFinals,
    /// Any earlier round, named after the number of participants still in it.
    RoundOf(u64),
}

impl std::fmt::Display for RoundName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Final => write!(f, "Final"),
            Self::SemiFinals => write!(f, "Semi-Finals"),
            Self::QuarterFinals => write!(f, "Quarter-Finals"),
            Self::RoundOf(participants) => write!(f, "Round of {participants}"),
        }
    }
}

/// Names `round_number` (1-based) of a bracket with `total_rounds` rounds.
///
/// The round holds `2^(total_rounds - round_number)` matches. Rounds past
/// the Final are clamped to it.
#[must_use]
pub fn round_name(round_number: u32, total_rounds: u32) -> RoundName {
    let remaining_matches: u64 = 1_u64
        .checked_shl(total_rounds.saturating_sub(round_number))
        .unwrap_or(u64::MAX);

    match remaining_matches {
        1 => RoundName::Final,
        2 => RoundName::SemiFinals,
        4 => RoundName::QuarterFinals,
        n => RoundName::RoundOf(n.saturating_mul(2)),
    }
}
