// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use versus_arena_domain::{MatchId, ParticipantId, Slot};

/// A command represents voter intent as data only.
///
/// Commands are the only way to request tournament state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decide a specific match.
    RecordVote {
        /// The match being decided.
        match_id: MatchId,
        /// The winning participant.
        winner: ParticipantId,
    },
    /// Decide whichever match is currently up, picking a slot.
    VoteCurrent {
        /// The winning slot.
        slot: Slot,
    },
}
