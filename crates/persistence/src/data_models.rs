// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use versus_arena_domain::TournamentId;

/// One entry in the list of saved tournaments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSummary {
    /// Session identifier.
    pub id: TournamentId,
    /// Number of participants.
    pub size: usize,
    /// Name of the winner, if the tournament is finished.
    pub champion: Option<String>,
    /// When the tournament was last saved.
    pub saved_at: OffsetDateTime,
}
