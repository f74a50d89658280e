// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MatchId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidBracketSize { count: 6 };
    assert_eq!(
        format!("{err}"),
        "Invalid bracket size: 6. Participant count must be a power of two and at least 2"
    );

    let err: DomainError = DomainError::UnsupportedTournamentSize { count: 4 };
    assert_eq!(
        format!("{err}"),
        "Unsupported tournament size: 4. Tournament must have 8, 16, or 32 participants"
    );

    let err: DomainError = DomainError::DuplicateParticipant(String::from("A"));
    assert_eq!(format!("{err}"), "Participant 'A' appears more than once");

    let err: DomainError = DomainError::MatchNotFound(MatchId::new(4, 0));
    assert_eq!(format!("{err}"), "Match r4-m0 not found");

    let err: DomainError = DomainError::MatchNotPlayable {
        match_id: MatchId::new(2, 1),
        reason: "winner already decided",
    };
    assert_eq!(
        format!("{err}"),
        "Match r2-m1 is not playable: winner already decided"
    );

    let err: DomainError = DomainError::InvalidWinner {
        match_id: MatchId::new(1, 0),
        participant: String::from("Z"),
    };
    assert_eq!(
        format!("{err}"),
        "Participant 'Z' is not competing in match r1-m0"
    );

    let err: DomainError = DomainError::InvalidSlot(String::from("c"));
    assert_eq!(format!("{err}"), "Invalid slot: 'c'. Expected A or B");

    let err: DomainError = DomainError::MalformedMatchId(String::from("bogus"));
    assert_eq!(format!("{err}"), "Malformed match id: 'bogus'");

    let err: DomainError = DomainError::NoPlayableMatch;
    assert_eq!(format!("{err}"), "No playable match remains");
}
