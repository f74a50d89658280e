// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_participant;
use crate::{Bracket, DomainError, Match, MatchId, ParticipantId, Slot};

#[test]
fn test_match_id_display_and_parse() {
    let id: MatchId = MatchId::new(2, 3);
    assert_eq!(id.to_string(), "r2-m3");

    let parsed: MatchId = "r2-m3".parse().unwrap();
    assert_eq!(parsed, id);
    assert_eq!(parsed.round(), 2);
    assert_eq!(parsed.index(), 3);
}

#[test]
fn test_match_id_rejects_malformed_input() {
    for input in ["", "r2", "x2-m3", "r2-x3", "r0-m0", "r-1-m0", "r2-m"] {
        let result: Result<MatchId, DomainError> = input.parse();
        assert!(
            matches!(result, Err(DomainError::MalformedMatchId(_))),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_match_id_serializes_as_string() {
    let json: String = serde_json::to_string(&MatchId::new(1, 0)).unwrap();
    assert_eq!(json, "\"r1-m0\"");
}

#[test]
fn test_slot_parity() {
    assert_eq!(Slot::fed_by(0), Slot::A);
    assert_eq!(Slot::fed_by(1), Slot::B);
    assert_eq!(Slot::fed_by(6), Slot::A);
    assert_eq!(Slot::fed_by(7), Slot::B);
}

#[test]
fn test_slot_parse() {
    assert_eq!("a".parse::<Slot>().unwrap(), Slot::A);
    assert_eq!("B".parse::<Slot>().unwrap(), Slot::B);
    assert!(matches!(
        "c".parse::<Slot>(),
        Err(DomainError::InvalidSlot(_))
    ));
}

#[test]
fn test_pending_match_is_not_playable() {
    let m: Match = Match::pending(2, 0);
    assert_eq!(m.id, MatchId::new(2, 0));
    assert_eq!(m.match_number, 1);
    assert!(!m.is_playable());
    assert!(!m.is_filled());
    assert!(!m.is_completed());
}

#[test]
fn test_seeded_match_playable_until_decided() {
    let mut m: Match = Match::seeded(
        1,
        1,
        create_test_participant("C"),
        create_test_participant("D"),
    );
    assert_eq!(m.id.to_string(), "r1-m1");
    assert_eq!(m.index(), 1);
    assert!(m.is_playable());

    m.winner = Some(create_test_participant("D"));
    assert!(!m.is_playable());
    assert!(m.is_completed());
    assert!(m.is_filled());
    assert_eq!(m.winning_slot(), Some(Slot::B));
    assert_eq!(m.loser().unwrap().id.value(), "C");
}

#[test]
fn test_slot_of_unknown_participant() {
    let m: Match = Match::seeded(
        1,
        0,
        create_test_participant("A"),
        create_test_participant("B"),
    );
    let stranger: ParticipantId = ParticipantId::new("Z").unwrap();
    assert_eq!(m.slot_of(&stranger), None);
    assert_eq!(m.slot_of(&ParticipantId::new("A").unwrap()), Some(Slot::A));
}

#[test]
fn test_find_match_by_id() {
    let bracket: Bracket = Bracket {
        size: 4,
        rounds: vec![
            vec![
                Match::seeded(1, 0, create_test_participant("A"), create_test_participant("B")),
                Match::seeded(1, 1, create_test_participant("C"), create_test_participant("D")),
            ],
            vec![Match::pending(2, 0)],
        ],
        champion: None,
    };

    assert_eq!(bracket.total_rounds(), 2);
    assert_eq!(bracket.match_count(), 3);
    assert_eq!(
        bracket.find_match(&MatchId::new(1, 1)).unwrap().match_number,
        2
    );
    assert!(bracket.find_match(&MatchId::new(2, 0)).is_some());
    assert!(bracket.find_match(&MatchId::new(3, 0)).is_none());
    assert!(bracket.find_match(&MatchId::new(1, 2)).is_none());

    let order: Vec<String> = bracket.all_matches().map(|m| m.id.to_string()).collect();
    assert_eq!(order, vec!["r1-m0", "r1-m1", "r2-m0"]);
    assert!(!bracket.is_complete());
}

#[test]
fn test_constructors_take_zero_based_index() {
    let first: Match = Match::pending(3, 0);
    assert_eq!(first.id, MatchId::new(3, 0));
    assert_eq!(first.match_number, 1);

    let last: Match = Match::pending(1, u32::MAX);
    assert_eq!(last.index(), u32::MAX);
    assert_eq!(last.match_number, u32::MAX);
}
