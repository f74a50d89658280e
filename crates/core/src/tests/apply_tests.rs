// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_lettered_participants, create_test_now, create_test_participants, pid,
};
use crate::{
    Command, CoreError, RoundName, Seeding, Tournament, TransitionResult, apply,
    generate_tournament_id,
};
use time::OffsetDateTime;
use time::macros::datetime;
use versus_arena_domain::{DomainError, MatchId, Slot, TournamentId};

fn create_test_tournament() -> Tournament {
    Tournament::start(
        TournamentId::from_suffix("1"),
        &create_lettered_participants(),
        Some(String::from("Test Category")),
        Seeding::Preserved,
        create_test_now(),
    )
    .unwrap()
}

#[test]
fn test_start_records_seeded_participants() {
    let tournament: Tournament = create_test_tournament();
    assert_eq!(tournament.participants, create_lettered_participants());
    assert_eq!(tournament.bracket.size, 8);
    assert_eq!(tournament.category.as_deref(), Some("Test Category"));
    assert_eq!(tournament.started_at, create_test_now());
    assert!(tournament.completed_at.is_none());
    assert_eq!(
        tournament.current_round_name(),
        Some(RoundName::QuarterFinals)
    );
}

#[test]
fn test_start_shuffled_matches_its_own_participant_order() {
    let tournament: Tournament = Tournament::start(
        TournamentId::from_suffix("2"),
        &create_test_participants(16),
        None,
        Seeding::Shuffled,
        create_test_now(),
    )
    .unwrap();

    // Round one is exactly the stored order paired off, so the order alone
    // is enough to rebuild the bracket.
    for (m, pair) in tournament.bracket.rounds[0]
        .iter()
        .zip(tournament.participants.chunks(2))
    {
        assert_eq!(m.slot_a.as_ref(), Some(&pair[0]));
        assert_eq!(m.slot_b.as_ref(), Some(&pair[1]));
    }
}

#[test]
fn test_start_rejects_unsupported_sizes() {
    for count in [2, 4, 64] {
        let result: Result<Tournament, CoreError> = Tournament::start(
            TournamentId::from_suffix("3"),
            &create_test_participants(count),
            None,
            Seeding::Preserved,
            create_test_now(),
        );
        assert_eq!(
            result,
            Err(CoreError::DomainViolation(
                DomainError::UnsupportedTournamentSize { count }
            ))
        );
    }
}

#[test]
fn test_vote_current_returns_event() {
    let tournament: Tournament = create_test_tournament();
    let result: TransitionResult = apply(
        &tournament,
        Command::VoteCurrent { slot: Slot::B },
        create_test_now(),
    )
    .unwrap();

    assert_eq!(result.event.match_id, MatchId::new(1, 0));
    assert_eq!(result.event.round_name, RoundName::QuarterFinals);
    assert_eq!(result.event.winner.id.value(), "B");
    assert_eq!(result.event.loser.id.value(), "A");
    assert!(result.event.champion.is_none());

    assert_eq!(
        result.new_state.current_match().unwrap().id,
        MatchId::new(1, 1)
    );
    // The input is untouched.
    assert_eq!(tournament.current_match().unwrap().id, MatchId::new(1, 0));
}

#[test]
fn test_record_vote_command() {
    let tournament: Tournament = create_test_tournament();
    let result: TransitionResult = apply(
        &tournament,
        Command::RecordVote {
            match_id: MatchId::new(1, 2),
            winner: pid("F"),
        },
        create_test_now(),
    )
    .unwrap();

    assert_eq!(result.event.winner.id.value(), "F");
    assert_eq!(
        result.new_state.bracket.rounds[1][1]
            .slot_a
            .as_ref()
            .unwrap()
            .id
            .value(),
        "F"
    );
}

#[test]
fn test_invalid_winner_command_rejected() {
    let tournament: Tournament = create_test_tournament();
    let result: Result<TransitionResult, CoreError> = apply(
        &tournament,
        Command::RecordVote {
            match_id: MatchId::new(1, 0),
            winner: pid("H"),
        },
        create_test_now(),
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidWinner { .. }))
    ));
}

#[test]
fn test_completion_sets_champion_and_timestamp() {
    let finished_at: OffsetDateTime = datetime!(2026-01-04 12:30 UTC);
    let mut tournament: Tournament = create_test_tournament();

    for _ in 0..6 {
        tournament = apply(
            &tournament,
            Command::VoteCurrent { slot: Slot::A },
            create_test_now(),
        )
        .unwrap()
        .new_state;
        assert!(tournament.completed_at.is_none());
    }

    let last: TransitionResult = apply(
        &tournament,
        Command::VoteCurrent { slot: Slot::B },
        finished_at,
    )
    .unwrap();

    assert_eq!(last.event.round_name, RoundName::Final);
    assert_eq!(last.event.champion.as_ref().unwrap().id.value(), "E");
    assert_eq!(last.new_state.champion().unwrap().id.value(), "E");
    assert!(last.new_state.is_complete());
    assert_eq!(last.new_state.completed_at, Some(finished_at));
    assert!(last.new_state.current_round_name().is_none());
}

#[test]
fn test_vote_current_on_finished_tournament_fails() {
    let mut tournament: Tournament = create_test_tournament();
    while tournament.current_match().is_some() {
        tournament = apply(
            &tournament,
            Command::VoteCurrent { slot: Slot::A },
            create_test_now(),
        )
        .unwrap()
        .new_state;
    }

    let result: Result<TransitionResult, CoreError> = apply(
        &tournament,
        Command::VoteCurrent { slot: Slot::A },
        create_test_now(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoPlayableMatch))
    );
}

#[test]
fn test_generate_tournament_id_uses_millis() {
    let id: TournamentId = generate_tournament_id(datetime!(2026-01-01 00:00 UTC));
    assert_eq!(id.value(), "tournament-1767225600000");
}

#[test]
fn test_tournament_serde_round_trip() {
    let tournament: Tournament = apply(
        &create_test_tournament(),
        Command::VoteCurrent { slot: Slot::A },
        create_test_now(),
    )
    .unwrap()
    .new_state;

    let json: String = serde_json::to_string(&tournament).unwrap();
    let restored: Tournament = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tournament);
}
