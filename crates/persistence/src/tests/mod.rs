// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::OffsetDateTime;
use time::macros::datetime;
use versus_arena::{Command, Seeding, Tournament, apply};
use versus_arena_domain::{Participant, ParticipantId, Slot, TournamentId};

pub fn create_test_participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|i| {
            Participant::new(
                ParticipantId::new(format!("p{i}")).unwrap(),
                format!("Song {i}"),
                format!("https://img.example/p{i}.jpg"),
            )
        })
        .collect()
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-01-04 12:00 UTC)
}

/// Starts an unshuffled eight participant tournament.
pub fn create_test_tournament(suffix: &str) -> Tournament {
    Tournament::start(
        TournamentId::from_suffix(suffix),
        &create_test_participants(8),
        Some(String::from("Test Category")),
        Seeding::Preserved,
        create_test_now(),
    )
    .unwrap()
}

/// Casts `votes` votes for slot A on whatever match is current.
pub fn vote_times(mut tournament: Tournament, votes: usize) -> Tournament {
    for _ in 0..votes {
        tournament = apply(
            &tournament,
            Command::VoteCurrent { slot: Slot::A },
            create_test_now(),
        )
        .unwrap()
        .new_state;
    }
    tournament
}
