// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::OffsetDateTime;
use time::macros::datetime;
use versus_arena::Seeding;
use versus_arena_domain::{Participant, ParticipantId};
use versus_arena_persistence::Persistence;

use crate::commands;

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

/// An in-memory store with an unshuffled eight participant tournament
/// already started.
pub fn create_started_store() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    commands::start(
        &mut persistence,
        &create_test_participants(8),
        Some(String::from("Test Category")),
        Seeding::Preserved,
        create_test_now(),
        &mut Vec::new(),
    )
    .unwrap();
    persistence
}

/// Runs a command against `persistence` and returns what it printed.
pub fn output_of(
    f: impl FnOnce(&mut Vec<u8>) -> Result<(), crate::error::CliError>,
) -> String {
    let mut out: Vec<u8> = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
