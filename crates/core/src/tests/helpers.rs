// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;
use versus_arena_domain::{Bracket, Match, Participant, ParticipantId, Slot};

use crate::{Seeding, create_bracket, current_match, record_slot_vote};

pub fn create_test_participant(id: &str) -> Participant {
    Participant::new(
        ParticipantId::new(id).unwrap(),
        format!("Song {id}"),
        format!("https://img.example/{id}.jpg"),
    )
}

pub fn create_test_participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|i| create_test_participant(&format!("p{i}")))
        .collect()
}

/// Participants named A through H.
pub fn create_lettered_participants() -> Vec<Participant> {
    ["A", "B", "C", "D", "E", "F", "G", "H"]
        .into_iter()
        .map(create_test_participant)
        .collect()
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-01-04 12:00 UTC)
}

pub fn create_preserved_bracket(participants: &[Participant]) -> Bracket {
    create_bracket(participants, Seeding::Preserved).unwrap()
}

pub fn pid(id: &str) -> ParticipantId {
    ParticipantId::new(id).unwrap()
}

pub fn occupant_ids(m: &Match) -> (Option<String>, Option<String>) {
    (
        m.slot_a.as_ref().map(|p| p.id.value().to_string()),
        m.slot_b.as_ref().map(|p| p.id.value().to_string()),
    )
}

/// Votes through every playable match, letting `choose` pick a slot.
pub fn play_out(mut bracket: Bracket, mut choose: impl FnMut(&Match) -> Slot) -> Bracket {
    while let Some(m) = current_match(&bracket) {
        let slot: Slot = choose(m);
        let id = m.id;
        bracket = record_slot_vote(&bracket, &id, slot).unwrap();
    }
    bracket
}
