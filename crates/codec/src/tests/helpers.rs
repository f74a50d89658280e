// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::write::DeflateEncoder;
use versus_arena::{Seeding, create_bracket, current_match, record_slot_vote};
use versus_arena_domain::{Bracket, Match, Participant, ParticipantId, Slot};

/// Creates a participant with a predictable name and image.
pub fn create_test_participant(id: &str) -> Participant {
    Participant::new(
        ParticipantId::new(id).unwrap(),
        format!("Song {id}"),
        format!("https://img.example/{id}.jpg"),
    )
}

/// Creates `count` participants with ids `p0`, `p1`, ...
pub fn create_test_participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|i| create_test_participant(&format!("p{i}")))
        .collect()
}

/// Builds an unshuffled bracket.
pub fn create_preserved_bracket(participants: &[Participant]) -> Bracket {
    create_bracket(participants, Seeding::Preserved).unwrap()
}

/// Casts `votes` votes on the current match, picking slots with `choose`.
pub fn play(mut bracket: Bracket, votes: usize, mut choose: impl FnMut(&Match) -> Slot) -> Bracket {
    for _ in 0..votes {
        let Some(m) = current_match(&bracket) else {
            break;
        };
        let slot: Slot = choose(m);
        let id = m.id;
        bracket = record_slot_vote(&bracket, &id, slot).unwrap();
    }
    bracket
}

/// Alternates slot choices so both symbols show up in the vote string.
pub fn alternating(m: &Match) -> Slot {
    Slot::fed_by(m.round_number + m.index())
}

/// Compresses and encodes raw JSON the same way share links are built,
/// for crafting payloads by hand.
pub fn pack(json: &str) -> String {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes()).unwrap();
    URL_SAFE_NO_PAD.encode(encoder.finish().unwrap())
}

/// A well-formed JSON payload for a two participant bracket.
pub fn two_player_json(version: u32, votes: &str, size: usize) -> String {
    format!(
        r#"{{"ver":{version},"s":[{{"n":"A","i":"a.jpg","d":"a"}},{{"n":"B","i":"b.jpg","d":"b"}}],"v":"{votes}","id":"42","z":{size}}}"#
    )
}
