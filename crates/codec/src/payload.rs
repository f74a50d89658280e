// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use versus_arena_domain::{Match, Participant, Slot};

/// Version written into every share payload.
pub const FORMAT_VERSION: u32 = 1;

/// Participant names are cut to this many characters to keep links short.
pub const MAX_NAME_CHARS: usize = 30;

/// Upper bound on the decompressed payload. A 32 participant tournament
/// with long image URLs is a few kilobytes.
pub const MAX_INFLATED_BYTES: usize = 64 * 1024;

const UNDECIDED: char = '0';
const SLOT_A_WON: char = '1';
const SLOT_B_WON: char = '2';

/// On-the-wire shape of a share link, with short keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(rename = "ver")]
    pub version: u32,
    #[serde(rename = "s")]
    pub participants: Vec<SharedParticipant>,
    #[serde(rename = "v")]
    pub votes: String,
    #[serde(rename = "id")]
    pub id_suffix: String,
    #[serde(rename = "z")]
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedParticipant {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "i")]
    pub image: String,
    #[serde(rename = "d")]
    pub id: String,
}

impl From<&Participant> for SharedParticipant {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name.chars().take(MAX_NAME_CHARS).collect(),
            image: participant.image.clone(),
            id: participant.id.value().to_string(),
        }
    }
}

/// Vote symbol for a match.
#[must_use]
pub fn vote_symbol(m: &Match) -> char {
    match m.winning_slot() {
        None => UNDECIDED,
        Some(Slot::A) => SLOT_A_WON,
        Some(Slot::B) => SLOT_B_WON,
    }
}

/// The slot a vote symbol selects. `Ok(None)` means undecided.
///
/// # Errors
///
/// Returns the symbol itself if it is not one of `0`, `1` or `2`.
pub const fn parse_vote_symbol(symbol: char) -> Result<Option<Slot>, char> {
    match symbol {
        UNDECIDED => Ok(None),
        SLOT_A_WON => Ok(Some(Slot::A)),
        SLOT_B_WON => Ok(Some(Slot::B)),
        other => Err(other),
    }
}
