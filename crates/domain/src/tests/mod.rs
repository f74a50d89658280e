// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod bracket;
mod error;
mod types;

use crate::{Participant, ParticipantId};

pub fn create_test_participant(id: &str) -> Participant {
    Participant::new(
        ParticipantId::new(id).unwrap(),
        format!("Song {id}"),
        format!("https://img.example/{id}.jpg"),
    )
}
