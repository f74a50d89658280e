// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bracket;
mod error;
mod rounds;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use bracket::{Bracket, Match, MatchId, Progress, Slot};
pub use error::DomainError;
pub use rounds::{RoundName, round_name};
pub use types::{
    Participant, ParticipantId, SUPPORTED_SIZES, TOURNAMENT_ID_PREFIX, TournamentId,
};
pub use validation::{
    validate_bracket_size, validate_supported_size, validate_unique_participants,
};
