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

mod apply;
mod command;
mod engine;
mod error;
mod seeding;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use engine::{
    create_bracket, current_match, next_match, progress, record_slot_vote, record_vote,
};
pub use error::CoreError;
pub use seeding::{Seeding, seed_participants, seed_participants_with};
pub use state::{Tournament, TransitionResult, VoteEvent, generate_tournament_id};
pub use versus_arena_domain::{RoundName, round_name};
