// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rand::Rng;
use rand::seq::SliceRandom;
use versus_arena_domain::Participant;

/// How round-one positions are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeding {
    /// Uniform random permutation of the input.
    Shuffled,
    /// Input order is the seeding. Used when rebuilding a bracket whose
    /// random seeding was already captured elsewhere.
    Preserved,
}

/// Returns the participants in seeded order, drawing from the thread RNG.
#[must_use]
pub fn seed_participants(participants: &[Participant], seeding: Seeding) -> Vec<Participant> {
    seed_participants_with(participants, seeding, &mut rand::rng())
}

/// Returns the participants in seeded order, shuffling with `rng` when
/// `seeding` is [`Seeding::Shuffled`].
#[must_use]
pub fn seed_participants_with<R: Rng + ?Sized>(
    participants: &[Participant],
    seeding: Seeding,
    rng: &mut R,
) -> Vec<Participant> {
    let mut seeded: Vec<Participant> = participants.to_vec();
    if seeding == Seeding::Shuffled {
        seeded.shuffle(rng);
    }
    seeded
}
