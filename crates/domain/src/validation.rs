// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Participant, ParticipantId, SUPPORTED_SIZES};
use std::collections::HashSet;

/// Validates that `count` participants can fill a single-elimination bracket.
///
/// # Arguments
///
/// * `count` - The number of participants
///
/// # Returns
///
/// * `Ok(())` if `count` is a power of two and at least 2
/// * `Err(DomainError::InvalidBracketSize)` otherwise
///
/// # Errors
///
/// Returns an error if the count is below 2 or not a power of two.
pub const fn validate_bracket_size(count: usize) -> Result<(), DomainError> {
    if count < 2 || !count.is_power_of_two() {
        return Err(DomainError::InvalidBracketSize { count });
    }
    Ok(())
}

/// Validates that a new tournament may be started with `count` participants.
///
/// Only the sizes in [`SUPPORTED_SIZES`] are offered for new tournaments.
///
/// # Errors
///
/// Returns an error if the count is not 8, 16, or 32.
pub fn validate_supported_size(count: usize) -> Result<(), DomainError> {
    if !SUPPORTED_SIZES.contains(&count) {
        return Err(DomainError::UnsupportedTournamentSize { count });
    }
    Ok(())
}

/// Validates that no two participants share an id.
///
/// Winner validation relies on ids being unique within a bracket.
///
/// # Errors
///
/// Returns an error naming the first repeated id.
pub fn validate_unique_participants(participants: &[Participant]) -> Result<(), DomainError> {
    let mut seen: HashSet<&ParticipantId> = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(&participant.id) {
            return Err(DomainError::DuplicateParticipant(
                participant.id.value().to_string(),
            ));
        }
    }
    Ok(())
}
