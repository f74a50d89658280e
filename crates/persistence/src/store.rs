// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use versus_arena::Tournament;

use crate::error::PersistenceError;

/// Storage for the tournament in progress.
///
/// The bracket engine never touches storage itself. Callers load the
/// current tournament, apply a vote, and save the result.
pub trait TournamentStore {
    /// Loads the current tournament, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_state(&mut self) -> Result<Option<Tournament>, PersistenceError>;

    /// Saves `tournament` and makes it the current tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_state(&mut self, tournament: &Tournament) -> Result<(), PersistenceError>;

    /// Forgets which tournament is current.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn clear_state(&mut self) -> Result<(), PersistenceError>;
}
