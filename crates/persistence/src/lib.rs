// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Versus Arena.
//!
//! Tournaments are stored whole, as JSON, in a `SQLite` database managed
//! with Diesel. A single-row table points at the tournament in progress.
//!
//! ## Schema
//!
//! - `saved_tournaments`: one row per session id, with the serialized
//!   tournament and a few columns pulled out for listing
//! - `current_tournament`: at most one row, referencing
//!   `saved_tournaments` with `ON DELETE CASCADE`
//!
//! Migrations are embedded in the binary and applied whenever a
//! connection is opened. Foreign key enforcement is verified at startup.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller its own shared-cache
//! in-memory database, so tests never see each other's rows.

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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use versus_arena::Tournament;
use versus_arena_domain::TournamentId;

use backend::sqlite::DatabaseLocation;

pub use data_models::TournamentSummary;
pub use error::PersistenceError;
pub use store::TournamentStore;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed tournament storage.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let location: DatabaseLocation = DatabaseLocation::Memory(format!("memdb_test_{db_id}"));

        Ok(Self {
            conn: backend::sqlite::open(&location)?,
        })
    }

    /// Creates a new persistence adapter with a file-based database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;
        let location: DatabaseLocation = DatabaseLocation::File(path_str.to_string());

        Ok(Self {
            conn: backend::sqlite::open(&location)?,
        })
    }

    /// Saves `tournament` with an explicit save time and makes it current.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament cannot be serialized or written.
    pub fn save_tournament_at(
        &mut self,
        tournament: &Tournament,
        saved_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        mutations::save_tournament(&mut self.conn, tournament, saved_at)
    }

    /// Loads any saved tournament by id, current or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored state is corrupt.
    pub fn load_tournament(
        &mut self,
        id: &TournamentId,
    ) -> Result<Option<Tournament>, PersistenceError> {
        queries::get_tournament(&mut self.conn, id)
    }

    /// Lists saved tournaments, most recently saved first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tournaments(&mut self) -> Result<Vec<TournamentSummary>, PersistenceError> {
        queries::list_tournaments(&mut self.conn)
    }

    /// Deletes a saved tournament.
    ///
    /// # Errors
    ///
    /// Returns `TournamentNotFound` if no tournament has this id.
    pub fn delete_tournament(&mut self, id: &TournamentId) -> Result<(), PersistenceError> {
        mutations::delete_tournament(&mut self.conn, id)
    }
}

impl TournamentStore for Persistence {
    fn load_state(&mut self) -> Result<Option<Tournament>, PersistenceError> {
        queries::get_current_tournament(&mut self.conn)
    }

    fn save_state(&mut self, tournament: &Tournament) -> Result<(), PersistenceError> {
        self.save_tournament_at(tournament, OffsetDateTime::now_utc())
    }

    fn clear_state(&mut self) -> Result<(), PersistenceError> {
        mutations::clear_current_tournament(&mut self.conn)
    }
}
