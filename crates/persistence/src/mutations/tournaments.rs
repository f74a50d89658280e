// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use versus_arena::Tournament;
use versus_arena_domain::TournamentId;

use crate::diesel_schema::{current_tournament, saved_tournaments};
use crate::error::PersistenceError;

/// The only row `current_tournament` ever holds.
const CURRENT_SLOT: i32 = 1;

/// Saves `tournament` and makes it the current one.
///
/// An existing row with the same id is overwritten in place.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tournament` - The tournament to store
/// * `saved_at` - Recorded as the save time
///
/// # Errors
///
/// Returns an error if serialization fails or the database rejects either
/// write. Neither write is kept if the other fails.
pub fn save_tournament(
    conn: &mut SqliteConnection,
    tournament: &Tournament,
    saved_at: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let state_json: String = serde_json::to_string(tournament)?;
    let saved_at: String = saved_at.format(&Rfc3339)?;
    let size: i32 = i32::try_from(tournament.bracket.size).map_err(|_| {
        PersistenceError::SerializationError(format!(
            "Tournament size {} does not fit in the database",
            tournament.bracket.size
        ))
    })?;
    let champion_name: Option<&str> = tournament.champion().map(|p| p.name.as_str());
    let id: &str = tournament.id.value();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(saved_tournaments::table)
            .values((
                saved_tournaments::tournament_id.eq(id),
                saved_tournaments::tournament_size.eq(size),
                saved_tournaments::champion_name.eq(champion_name),
                saved_tournaments::state_json.eq(&state_json),
                saved_tournaments::saved_at.eq(&saved_at),
            ))
            .on_conflict(saved_tournaments::tournament_id)
            .do_update()
            .set((
                saved_tournaments::tournament_size.eq(excluded(saved_tournaments::tournament_size)),
                saved_tournaments::champion_name.eq(excluded(saved_tournaments::champion_name)),
                saved_tournaments::state_json.eq(excluded(saved_tournaments::state_json)),
                saved_tournaments::saved_at.eq(excluded(saved_tournaments::saved_at)),
            ))
            .execute(conn)?;

        diesel::replace_into(current_tournament::table)
            .values((
                current_tournament::slot.eq(CURRENT_SLOT),
                current_tournament::tournament_id.eq(id),
            ))
            .execute(conn)?;

        Ok(())
    })?;

    debug!(%id, size, "Saved tournament");
    Ok(())
}

/// Unsets the current tournament. Saved tournaments are kept.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear_current_tournament(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let cleared: usize = diesel::delete(current_tournament::table).execute(conn)?;
    debug!(cleared, "Cleared current tournament");
    Ok(())
}

/// Deletes a saved tournament. If it was current, nothing is current
/// afterwards.
///
/// # Errors
///
/// Returns `TournamentNotFound` if no tournament has this id, or an error
/// if the delete fails.
pub fn delete_tournament(
    conn: &mut SqliteConnection,
    id: &TournamentId,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        saved_tournaments::table.filter(saved_tournaments::tournament_id.eq(id.value())),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::TournamentNotFound(id.value().to_string()));
    }

    debug!(%id, "Deleted tournament");
    Ok(())
}
