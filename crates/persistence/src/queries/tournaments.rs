// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use versus_arena::Tournament;
use versus_arena_domain::TournamentId;

use crate::data_models::TournamentSummary;
use crate::diesel_schema::{current_tournament, saved_tournaments};
use crate::error::PersistenceError;

/// Diesel Queryable struct for the list view.
#[derive(Queryable, Selectable)]
#[diesel(table_name = saved_tournaments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct SummaryRow {
    tournament_id: String,
    tournament_size: i32,
    champion_name: Option<String>,
    saved_at: String,
}

impl TryFrom<SummaryRow> for TournamentSummary {
    type Error = PersistenceError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        let size: usize = usize::try_from(row.tournament_size).map_err(|_| {
            PersistenceError::SerializationError(format!(
                "Invalid tournament size {} for {}",
                row.tournament_size, row.tournament_id
            ))
        })?;
        Ok(Self {
            id: TournamentId::new(&row.tournament_id),
            size,
            champion: row.champion_name,
            saved_at: OffsetDateTime::parse(&row.saved_at, &Rfc3339)?,
        })
    }
}

/// Loads the tournament the current pointer names.
///
/// # Errors
///
/// Returns an error if the query fails or the stored state cannot be
/// deserialized. Returns `Ok(None)` if no tournament is current.
pub fn get_current_tournament(
    conn: &mut SqliteConnection,
) -> Result<Option<Tournament>, PersistenceError> {
    let state_json: Option<String> = current_tournament::table
        .inner_join(saved_tournaments::table)
        .select(saved_tournaments::state_json)
        .first::<String>(conn)
        .optional()?;

    debug!(found = state_json.is_some(), "Loaded current tournament");
    state_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(Into::into)
}

/// Loads a saved tournament by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored state cannot be
/// deserialized. Returns `Ok(None)` if no tournament has this id.
pub fn get_tournament(
    conn: &mut SqliteConnection,
    id: &TournamentId,
) -> Result<Option<Tournament>, PersistenceError> {
    let state_json: Option<String> = saved_tournaments::table
        .filter(saved_tournaments::tournament_id.eq(id.value()))
        .select(saved_tournaments::state_json)
        .first::<String>(conn)
        .optional()?;

    state_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(Into::into)
}

/// Lists every saved tournament, most recently saved first.
///
/// # Errors
///
/// Returns an error if the query fails or a row holds an unparseable value.
pub fn list_tournaments(
    conn: &mut SqliteConnection,
) -> Result<Vec<TournamentSummary>, PersistenceError> {
    let rows: Vec<SummaryRow> = saved_tournaments::table
        .order((
            saved_tournaments::saved_at.desc(),
            saved_tournaments::tournament_id.desc(),
        ))
        .select(SummaryRow::as_select())
        .load(conn)?;

    rows.into_iter().map(TournamentSummary::try_from).collect()
}
