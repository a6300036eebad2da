// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail and publication mutations.
//!
//! Planning changes are append-only: there is no update or delete.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftplan_audit::PlanningChange;
use shiftplan_domain::Publication;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{PlanningChangeRecord, PublicationRecord};
use crate::diesel_schema::{planning_changes, publications};
use crate::error::PersistenceError;

/// Appends a planning change.
///
/// # Errors
///
/// Returns an error if the payload cannot be encoded or the insert fails.
pub fn append_change(
    conn: &mut SqliteConnection,
    change: &PlanningChange,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(planning_changes::table)
        .values(&PlanningChangeRecord::try_from(change)?)
        .execute(conn)?;
    let change_id = get_last_insert_rowid(conn)?;
    debug!(change_id, action = %change.action, "Persisted planning change");
    Ok(change_id)
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_publication(
    conn: &mut SqliteConnection,
    publication: &Publication,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(publications::table)
        .values(&PublicationRecord::try_from(publication)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_publication(
    conn: &mut SqliteConnection,
    publication: &Publication,
) -> Result<(), PersistenceError> {
    diesel::update(publications::table.find(publication.id))
        .set(&PublicationRecord::try_from(publication)?)
        .execute(conn)?;
    Ok(())
}
