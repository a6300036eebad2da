// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail and publication queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftplan_audit::{AuditFilter, PlanningChange};
use shiftplan_domain::Publication;
use tracing::debug;

use crate::data_models::{PlanningChangeRow, PublicationRow};
use crate::diesel_schema::{planning_changes, publications};
use crate::error::PersistenceError;

/// Lists planning changes in insertion order.
///
/// Entity criteria are applied in SQL. The time window is applied after
/// decoding so comparisons use instants, not text.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_changes(
    conn: &mut SqliteConnection,
    filter: &AuditFilter,
) -> Result<Vec<PlanningChange>, PersistenceError> {
    let mut query = planning_changes::table.into_boxed();
    if let Some(entity_type) = &filter.entity_type {
        query = query.filter(planning_changes::entity_type.eq(entity_type.clone()));
    }
    if let Some(entity_id) = filter.entity_id {
        query = query.filter(planning_changes::entity_id.eq(entity_id));
    }
    let rows: Vec<PlanningChangeRow> = query
        .order(planning_changes::change_id.asc())
        .select(PlanningChangeRow::as_select())
        .load(conn)?;

    let mut changes = Vec::with_capacity(rows.len());
    for row in rows {
        let change = PlanningChange::try_from(row)?;
        if filter.matches(&change) {
            changes.push(change);
        }
    }
    debug!(count = changes.len(), "Loaded planning changes");
    Ok(changes)
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_publications(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<Vec<Publication>, PersistenceError> {
    let rows: Vec<PublicationRow> = publications::table
        .filter(publications::organization_id.eq(organization_id))
        .order(publications::publication_id.asc())
        .select(PublicationRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Publication::try_from).collect()
}
