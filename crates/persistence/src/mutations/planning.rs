// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftplan_domain::{
    Assignment, ConflictRule, HrRule, ShiftInstance, ShiftTemplate, UserAvailability,
};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{
    AssignmentRecord, AvailabilityRecord, ConflictRuleRecord, HrRuleRecord, ShiftInstanceRecord,
    ShiftTemplateRecord,
};
use crate::diesel_schema::{
    assignments, conflict_rules, hr_rules, shift_instances, shift_templates, user_availability,
};
use crate::error::PersistenceError;

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_shift_template(
    conn: &mut SqliteConnection,
    template: &ShiftTemplate,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(shift_templates::table)
        .values(&ShiftTemplateRecord::try_from(template)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_shift_template(
    conn: &mut SqliteConnection,
    template: &ShiftTemplate,
) -> Result<(), PersistenceError> {
    diesel::update(shift_templates::table.find(template.id))
        .set(&ShiftTemplateRecord::try_from(template)?)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_shift_template(
    conn: &mut SqliteConnection,
    template_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(shift_templates::table.find(template_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_shift_instance(
    conn: &mut SqliteConnection,
    shift: &ShiftInstance,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(shift_instances::table)
        .values(&ShiftInstanceRecord::try_from(shift)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_shift_instance(
    conn: &mut SqliteConnection,
    shift: &ShiftInstance,
) -> Result<(), PersistenceError> {
    diesel::update(shift_instances::table.find(shift.id))
        .set(&ShiftInstanceRecord::try_from(shift)?)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails, including when assignments still
/// reference the shift.
pub fn delete_shift_instance(
    conn: &mut SqliteConnection,
    shift_instance_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(shift_instances::table.find(shift_instance_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(assignments::table)
        .values(&AssignmentRecord::try_from(assignment)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    diesel::update(assignments::table.find(assignment.id))
        .set(&AssignmentRecord::try_from(assignment)?)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(assignments::table.find(assignment_id)).execute(conn)?;
    Ok(())
}

/// Removes every assignment of a shift.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_assignments_for_shift(
    conn: &mut SqliteConnection,
    shift_instance_id: i64,
) -> Result<usize, PersistenceError> {
    let removed = diesel::delete(
        assignments::table.filter(assignments::shift_instance_id.eq(shift_instance_id)),
    )
    .execute(conn)?;
    debug!(shift_instance_id, removed, "Deleted assignments of shift");
    Ok(removed)
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_availability(
    conn: &mut SqliteConnection,
    record: &UserAvailability,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(user_availability::table)
        .values(&AvailabilityRecord::try_from(record)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_availability(
    conn: &mut SqliteConnection,
    record: &UserAvailability,
) -> Result<(), PersistenceError> {
    diesel::update(user_availability::table.find(record.id))
        .set(&AvailabilityRecord::try_from(record)?)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_availability(
    conn: &mut SqliteConnection,
    availability_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(user_availability::table.find(availability_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the config cannot be encoded or the insert fails.
pub fn insert_hr_rule(conn: &mut SqliteConnection, rule: &HrRule) -> Result<i64, PersistenceError> {
    diesel::insert_into(hr_rules::table)
        .values(&HrRuleRecord::try_from(rule)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the config cannot be encoded or the insert fails.
pub fn insert_conflict_rule(
    conn: &mut SqliteConnection,
    rule: &ConflictRule,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(conflict_rules::table)
        .values(&ConflictRuleRecord::try_from(rule)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if either delete fails.
pub fn delete_rules_for_organization(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(hr_rules::table.filter(hr_rules::organization_id.eq(organization_id)))
        .execute(conn)?;
    diesel::delete(
        conflict_rules::table.filter(conflict_rules::organization_id.eq(organization_id)),
    )
    .execute(conn)?;
    Ok(())
}
