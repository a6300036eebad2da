// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftplan::{AssignmentFilter, ShiftInstanceFilter};
use shiftplan_domain::{
    Assignment, ConflictRule, HrRule, ShiftInstance, ShiftTemplate, UserAvailability,
};

use crate::data_models::{
    AssignmentRow, AvailabilityRow, ConflictRuleRow, HrRuleRow, ShiftInstanceRow,
    ShiftTemplateRow,
};
use crate::diesel_schema::{
    assignments, conflict_rules, hr_rules, shift_instances, shift_templates, user_availability,
};
use crate::error::PersistenceError;

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn get_shift_template(
    conn: &mut SqliteConnection,
    template_id: i64,
) -> Result<Option<ShiftTemplate>, PersistenceError> {
    let row: Option<ShiftTemplateRow> = shift_templates::table
        .find(template_id)
        .select(ShiftTemplateRow::as_select())
        .first(conn)
        .optional()?;
    row.map(ShiftTemplate::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_shift_templates(
    conn: &mut SqliteConnection,
    mission_id: Option<i64>,
) -> Result<Vec<ShiftTemplate>, PersistenceError> {
    let mut query = shift_templates::table.into_boxed();
    if let Some(mission_id) = mission_id {
        query = query.filter(shift_templates::mission_id.eq(mission_id));
    }
    let rows: Vec<ShiftTemplateRow> = query
        .order(shift_templates::template_id.asc())
        .select(ShiftTemplateRow::as_select())
        .load(conn)?;
    rows.into_iter().map(ShiftTemplate::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn get_shift_instance(
    conn: &mut SqliteConnection,
    shift_instance_id: i64,
) -> Result<Option<ShiftInstance>, PersistenceError> {
    let row: Option<ShiftInstanceRow> = shift_instances::table
        .find(shift_instance_id)
        .select(ShiftInstanceRow::as_select())
        .first(conn)
        .optional()?;
    row.map(ShiftInstance::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_shift_instances(
    conn: &mut SqliteConnection,
    filter: &ShiftInstanceFilter,
) -> Result<Vec<ShiftInstance>, PersistenceError> {
    let mut query = shift_instances::table.into_boxed();
    if let Some(mission_id) = filter.mission_id {
        query = query.filter(shift_instances::mission_id.eq(mission_id));
    }
    if let Some(template_id) = filter.template_id {
        query = query.filter(shift_instances::template_id.eq(template_id));
    }
    let rows: Vec<ShiftInstanceRow> = query
        .order(shift_instances::shift_instance_id.asc())
        .select(ShiftInstanceRow::as_select())
        .load(conn)?;
    rows.into_iter().map(ShiftInstance::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    let row: Option<AssignmentRow> = assignments::table
        .find(assignment_id)
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?;
    row.map(Assignment::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_assignments(
    conn: &mut SqliteConnection,
    filter: &AssignmentFilter,
) -> Result<Vec<Assignment>, PersistenceError> {
    let mut query = assignments::table.into_boxed();
    if let Some(shift_instance_id) = filter.shift_instance_id {
        query = query.filter(assignments::shift_instance_id.eq(shift_instance_id));
    }
    if let Some(collaborator_id) = filter.collaborator_id {
        query = query.filter(assignments::collaborator_id.eq(collaborator_id));
    }
    let rows: Vec<AssignmentRow> = query
        .order(assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Assignment::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn get_availability(
    conn: &mut SqliteConnection,
    availability_id: i64,
) -> Result<Option<UserAvailability>, PersistenceError> {
    let row: Option<AvailabilityRow> = user_availability::table
        .find(availability_id)
        .select(AvailabilityRow::as_select())
        .first(conn)
        .optional()?;
    row.map(UserAvailability::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_availability(
    conn: &mut SqliteConnection,
    collaborator_id: Option<i64>,
) -> Result<Vec<UserAvailability>, PersistenceError> {
    let mut query = user_availability::table.into_boxed();
    if let Some(collaborator_id) = collaborator_id {
        query = query.filter(user_availability::collaborator_id.eq(collaborator_id));
    }
    let rows: Vec<AvailabilityRow> = query
        .order(user_availability::availability_id.asc())
        .select(AvailabilityRow::as_select())
        .load(conn)?;
    rows.into_iter().map(UserAvailability::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_hr_rules(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<Vec<HrRule>, PersistenceError> {
    let rows: Vec<HrRuleRow> = hr_rules::table
        .filter(hr_rules::organization_id.eq(organization_id))
        .order(hr_rules::hr_rule_id.asc())
        .select(HrRuleRow::as_select())
        .load(conn)?;
    rows.into_iter().map(HrRule::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_conflict_rules(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<Vec<ConflictRule>, PersistenceError> {
    let rows: Vec<ConflictRuleRow> = conflict_rules::table
        .filter(conflict_rules::organization_id.eq(organization_id))
        .order(conflict_rules::conflict_rule_id.asc())
        .select(ConflictRuleRow::as_select())
        .load(conn)?;
    rows.into_iter().map(ConflictRule::try_from).collect()
}
