// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftplan::MissionFilter;
use shiftplan_domain::{Collaborator, Mission, Organization, Role, Site};
use tracing::debug;

use crate::data_models::{CollaboratorRow, MissionRow, OrganizationRow, RoleRow, SiteRow};
use crate::diesel_schema::{collaborators, missions, organizations, roles, sites};
use crate::error::PersistenceError;

/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_organization(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<Option<Organization>, PersistenceError> {
    let row: Option<OrganizationRow> = organizations::table
        .find(organization_id)
        .select(OrganizationRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Organization::from))
}

/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_organizations(
    conn: &mut SqliteConnection,
) -> Result<Vec<Organization>, PersistenceError> {
    let rows: Vec<OrganizationRow> = organizations::table
        .order(organizations::organization_id.asc())
        .select(OrganizationRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(Organization::from).collect())
}

/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_site(
    conn: &mut SqliteConnection,
    site_id: i64,
) -> Result<Option<Site>, PersistenceError> {
    let row: Option<SiteRow> = sites::table
        .find(site_id)
        .select(SiteRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Site::from))
}

/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_sites(
    conn: &mut SqliteConnection,
    organization_id: Option<i64>,
) -> Result<Vec<Site>, PersistenceError> {
    let mut query = sites::table.into_boxed();
    if let Some(organization_id) = organization_id {
        query = query.filter(sites::organization_id.eq(organization_id));
    }
    let rows: Vec<SiteRow> = query
        .order(sites::site_id.asc())
        .select(SiteRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(Site::from).collect())
}

/// # Errors
///
/// Returns an error if the query fails or a row holds invalid JSON tags.
pub fn get_role(
    conn: &mut SqliteConnection,
    role_id: i64,
) -> Result<Option<Role>, PersistenceError> {
    let row: Option<RoleRow> = roles::table
        .find(role_id)
        .select(RoleRow::as_select())
        .first(conn)
        .optional()?;
    row.map(Role::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row holds invalid JSON tags.
pub fn list_roles(
    conn: &mut SqliteConnection,
    organization_id: Option<i64>,
) -> Result<Vec<Role>, PersistenceError> {
    let mut query = roles::table.into_boxed();
    if let Some(organization_id) = organization_id {
        query = query.filter(roles::organization_id.eq(organization_id));
    }
    let rows: Vec<RoleRow> = query
        .order(roles::role_id.asc())
        .select(RoleRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Role::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row holds an unknown status.
pub fn get_collaborator(
    conn: &mut SqliteConnection,
    collaborator_id: i64,
) -> Result<Option<Collaborator>, PersistenceError> {
    let row: Option<CollaboratorRow> = collaborators::table
        .find(collaborator_id)
        .select(CollaboratorRow::as_select())
        .first(conn)
        .optional()?;
    row.map(Collaborator::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row holds an unknown status.
pub fn list_collaborators(
    conn: &mut SqliteConnection,
    organization_id: Option<i64>,
) -> Result<Vec<Collaborator>, PersistenceError> {
    let mut query = collaborators::table.into_boxed();
    if let Some(organization_id) = organization_id {
        query = query.filter(collaborators::organization_id.eq(organization_id));
    }
    let rows: Vec<CollaboratorRow> = query
        .order(collaborators::collaborator_id.asc())
        .select(CollaboratorRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Collaborator::try_from).collect()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn get_mission(
    conn: &mut SqliteConnection,
    mission_id: i64,
) -> Result<Option<Mission>, PersistenceError> {
    let row: Option<MissionRow> = missions::table
        .find(mission_id)
        .select(MissionRow::as_select())
        .first(conn)
        .optional()?;
    row.map(Mission::try_from).transpose()
}

/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_missions(
    conn: &mut SqliteConnection,
    filter: &MissionFilter,
) -> Result<Vec<Mission>, PersistenceError> {
    debug!(?filter, "Listing missions");

    let mut query = missions::table.into_boxed();
    if let Some(organization_id) = filter.organization_id {
        query = query.filter(missions::organization_id.eq(organization_id));
    }
    if let Some(site_id) = filter.site_id {
        query = query.filter(missions::site_id.eq(site_id));
    }
    if let Some(role_id) = filter.role_id {
        query = query.filter(missions::role_id.eq(role_id));
    }
    let rows: Vec<MissionRow> = query
        .order(missions::mission_id.asc())
        .select(MissionRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Mission::try_from).collect()
}
