// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftplan_domain::{Collaborator, Mission, Organization, Role, Site};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{
    CollaboratorRecord, MissionRecord, OrganizationRecord, RoleRecord, SiteRecord,
};
use crate::diesel_schema::{collaborators, missions, organizations, roles, sites};
use crate::error::PersistenceError;

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_organization(
    conn: &mut SqliteConnection,
    org: &Organization,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(organizations::table)
        .values(&OrganizationRecord::from(org))
        .execute(conn)?;
    let organization_id = get_last_insert_rowid(conn)?;
    debug!(organization_id, "Inserted organization");
    Ok(organization_id)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_organization(
    conn: &mut SqliteConnection,
    org: &Organization,
) -> Result<(), PersistenceError> {
    diesel::update(organizations::table.find(org.id))
        .set(&OrganizationRecord::from(org))
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_organization(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(organizations::table.find(organization_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_site(conn: &mut SqliteConnection, site: &Site) -> Result<i64, PersistenceError> {
    diesel::insert_into(sites::table)
        .values(&SiteRecord::from(site))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_site(conn: &mut SqliteConnection, site: &Site) -> Result<(), PersistenceError> {
    diesel::update(sites::table.find(site.id))
        .set(&SiteRecord::from(site))
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_site(conn: &mut SqliteConnection, site_id: i64) -> Result<(), PersistenceError> {
    diesel::delete(sites::table.find(site_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the tags cannot be encoded or the insert fails.
pub fn insert_role(conn: &mut SqliteConnection, role: &Role) -> Result<i64, PersistenceError> {
    diesel::insert_into(roles::table)
        .values(&RoleRecord::try_from(role)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the tags cannot be encoded or the update fails.
pub fn update_role(conn: &mut SqliteConnection, role: &Role) -> Result<(), PersistenceError> {
    diesel::update(roles::table.find(role.id))
        .set(&RoleRecord::try_from(role)?)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_role(conn: &mut SqliteConnection, role_id: i64) -> Result<(), PersistenceError> {
    diesel::delete(roles::table.find(role_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_collaborator(
    conn: &mut SqliteConnection,
    collaborator: &Collaborator,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(collaborators::table)
        .values(&CollaboratorRecord::from(collaborator))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_collaborator(
    conn: &mut SqliteConnection,
    collaborator: &Collaborator,
) -> Result<(), PersistenceError> {
    diesel::update(collaborators::table.find(collaborator.id))
        .set(&CollaboratorRecord::from(collaborator))
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_collaborator(
    conn: &mut SqliteConnection,
    collaborator_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(collaborators::table.find(collaborator_id)).execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_mission(
    conn: &mut SqliteConnection,
    mission: &Mission,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(missions::table)
        .values(&MissionRecord::try_from(mission)?)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// # Errors
///
/// Returns an error if the update fails.
pub fn update_mission(
    conn: &mut SqliteConnection,
    mission: &Mission,
) -> Result<(), PersistenceError> {
    diesel::update(missions::table.find(mission.id))
        .set(&MissionRecord::try_from(mission)?)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_mission(
    conn: &mut SqliteConnection,
    mission_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(missions::table.find(mission_id)).execute(conn)?;
    Ok(())
}
