// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for the shift planning backend.
//!
//! [`SqliteStore`] implements the planning [`EntityStore`] on top of Diesel.
//! The schema is embedded as Diesel migrations and applied on open, and
//! foreign key enforcement is verified at startup.
//!
//! ## Storage conventions
//!
//! - Primary keys are `AUTOINCREMENT` rowids, so ids are never reused
//! - Timestamps are RFC 3339 text in UTC
//! - Booleans are 0/1 integers
//! - Role tags, rule configs and audit payloads are JSON text
//!
//! ## Testing
//!
//! [`SqliteStore::new_in_memory`] gives every caller its own shared-cache
//! in-memory database, so tests are isolated without touching disk.

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

use diesel::SqliteConnection;
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use shiftplan::{
    AssignmentFilter, EntityStore, MissionFilter, ShiftInstanceFilter, StoreError,
};
use shiftplan_audit::{AuditFilter, PlanningChange};
use shiftplan_domain::{
    Assignment, Collaborator, ConflictRule, HrRule, Mission, Organization, Publication, Role,
    ShiftInstance, ShiftTemplate, Site, UserAvailability,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Planning storage backed by one `SQLite` connection.
pub struct SqliteStore {
    conn: SqliteConnection,
    in_transaction: bool,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("in_transaction", &self.in_transaction)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens a fresh in-memory database.
    ///
    /// Each call receives a unique shared-cache database via an atomic
    /// counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:shiftplan_mem_{db_id}?mode=memory&cache=shared");

        let mut conn = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            in_transaction: false,
        })
    }

    /// Opens or creates a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;
        info!(path = path_str, "Opened SQLite planning store");

        Ok(Self {
            conn,
            in_transaction: false,
        })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }
}

impl EntityStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        if self.in_transaction {
            return Err(StoreError::Transaction(
                "transaction already in progress".to_string(),
            ));
        }
        AnsiTransactionManager::begin_transaction(&mut self.conn)
            .map_err(|e| PersistenceError::TransactionFailed(e.to_string()))?;
        self.in_transaction = true;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if !self.in_transaction {
            return Err(StoreError::Transaction("no transaction to commit".to_string()));
        }
        self.in_transaction = false;
        AnsiTransactionManager::commit_transaction(&mut self.conn)
            .map_err(|e| PersistenceError::TransactionFailed(e.to_string()))?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        if !self.in_transaction {
            return Err(StoreError::Transaction(
                "no transaction to roll back".to_string(),
            ));
        }
        self.in_transaction = false;
        AnsiTransactionManager::rollback_transaction(&mut self.conn)
            .map_err(|e| PersistenceError::TransactionFailed(e.to_string()))?;
        Ok(())
    }

    // Organizations

    fn insert_organization(&mut self, org: Organization) -> Result<Organization, StoreError> {
        let id = mutations::catalog::insert_organization(&mut self.conn, &org)?;
        Ok(Organization { id, ..org })
    }

    fn get_organization(&mut self, id: i64) -> Result<Option<Organization>, StoreError> {
        Ok(queries::catalog::get_organization(&mut self.conn, id)?)
    }

    fn list_organizations(&mut self) -> Result<Vec<Organization>, StoreError> {
        Ok(queries::catalog::list_organizations(&mut self.conn)?)
    }

    fn update_organization(&mut self, org: &Organization) -> Result<(), StoreError> {
        Ok(mutations::catalog::update_organization(&mut self.conn, org)?)
    }

    fn delete_organization(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::catalog::delete_organization(&mut self.conn, id)?)
    }

    // Sites

    fn insert_site(&mut self, site: Site) -> Result<Site, StoreError> {
        let id = mutations::catalog::insert_site(&mut self.conn, &site)?;
        Ok(Site { id, ..site })
    }

    fn get_site(&mut self, id: i64) -> Result<Option<Site>, StoreError> {
        Ok(queries::catalog::get_site(&mut self.conn, id)?)
    }

    fn list_sites(&mut self, organization_id: Option<i64>) -> Result<Vec<Site>, StoreError> {
        Ok(queries::catalog::list_sites(&mut self.conn, organization_id)?)
    }

    fn update_site(&mut self, site: &Site) -> Result<(), StoreError> {
        Ok(mutations::catalog::update_site(&mut self.conn, site)?)
    }

    fn delete_site(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::catalog::delete_site(&mut self.conn, id)?)
    }

    // Roles

    fn insert_role(&mut self, role: Role) -> Result<Role, StoreError> {
        let id = mutations::catalog::insert_role(&mut self.conn, &role)?;
        Ok(Role { id, ..role })
    }

    fn get_role(&mut self, id: i64) -> Result<Option<Role>, StoreError> {
        Ok(queries::catalog::get_role(&mut self.conn, id)?)
    }

    fn list_roles(&mut self, organization_id: Option<i64>) -> Result<Vec<Role>, StoreError> {
        Ok(queries::catalog::list_roles(&mut self.conn, organization_id)?)
    }

    fn update_role(&mut self, role: &Role) -> Result<(), StoreError> {
        Ok(mutations::catalog::update_role(&mut self.conn, role)?)
    }

    fn delete_role(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::catalog::delete_role(&mut self.conn, id)?)
    }

    // Collaborators

    fn insert_collaborator(
        &mut self,
        collaborator: Collaborator,
    ) -> Result<Collaborator, StoreError> {
        let id = mutations::catalog::insert_collaborator(&mut self.conn, &collaborator)?;
        Ok(Collaborator { id, ..collaborator })
    }

    fn get_collaborator(&mut self, id: i64) -> Result<Option<Collaborator>, StoreError> {
        Ok(queries::catalog::get_collaborator(&mut self.conn, id)?)
    }

    fn list_collaborators(
        &mut self,
        organization_id: Option<i64>,
    ) -> Result<Vec<Collaborator>, StoreError> {
        Ok(queries::catalog::list_collaborators(
            &mut self.conn,
            organization_id,
        )?)
    }

    fn update_collaborator(&mut self, collaborator: &Collaborator) -> Result<(), StoreError> {
        Ok(mutations::catalog::update_collaborator(
            &mut self.conn,
            collaborator,
        )?)
    }

    fn delete_collaborator(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::catalog::delete_collaborator(&mut self.conn, id)?)
    }

    // Missions

    fn insert_mission(&mut self, mission: Mission) -> Result<Mission, StoreError> {
        let id = mutations::catalog::insert_mission(&mut self.conn, &mission)?;
        Ok(Mission { id, ..mission })
    }

    fn get_mission(&mut self, id: i64) -> Result<Option<Mission>, StoreError> {
        Ok(queries::catalog::get_mission(&mut self.conn, id)?)
    }

    fn list_missions(&mut self, filter: &MissionFilter) -> Result<Vec<Mission>, StoreError> {
        Ok(queries::catalog::list_missions(&mut self.conn, filter)?)
    }

    fn update_mission(&mut self, mission: &Mission) -> Result<(), StoreError> {
        Ok(mutations::catalog::update_mission(&mut self.conn, mission)?)
    }

    fn delete_mission(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::catalog::delete_mission(&mut self.conn, id)?)
    }

    // Shift templates

    fn insert_shift_template(
        &mut self,
        template: ShiftTemplate,
    ) -> Result<ShiftTemplate, StoreError> {
        let id = mutations::planning::insert_shift_template(&mut self.conn, &template)?;
        Ok(ShiftTemplate { id, ..template })
    }

    fn get_shift_template(&mut self, id: i64) -> Result<Option<ShiftTemplate>, StoreError> {
        Ok(queries::planning::get_shift_template(&mut self.conn, id)?)
    }

    fn list_shift_templates(
        &mut self,
        mission_id: Option<i64>,
    ) -> Result<Vec<ShiftTemplate>, StoreError> {
        Ok(queries::planning::list_shift_templates(
            &mut self.conn,
            mission_id,
        )?)
    }

    fn update_shift_template(&mut self, template: &ShiftTemplate) -> Result<(), StoreError> {
        Ok(mutations::planning::update_shift_template(
            &mut self.conn,
            template,
        )?)
    }

    fn delete_shift_template(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::planning::delete_shift_template(&mut self.conn, id)?)
    }

    // Shift instances

    fn insert_shift_instance(
        &mut self,
        shift: ShiftInstance,
    ) -> Result<ShiftInstance, StoreError> {
        let id = mutations::planning::insert_shift_instance(&mut self.conn, &shift)?;
        Ok(ShiftInstance { id, ..shift })
    }

    fn get_shift_instance(&mut self, id: i64) -> Result<Option<ShiftInstance>, StoreError> {
        Ok(queries::planning::get_shift_instance(&mut self.conn, id)?)
    }

    fn list_shift_instances(
        &mut self,
        filter: &ShiftInstanceFilter,
    ) -> Result<Vec<ShiftInstance>, StoreError> {
        Ok(queries::planning::list_shift_instances(
            &mut self.conn,
            filter,
        )?)
    }

    fn update_shift_instance(&mut self, shift: &ShiftInstance) -> Result<(), StoreError> {
        Ok(mutations::planning::update_shift_instance(
            &mut self.conn,
            shift,
        )?)
    }

    fn delete_shift_instance(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::planning::delete_shift_instance(&mut self.conn, id)?)
    }

    // Assignments

    fn insert_assignment(&mut self, assignment: Assignment) -> Result<Assignment, StoreError> {
        let id = mutations::planning::insert_assignment(&mut self.conn, &assignment)?;
        Ok(Assignment { id, ..assignment })
    }

    fn get_assignment(&mut self, id: i64) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::planning::get_assignment(&mut self.conn, id)?)
    }

    fn list_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, StoreError> {
        Ok(queries::planning::list_assignments(&mut self.conn, filter)?)
    }

    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        Ok(mutations::planning::update_assignment(
            &mut self.conn,
            assignment,
        )?)
    }

    fn delete_assignment(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::planning::delete_assignment(&mut self.conn, id)?)
    }

    fn delete_assignments_for_shift(
        &mut self,
        shift_instance_id: i64,
    ) -> Result<usize, StoreError> {
        Ok(mutations::planning::delete_assignments_for_shift(
            &mut self.conn,
            shift_instance_id,
        )?)
    }

    // Availability

    fn insert_availability(
        &mut self,
        availability: UserAvailability,
    ) -> Result<UserAvailability, StoreError> {
        let id = mutations::planning::insert_availability(&mut self.conn, &availability)?;
        Ok(UserAvailability { id, ..availability })
    }

    fn get_availability(&mut self, id: i64) -> Result<Option<UserAvailability>, StoreError> {
        Ok(queries::planning::get_availability(&mut self.conn, id)?)
    }

    fn list_availability(
        &mut self,
        collaborator_id: Option<i64>,
    ) -> Result<Vec<UserAvailability>, StoreError> {
        Ok(queries::planning::list_availability(
            &mut self.conn,
            collaborator_id,
        )?)
    }

    fn update_availability(&mut self, availability: &UserAvailability) -> Result<(), StoreError> {
        Ok(mutations::planning::update_availability(
            &mut self.conn,
            availability,
        )?)
    }

    fn delete_availability(&mut self, id: i64) -> Result<(), StoreError> {
        Ok(mutations::planning::delete_availability(&mut self.conn, id)?)
    }

    // Rule descriptors

    fn insert_hr_rule(&mut self, rule: HrRule) -> Result<HrRule, StoreError> {
        let id = mutations::planning::insert_hr_rule(&mut self.conn, &rule)?;
        Ok(HrRule { id, ..rule })
    }

    fn list_hr_rules(&mut self, organization_id: i64) -> Result<Vec<HrRule>, StoreError> {
        Ok(queries::planning::list_hr_rules(
            &mut self.conn,
            organization_id,
        )?)
    }

    fn insert_conflict_rule(&mut self, rule: ConflictRule) -> Result<ConflictRule, StoreError> {
        let id = mutations::planning::insert_conflict_rule(&mut self.conn, &rule)?;
        Ok(ConflictRule { id, ..rule })
    }

    fn list_conflict_rules(
        &mut self,
        organization_id: i64,
    ) -> Result<Vec<ConflictRule>, StoreError> {
        Ok(queries::planning::list_conflict_rules(
            &mut self.conn,
            organization_id,
        )?)
    }

    fn delete_rules_for_organization(&mut self, organization_id: i64) -> Result<(), StoreError> {
        Ok(mutations::planning::delete_rules_for_organization(
            &mut self.conn,
            organization_id,
        )?)
    }

    // Audit trail

    fn append_change(&mut self, change: PlanningChange) -> Result<PlanningChange, StoreError> {
        let id = mutations::audit::append_change(&mut self.conn, &change)?;
        Ok(PlanningChange { id, ..change })
    }

    fn list_changes(&mut self, filter: &AuditFilter) -> Result<Vec<PlanningChange>, StoreError> {
        Ok(queries::audit::list_changes(&mut self.conn, filter)?)
    }

    // Publications

    fn insert_publication(
        &mut self,
        publication: Publication,
    ) -> Result<Publication, StoreError> {
        let id = mutations::audit::insert_publication(&mut self.conn, &publication)?;
        Ok(Publication { id, ..publication })
    }

    fn update_publication(&mut self, publication: &Publication) -> Result<(), StoreError> {
        Ok(mutations::audit::update_publication(
            &mut self.conn,
            publication,
        )?)
    }

    fn list_publications(
        &mut self,
        organization_id: i64,
    ) -> Result<Vec<Publication>, StoreError> {
        Ok(queries::audit::list_publications(
            &mut self.conn,
            organization_id,
        )?)
    }
}
