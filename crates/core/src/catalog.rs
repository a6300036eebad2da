// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Organizations, sites, roles, collaborators and missions.

use crate::command::{
    CollaboratorPatch, MissionPatch, NewCollaborator, NewMission, NewOrganization, NewRole,
    NewSite, OrganizationPatch, RolePatch, SitePatch,
};
use crate::context::PlanningContext;
use crate::error::{CoreError, merged_window};
use crate::store::{AssignmentFilter, MissionFilter, ShiftInstanceFilter};
use shiftplan_domain::{
    Collaborator, DEFAULT_CURRENCY, DEFAULT_TIMEZONE, Mission, Organization, Role, Site,
    TimeWindow, default_conflict_rules, default_hr_rules, validate_timezone,
};
use tracing::info;

fn blocked(entity: &str, id: i64, by: &str, count: usize) -> CoreError {
    CoreError::Conflict(format!(
        "{entity} {id} is referenced by {count} {by}; remove them first"
    ))
}

impl PlanningContext {
    // Organizations

    /// Creates an organization and seeds its default rule descriptors.
    ///
    /// # Errors
    ///
    /// Returns `DomainViolation` for an unknown timezone.
    pub fn create_organization(
        &mut self,
        payload: NewOrganization,
    ) -> Result<Organization, CoreError> {
        let timezone = payload
            .timezone
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        validate_timezone(&timezone)?;

        self.atomically(|ctx| {
            let org = ctx.store().insert_organization(Organization {
                id: 0,
                name: payload.name,
                timezone,
                currency: payload
                    .currency
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                contact_email: payload.contact_email,
            })?;
            for rule in default_hr_rules(org.id) {
                ctx.store().insert_hr_rule(rule)?;
            }
            for rule in default_conflict_rules(org.id) {
                ctx.store().insert_conflict_rule(rule)?;
            }
            info!(organization_id = org.id, "Created organization");
            Ok(org)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the organization does not exist.
    pub fn get_organization(&mut self, organization_id: i64) -> Result<Organization, CoreError> {
        self.store()
            .get_organization(organization_id)?
            .ok_or_else(|| CoreError::not_found("Organization", organization_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_organizations(&mut self) -> Result<Vec<Organization>, CoreError> {
        Ok(self.store().list_organizations()?)
    }

    /// # Errors
    ///
    /// Returns `NotFound` or `DomainViolation` for an unknown timezone.
    pub fn update_organization(
        &mut self,
        organization_id: i64,
        patch: OrganizationPatch,
    ) -> Result<Organization, CoreError> {
        self.atomically(|ctx| {
            let mut org = ctx.get_organization(organization_id)?;
            if let Some(name) = patch.name {
                org.name = name;
            }
            if let Some(timezone) = patch.timezone {
                validate_timezone(&timezone)?;
                org.timezone = timezone;
            }
            if let Some(currency) = patch.currency {
                org.currency = currency;
            }
            if patch.contact_email.is_some() {
                org.contact_email = patch.contact_email;
            }
            ctx.store().update_organization(&org)?;
            info!(organization_id, "Updated organization");
            Ok(org)
        })
    }

    /// Deletes an organization with no sites, roles or collaborators.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, or `Conflict` while anything references it.
    pub fn delete_organization(&mut self, organization_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            ctx.get_organization(organization_id)?;

            let sites = ctx.store().list_sites(Some(organization_id))?.len();
            if sites > 0 {
                return Err(blocked("Organization", organization_id, "site(s)", sites));
            }
            let roles = ctx.store().list_roles(Some(organization_id))?.len();
            if roles > 0 {
                return Err(blocked("Organization", organization_id, "role(s)", roles));
            }
            let collaborators = ctx.store().list_collaborators(Some(organization_id))?.len();
            if collaborators > 0 {
                return Err(blocked(
                    "Organization",
                    organization_id,
                    "collaborator(s)",
                    collaborators,
                ));
            }

            ctx.store().delete_rules_for_organization(organization_id)?;
            ctx.store().delete_organization(organization_id)?;
            info!(organization_id, "Deleted organization");
            Ok(())
        })
    }

    // Sites

    /// Creates a site. Without a timezone it inherits the organization's.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown organization or `DomainViolation`
    /// for an unknown timezone.
    pub fn create_site(&mut self, payload: NewSite) -> Result<Site, CoreError> {
        self.atomically(|ctx| {
            let org = ctx.get_organization(payload.organization_id)?;
            let timezone = payload.timezone.unwrap_or(org.timezone);
            validate_timezone(&timezone)?;

            let site = ctx.store().insert_site(Site {
                id: 0,
                organization_id: org.id,
                name: payload.name,
                timezone,
                address: payload.address,
            })?;
            info!(site_id = site.id, organization_id = org.id, "Created site");
            Ok(site)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the site does not exist.
    pub fn get_site(&mut self, site_id: i64) -> Result<Site, CoreError> {
        self.store()
            .get_site(site_id)?
            .ok_or_else(|| CoreError::not_found("Site", site_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_sites(&mut self, organization_id: Option<i64>) -> Result<Vec<Site>, CoreError> {
        Ok(self.store().list_sites(organization_id)?)
    }

    /// # Errors
    ///
    /// Returns `NotFound` or `DomainViolation` for an unknown timezone.
    pub fn update_site(&mut self, site_id: i64, patch: SitePatch) -> Result<Site, CoreError> {
        self.atomically(|ctx| {
            let mut site = ctx.get_site(site_id)?;
            if let Some(name) = patch.name {
                site.name = name;
            }
            if let Some(timezone) = patch.timezone {
                validate_timezone(&timezone)?;
                site.timezone = timezone;
            }
            if patch.address.is_some() {
                site.address = patch.address;
            }
            ctx.store().update_site(&site)?;
            info!(site_id, "Updated site");
            Ok(site)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound`, or `Conflict` while missions reference the site.
    pub fn delete_site(&mut self, site_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            ctx.get_site(site_id)?;
            let missions = ctx
                .store()
                .list_missions(&MissionFilter {
                    site_id: Some(site_id),
                    ..MissionFilter::default()
                })?
                .len();
            if missions > 0 {
                return Err(blocked("Site", site_id, "mission(s)", missions));
            }
            ctx.store().delete_site(site_id)?;
            info!(site_id, "Deleted site");
            Ok(())
        })
    }

    // Roles

    /// # Errors
    ///
    /// Returns `NotFound` for an unknown organization.
    pub fn create_role(&mut self, payload: NewRole) -> Result<Role, CoreError> {
        self.atomically(|ctx| {
            let org = ctx.get_organization(payload.organization_id)?;
            let role = ctx.store().insert_role(Role {
                id: 0,
                organization_id: org.id,
                name: payload.name,
                description: payload.description,
                tags: payload.tags,
            })?;
            info!(role_id = role.id, organization_id = org.id, "Created role");
            Ok(role)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the role does not exist.
    pub fn get_role(&mut self, role_id: i64) -> Result<Role, CoreError> {
        self.store()
            .get_role(role_id)?
            .ok_or_else(|| CoreError::not_found("Role", role_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_roles(&mut self, organization_id: Option<i64>) -> Result<Vec<Role>, CoreError> {
        Ok(self.store().list_roles(organization_id)?)
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the role does not exist.
    pub fn update_role(&mut self, role_id: i64, patch: RolePatch) -> Result<Role, CoreError> {
        self.atomically(|ctx| {
            let mut role = ctx.get_role(role_id)?;
            if let Some(name) = patch.name {
                role.name = name;
            }
            if patch.description.is_some() {
                role.description = patch.description;
            }
            if let Some(tags) = patch.tags {
                role.tags = tags;
            }
            ctx.store().update_role(&role)?;
            info!(role_id, "Updated role");
            Ok(role)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound`, or `Conflict` while missions or collaborators
    /// reference the role.
    pub fn delete_role(&mut self, role_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            let role = ctx.get_role(role_id)?;
            let missions = ctx
                .store()
                .list_missions(&MissionFilter {
                    role_id: Some(role_id),
                    ..MissionFilter::default()
                })?
                .len();
            if missions > 0 {
                return Err(blocked("Role", role_id, "mission(s)", missions));
            }
            let holders = ctx
                .store()
                .list_collaborators(Some(role.organization_id))?
                .iter()
                .filter(|c| c.primary_role_id == Some(role_id))
                .count();
            if holders > 0 {
                return Err(blocked("Role", role_id, "collaborator(s)", holders));
            }
            ctx.store().delete_role(role_id)?;
            info!(role_id, "Deleted role");
            Ok(())
        })
    }

    // Collaborators

    fn check_primary_role(
        &mut self,
        organization_id: i64,
        primary_role_id: Option<i64>,
    ) -> Result<(), CoreError> {
        let Some(role_id) = primary_role_id else {
            return Ok(());
        };
        let role = self.get_role(role_id)?;
        if role.organization_id != organization_id {
            return Err(CoreError::Validation(
                "Primary role must belong to the same organization".to_string(),
            ));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `NotFound` for an unknown organization or role, or
    /// `Validation` when the primary role belongs to another organization.
    pub fn create_collaborator(
        &mut self,
        payload: NewCollaborator,
    ) -> Result<Collaborator, CoreError> {
        self.atomically(|ctx| {
            let org = ctx.get_organization(payload.organization_id)?;
            ctx.check_primary_role(org.id, payload.primary_role_id)?;
            let collaborator = ctx.store().insert_collaborator(Collaborator {
                id: 0,
                organization_id: org.id,
                full_name: payload.full_name,
                email: payload.email,
                primary_role_id: payload.primary_role_id,
                status: payload.status,
            })?;
            info!(
                collaborator_id = collaborator.id,
                organization_id = org.id,
                "Created collaborator"
            );
            Ok(collaborator)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the collaborator does not exist.
    pub fn get_collaborator(&mut self, collaborator_id: i64) -> Result<Collaborator, CoreError> {
        self.store()
            .get_collaborator(collaborator_id)?
            .ok_or_else(|| CoreError::not_found("Collaborator", collaborator_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_collaborators(
        &mut self,
        organization_id: Option<i64>,
    ) -> Result<Vec<Collaborator>, CoreError> {
        Ok(self.store().list_collaborators(organization_id)?)
    }

    /// # Errors
    ///
    /// Same as [`PlanningContext::create_collaborator`].
    pub fn update_collaborator(
        &mut self,
        collaborator_id: i64,
        patch: CollaboratorPatch,
    ) -> Result<Collaborator, CoreError> {
        self.atomically(|ctx| {
            let mut collaborator = ctx.get_collaborator(collaborator_id)?;
            if let Some(full_name) = patch.full_name {
                collaborator.full_name = full_name;
            }
            if patch.email.is_some() {
                collaborator.email = patch.email;
            }
            if patch.primary_role_id.is_some() {
                ctx.check_primary_role(collaborator.organization_id, patch.primary_role_id)?;
                collaborator.primary_role_id = patch.primary_role_id;
            }
            if let Some(status) = patch.status {
                collaborator.status = status;
            }
            ctx.store().update_collaborator(&collaborator)?;
            info!(collaborator_id, "Updated collaborator");
            Ok(collaborator)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound`, or `Conflict` while assignments reference the
    /// collaborator.
    pub fn delete_collaborator(&mut self, collaborator_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            ctx.get_collaborator(collaborator_id)?;
            let assignments = ctx
                .store()
                .list_assignments(&AssignmentFilter::for_collaborator(collaborator_id))?
                .len();
            if assignments > 0 {
                return Err(blocked(
                    "Collaborator",
                    collaborator_id,
                    "assignment(s)",
                    assignments,
                ));
            }
            for record in ctx.store().list_availability(Some(collaborator_id))? {
                ctx.store().delete_availability(record.id)?;
            }
            ctx.store().delete_collaborator(collaborator_id)?;
            info!(collaborator_id, "Deleted collaborator");
            Ok(())
        })
    }

    // Missions

    fn check_site_and_role(&mut self, site_id: i64, role_id: i64) -> Result<i64, CoreError> {
        let site = self.get_site(site_id)?;
        let role = self.get_role(role_id)?;
        if site.organization_id != role.organization_id {
            return Err(CoreError::Validation(
                "Site and role must belong to the same organization".to_string(),
            ));
        }
        Ok(site.organization_id)
    }

    /// Creates a mission. Its organization is the site's organization.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the site or role does not exist
    /// - `Validation` if they belong to different organizations
    /// - `DomainViolation` if the window is empty or reversed
    pub fn create_mission(&mut self, payload: NewMission) -> Result<Mission, CoreError> {
        self.atomically(|ctx| {
            let organization_id = ctx.check_site_and_role(payload.site_id, payload.role_id)?;
            let window = TimeWindow::new(payload.start_utc, payload.end_utc)?;
            let mission = ctx.store().insert_mission(Mission {
                id: 0,
                organization_id,
                site_id: payload.site_id,
                role_id: payload.role_id,
                team_id: payload.team_id,
                title: payload.title,
                start_utc: window.start(),
                end_utc: window.end(),
                status: payload.status,
                budget_target: payload.budget_target,
                note: payload.note,
            })?;
            info!(mission_id = mission.id, organization_id, "Created mission");
            Ok(mission)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the mission does not exist.
    pub fn get_mission(&mut self, mission_id: i64) -> Result<Mission, CoreError> {
        self.store()
            .get_mission(mission_id)?
            .ok_or_else(|| CoreError::not_found("Mission", mission_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_missions(&mut self, filter: &MissionFilter) -> Result<Vec<Mission>, CoreError> {
        Ok(self.store().list_missions(filter)?)
    }

    /// Applies a partial update, re-validating site and role together with
    /// the merged window.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::create_mission`], except that a bad merged
    /// window is `Validation`. Returns `Conflict` when the site or role
    /// changes while shift instances or templates reference the mission.
    pub fn update_mission(
        &mut self,
        mission_id: i64,
        patch: MissionPatch,
    ) -> Result<Mission, CoreError> {
        self.atomically(|ctx| {
            let mut mission = ctx.get_mission(mission_id)?;
            let (old_site_id, old_role_id) = (mission.site_id, mission.role_id);
            if let Some(site_id) = patch.site_id {
                mission.site_id = site_id;
            }
            if let Some(role_id) = patch.role_id {
                mission.role_id = role_id;
            }
            if patch.team_id.is_some() {
                mission.team_id = patch.team_id;
            }
            if let Some(title) = patch.title {
                mission.title = title;
            }
            if let Some(start) = patch.start_utc {
                mission.start_utc = start;
            }
            if let Some(end) = patch.end_utc {
                mission.end_utc = end;
            }
            if let Some(status) = patch.status {
                mission.status = status;
            }
            if patch.budget_target.is_some() {
                mission.budget_target = patch.budget_target;
            }
            if patch.note.is_some() {
                mission.note = patch.note;
            }

            mission.organization_id = ctx.check_site_and_role(mission.site_id, mission.role_id)?;
            if mission.site_id != old_site_id || mission.role_id != old_role_id {
                ctx.check_mission_unreferenced(mission_id)?;
            }
            let window = merged_window(mission.start_utc, mission.end_utc)?;
            mission.start_utc = window.start();
            mission.end_utc = window.end();

            ctx.store().update_mission(&mission)?;
            info!(mission_id, "Updated mission");
            Ok(mission)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound`, or `Conflict` while shift instances or templates
    /// reference the mission.
    pub fn delete_mission(&mut self, mission_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            ctx.get_mission(mission_id)?;
            ctx.check_mission_unreferenced(mission_id)?;
            ctx.store().delete_mission(mission_id)?;
            info!(mission_id, "Deleted mission");
            Ok(())
        })
    }

    /// Shift instances and templates copy the mission's site and role, so
    /// neither may change nor the mission go away while any exist.
    fn check_mission_unreferenced(&mut self, mission_id: i64) -> Result<(), CoreError> {
        let shifts = self
            .store()
            .list_shift_instances(&ShiftInstanceFilter {
                mission_id: Some(mission_id),
                template_id: None,
            })?
            .len();
        if shifts > 0 {
            return Err(blocked("Mission", mission_id, "shift instance(s)", shifts));
        }
        let templates = self.store().list_shift_templates(Some(mission_id))?.len();
        if templates > 0 {
            return Err(blocked("Mission", mission_id, "shift template(s)", templates));
        }
        Ok(())
    }
}
