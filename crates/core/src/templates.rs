// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{NewShiftTemplate, ShiftTemplatePatch};
use crate::context::PlanningContext;
use crate::error::{CoreError, merged_window};
use crate::store::ShiftInstanceFilter;
use shiftplan_audit::{PlanningAction, StateSnapshot};
use shiftplan_domain::{Mission, ShiftTemplate, TimeWindow};
use tracing::info;

impl PlanningContext {
    /// Loads a mission and checks that `site_id` and `role_id` exist and
    /// match it.
    pub(crate) fn check_mission_alignment(
        &mut self,
        mission_id: i64,
        site_id: i64,
        role_id: i64,
    ) -> Result<Mission, CoreError> {
        let mission = self
            .store()
            .get_mission(mission_id)?
            .ok_or_else(|| CoreError::not_found("Mission", mission_id))?;
        if self.store().get_site(site_id)?.is_none() {
            return Err(CoreError::not_found("Site", site_id));
        }
        if self.store().get_role(role_id)?.is_none() {
            return Err(CoreError::not_found("Role", role_id));
        }
        if mission.site_id != site_id || mission.role_id != role_id {
            return Err(CoreError::Validation(
                "Site and role must match the mission's site and role".to_string(),
            ));
        }
        Ok(mission)
    }

    /// Organization owning a mission, or the default organization when the
    /// mission is gone.
    pub(crate) fn mission_organization(&mut self, mission_id: i64) -> Result<i64, CoreError> {
        Ok(self
            .store()
            .get_mission(mission_id)?
            .map_or(self.default_organization_id(), |m| m.organization_id))
    }

    fn check_template_unreferenced(&mut self, template_id: i64) -> Result<(), CoreError> {
        let referencing = self.store().list_shift_instances(&ShiftInstanceFilter {
            mission_id: None,
            template_id: Some(template_id),
        })?;
        if !referencing.is_empty() {
            return Err(CoreError::Conflict(format!(
                "Shift template {template_id} is referenced by {} shift instance(s)",
                referencing.len()
            )));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the template does not exist.
    pub fn get_template(&mut self, template_id: i64) -> Result<ShiftTemplate, CoreError> {
        self.store()
            .get_shift_template(template_id)?
            .ok_or_else(|| CoreError::not_found("Shift template", template_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_templates(
        &mut self,
        mission_id: Option<i64>,
    ) -> Result<Vec<ShiftTemplate>, CoreError> {
        Ok(self.store().list_shift_templates(mission_id)?)
    }

    /// Creates a shift template under a mission.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the mission, site or role does not exist
    /// - `Validation` if the site or role differs from the mission's
    /// - `DomainViolation` if the window is empty or reversed
    pub fn create_template(
        &mut self,
        payload: NewShiftTemplate,
    ) -> Result<ShiftTemplate, CoreError> {
        self.atomically(|ctx| {
            let mission =
                ctx.check_mission_alignment(payload.mission_id, payload.site_id, payload.role_id)?;
            let window = TimeWindow::new(payload.start_time_utc, payload.end_time_utc)?;

            let template = ctx.store().insert_shift_template(ShiftTemplate {
                id: 0,
                mission_id: payload.mission_id,
                site_id: payload.site_id,
                role_id: payload.role_id,
                team_id: payload.team_id,
                recurrence_rule: payload.recurrence_rule,
                start_time_utc: window.start(),
                end_time_utc: window.end(),
                expected_headcount: payload.expected_headcount,
                is_active: payload.is_active,
            })?;

            ctx.record_change(
                mission.organization_id,
                PlanningAction::CreateShiftTemplate,
                template.id,
                StateSnapshot::absent(),
                StateSnapshot::capture(&template)?,
            )?;
            info!(template_id = template.id, mission_id = mission.id, "Created shift template");
            Ok(template)
        })
    }

    /// Applies a partial update, re-validating the merged template.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::create_template`], plus `NotFound` for
    /// the template itself. A bad merged window is `Validation`. Moving the
    /// template to another mission is a `Conflict` while instances use it.
    pub fn update_template(
        &mut self,
        template_id: i64,
        patch: ShiftTemplatePatch,
    ) -> Result<ShiftTemplate, CoreError> {
        self.atomically(|ctx| {
            let before = ctx.get_template(template_id)?;
            let mut updated = before.clone();
            if let Some(mission_id) = patch.mission_id {
                updated.mission_id = mission_id;
            }
            if let Some(site_id) = patch.site_id {
                updated.site_id = site_id;
            }
            if let Some(role_id) = patch.role_id {
                updated.role_id = role_id;
            }
            if patch.team_id.is_some() {
                updated.team_id = patch.team_id;
            }
            if patch.recurrence_rule.is_some() {
                updated.recurrence_rule = patch.recurrence_rule;
            }
            if let Some(start) = patch.start_time_utc {
                updated.start_time_utc = start;
            }
            if let Some(end) = patch.end_time_utc {
                updated.end_time_utc = end;
            }
            if let Some(headcount) = patch.expected_headcount {
                updated.expected_headcount = headcount;
            }
            if let Some(is_active) = patch.is_active {
                updated.is_active = is_active;
            }

            let mission =
                ctx.check_mission_alignment(updated.mission_id, updated.site_id, updated.role_id)?;
            if updated.mission_id != before.mission_id {
                ctx.check_template_unreferenced(template_id)?;
            }
            let window = merged_window(updated.start_time_utc, updated.end_time_utc)?;
            updated.start_time_utc = window.start();
            updated.end_time_utc = window.end();

            ctx.store().update_shift_template(&updated)?;
            ctx.record_change(
                mission.organization_id,
                PlanningAction::UpdateShiftTemplate,
                template_id,
                StateSnapshot::capture(&before)?,
                StateSnapshot::capture(&updated)?,
            )?;
            info!(template_id, "Updated shift template");
            Ok(updated)
        })
    }

    /// Marks a template inactive. Existing instances are untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the template does not exist.
    pub fn deactivate_template(&mut self, template_id: i64) -> Result<ShiftTemplate, CoreError> {
        self.update_template(
            template_id,
            ShiftTemplatePatch {
                is_active: Some(false),
                ..ShiftTemplatePatch::default()
            },
        )
    }

    /// Deletes a template that no shift instance was generated from.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the template does not exist
    /// - `Conflict` if shift instances reference it
    pub fn delete_template(&mut self, template_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            let before = ctx.get_template(template_id)?;
            ctx.check_template_unreferenced(template_id)?;

            let organization_id = ctx.mission_organization(before.mission_id)?;
            ctx.store().delete_shift_template(template_id)?;
            ctx.record_change(
                organization_id,
                PlanningAction::DeleteShiftTemplate,
                template_id,
                StateSnapshot::capture(&before)?,
                StateSnapshot::absent(),
            )?;
            info!(template_id, "Deleted shift template");
            Ok(())
        })
    }
}
