// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    FixedClock, InMemoryStore, NewAssignment, NewCollaborator, NewMission, NewOrganization,
    NewRole, NewShiftInstance, NewSite, PlanningContext,
};
use shiftplan_domain::{
    AssignmentStatus, Collaborator, CollaboratorStatus, Mission, MissionStatus, Organization,
    Role, SOURCE_MANUAL, ShiftStatus, Site,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

/// 2026-03-02 at `hour:minute` UTC. Hours past 23 roll into later days.
pub fn at(hour: i64, minute: i64) -> OffsetDateTime {
    datetime!(2026-03-02 00:00 UTC) + Duration::hours(hour) + Duration::minutes(minute)
}

pub fn create_test_context() -> PlanningContext {
    PlanningContext::new(InMemoryStore::new()).with_clock(FixedClock(NOW))
}

pub struct Fixture {
    pub org: Organization,
    pub site: Site,
    pub role: Role,
    pub mission: Mission,
    pub collaborator: Collaborator,
}

pub fn create_organization(ctx: &mut PlanningContext, name: &str) -> Organization {
    ctx.create_organization(NewOrganization {
        name: name.to_string(),
        timezone: Some("Europe/Paris".to_string()),
        currency: None,
        contact_email: None,
    })
    .unwrap()
}

pub fn create_collaborator(ctx: &mut PlanningContext, organization_id: i64, name: &str) -> Collaborator {
    ctx.create_collaborator(NewCollaborator {
        organization_id,
        full_name: name.to_string(),
        email: None,
        primary_role_id: None,
        status: CollaboratorStatus::Active,
    })
    .unwrap()
}

pub fn create_fixture(ctx: &mut PlanningContext) -> Fixture {
    let org = create_organization(ctx, "Acme Events");
    let site = ctx
        .create_site(NewSite {
            organization_id: org.id,
            name: "Main Hall".to_string(),
            timezone: None,
            address: None,
        })
        .unwrap();
    let role = ctx
        .create_role(NewRole {
            organization_id: org.id,
            name: "Steward".to_string(),
            description: None,
            tags: vec!["security".to_string()],
        })
        .unwrap();
    let mission = ctx
        .create_mission(NewMission {
            site_id: site.id,
            role_id: role.id,
            team_id: None,
            title: "Spring fair".to_string(),
            start_utc: at(0, 0),
            end_utc: at(72, 0),
            status: MissionStatus::Draft,
            budget_target: Some(1500.0),
            note: None,
        })
        .unwrap();
    let collaborator = create_collaborator(ctx, org.id, "Alex Martin");

    Fixture {
        org,
        site,
        role,
        mission,
        collaborator,
    }
}

pub fn new_shift(fx: &Fixture, start: OffsetDateTime, end: OffsetDateTime) -> NewShiftInstance {
    NewShiftInstance {
        mission_id: fx.mission.id,
        template_id: None,
        site_id: fx.site.id,
        role_id: fx.role.id,
        team_id: None,
        start_utc: start,
        end_utc: end,
        status: ShiftStatus::Draft,
        source: SOURCE_MANUAL.to_string(),
        capacity: 1,
    }
}

pub fn new_assignment(shift_instance_id: i64, collaborator_id: i64, role_id: i64) -> NewAssignment {
    NewAssignment {
        shift_instance_id,
        collaborator_id,
        role_id,
        status: AssignmentStatus::Proposed,
        source: SOURCE_MANUAL.to_string(),
        note: None,
        is_locked: false,
    }
}
