// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CreateAssignmentRequest, CreateCollaboratorRequest, CreateMissionRequest,
    CreateOrganizationRequest, CreateRoleRequest, CreateShiftRequest, CreateSiteRequest,
    create_collaborator, create_mission, create_organization, create_role, create_site,
};
use serde_json::{Value, json};
use shiftplan::{FixedClock, InMemoryStore, PlanningContext};
use shiftplan_domain::SOURCE_MANUAL;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

pub fn at(hour: i64) -> OffsetDateTime {
    datetime!(2026-03-02 00:00 UTC) + Duration::hours(hour)
}

pub fn create_test_context() -> PlanningContext {
    PlanningContext::new(InMemoryStore::new()).with_clock(FixedClock(NOW))
}

/// Deserializes a request DTO from JSON, the way the server receives it.
pub fn request<T: serde::de::DeserializeOwned>(body: Value) -> T {
    serde_json::from_value(body).expect("request should deserialize")
}

pub struct Catalog {
    pub organization_id: i64,
    pub site_id: i64,
    pub role_id: i64,
    pub mission_id: i64,
    pub collaborator_id: i64,
}

pub fn create_catalog(ctx: &mut PlanningContext) -> Catalog {
    let org = create_organization(
        ctx,
        request::<CreateOrganizationRequest>(json!({"name": "Acme"})),
    )
    .unwrap();
    let site = create_site(
        ctx,
        request::<CreateSiteRequest>(json!({"organization_id": org.id, "name": "Hall"})),
    )
    .unwrap();
    let role = create_role(
        ctx,
        request::<CreateRoleRequest>(json!({"organization_id": org.id, "name": "Steward"})),
    )
    .unwrap();
    let mission = create_mission(
        ctx,
        request::<CreateMissionRequest>(json!({
            "site_id": site.id,
            "role_id": role.id,
            "title": "Fair",
            "start_utc": "2026-03-02T00:00:00Z",
            "end_utc": "2026-03-04T00:00:00Z",
        })),
    )
    .unwrap();
    let collaborator = create_collaborator(
        ctx,
        request::<CreateCollaboratorRequest>(json!({
            "organization_id": org.id,
            "full_name": "Alex Martin",
        })),
    )
    .unwrap();
    Catalog {
        organization_id: org.id,
        site_id: site.id,
        role_id: role.id,
        mission_id: mission.id,
        collaborator_id: collaborator.id,
    }
}

pub fn shift_request(catalog: &Catalog, start_hour: i64, end_hour: i64) -> CreateShiftRequest {
    CreateShiftRequest {
        mission_id: Some(catalog.mission_id),
        template_id: None,
        site_id: Some(catalog.site_id),
        role_id: Some(catalog.role_id),
        team_id: None,
        start_utc: at(start_hour),
        end_utc: at(end_hour),
        status: None,
        source: SOURCE_MANUAL.to_string(),
        capacity: 1,
    }
}

pub fn assignment_request(catalog: &Catalog, shift_instance_id: i64) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        shift_instance_id,
        collaborator_id: catalog.collaborator_id,
        role_id: catalog.role_id,
        status: None,
        source: SOURCE_MANUAL.to_string(),
        note: None,
        is_locked: false,
    }
}
