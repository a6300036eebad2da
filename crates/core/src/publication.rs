// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::NewPublication;
use crate::context::PlanningContext;
use crate::error::CoreError;
use shiftplan_audit::{PlanningAction, StateSnapshot};
use shiftplan_domain::{Publication, PublicationStatus};
use tracing::info;

impl PlanningContext {
    /// Creates a draft publication and immediately publishes it.
    ///
    /// Versions count up from 1 per organization. One `publish_planning`
    /// audit entry is written with the draft as `before`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn publish(&mut self, payload: NewPublication) -> Result<Publication, CoreError> {
        let organization_id = payload
            .organization_id
            .unwrap_or(self.default_organization_id());

        self.atomically(|ctx| {
            let version = ctx
                .store()
                .list_publications(organization_id)?
                .iter()
                .map(|p| p.version)
                .max()
                .unwrap_or(0)
                + 1;

            let draft = ctx.store().insert_publication(Publication {
                id: 0,
                organization_id,
                author_user_id: payload.author_user_id,
                status: PublicationStatus::Draft,
                version,
                message: payload.message,
                published_at: None,
            })?;

            let mut published = draft.clone();
            published.status = PublicationStatus::Published;
            published.published_at = Some(ctx.now());
            ctx.store().update_publication(&published)?;

            ctx.record_change(
                organization_id,
                PlanningAction::PublishPlanning,
                published.id,
                StateSnapshot::capture(&draft)?,
                StateSnapshot::capture(&published)?,
            )?;
            info!(
                publication_id = published.id,
                organization_id,
                version,
                "Published planning"
            );
            Ok(published)
        })
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_publications(
        &mut self,
        organization_id: i64,
    ) -> Result<Vec<Publication>, CoreError> {
        Ok(self.store().list_publications(organization_id)?)
    }
}
