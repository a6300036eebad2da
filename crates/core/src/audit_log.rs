// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::PlanningContext;
use crate::error::CoreError;
use shiftplan_audit::{Actor, AuditFilter, PlanningAction, PlanningChange, StateSnapshot};
use tracing::debug;

impl PlanningContext {
    /// Appends a planning change stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn log_change(
        &mut self,
        organization_id: i64,
        actor: Actor,
        action: PlanningAction,
        entity_id: i64,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Result<PlanningChange, CoreError> {
        let change = PlanningChange::new(
            organization_id,
            actor,
            action,
            entity_id,
            before,
            after,
            self.now(),
        );
        let stored = self.store().append_change(change)?;
        debug!(
            change_id = stored.id,
            action = %action,
            entity_id,
            "Recorded planning change"
        );
        Ok(stored)
    }

    /// Lists changes matching `filter` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_changes(&mut self, filter: &AuditFilter) -> Result<Vec<PlanningChange>, CoreError> {
        Ok(self.store().list_changes(filter)?)
    }
}
