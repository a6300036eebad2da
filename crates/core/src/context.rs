// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::scheduler::AutoAssignJob;
use crate::store::EntityStore;
use shiftplan_audit::{Actor, PlanningAction, PlanningChange, StateSnapshot};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use tracing::warn;

/// Organization used for audit records and publications when a request
/// names none.
pub const DEFAULT_ORGANIZATION_ID: i64 = 1;

/// Everything a planning operation needs: the store, a clock and the
/// registry of finished auto-assign jobs.
///
/// Built once per process and passed by reference to every operation.
pub struct PlanningContext {
    store: Box<dyn EntityStore + Send>,
    clock: Box<dyn Clock>,
    default_organization_id: i64,
    pub(crate) jobs: BTreeMap<String, AutoAssignJob>,
    tx_depth: u32,
}

impl std::fmt::Debug for PlanningContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanningContext")
            .field("backend", &self.store.backend_name())
            .field("default_organization_id", &self.default_organization_id)
            .field("jobs", &self.jobs.len())
            .finish_non_exhaustive()
    }
}

impl PlanningContext {
    pub fn new(store: impl EntityStore + Send + 'static) -> Self {
        Self {
            store: Box::new(store),
            clock: Box::new(SystemClock),
            default_organization_id: DEFAULT_ORGANIZATION_ID,
            jobs: BTreeMap::new(),
            tx_depth: 0,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_default_organization(mut self, organization_id: i64) -> Self {
        self.default_organization_id = organization_id;
        self
    }

    #[must_use]
    pub const fn default_organization_id(&self) -> i64 {
        self.default_organization_id
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub(crate) fn store(&mut self) -> &mut (dyn EntityStore + Send) {
        self.store.as_mut()
    }

    pub(crate) fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Runs `op` as one unit of work against the store.
    ///
    /// Nested calls join the outermost unit, so an operation built from
    /// other operations commits or rolls back as a whole.
    pub(crate) fn atomically<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        if self.tx_depth > 0 {
            return op(self);
        }

        self.store.begin()?;
        self.tx_depth += 1;
        let result = op(self);
        self.tx_depth -= 1;

        match result {
            Ok(value) => {
                self.store.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.store.rollback() {
                    warn!(error = %rollback_err, "Rollback failed after {err}");
                }
                Err(err)
            }
        }
    }

    /// Appends one entry to the audit trail on behalf of an anonymous actor.
    pub(crate) fn record_change(
        &mut self,
        organization_id: i64,
        action: PlanningAction,
        entity_id: i64,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Result<PlanningChange, CoreError> {
        self.log_change(
            organization_id,
            Actor::anonymous(),
            action,
            entity_id,
            before,
            after,
        )
    }
}
