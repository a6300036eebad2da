// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{AvailabilityPatch, NewAvailability};
use crate::context::PlanningContext;
use crate::error::{CoreError, merged_window};
use shiftplan_domain::{TimeWindow, UserAvailability};
use time::OffsetDateTime;
use tracing::info;

impl PlanningContext {
    /// Records an availability or leave window for a collaborator.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown collaborator or `DomainViolation`
    /// for an empty or reversed window.
    pub fn create_availability(
        &mut self,
        payload: NewAvailability,
    ) -> Result<UserAvailability, CoreError> {
        self.atomically(|ctx| {
            ctx.get_collaborator(payload.collaborator_id)?;
            let window = TimeWindow::new(payload.start_utc, payload.end_utc)?;
            let record = ctx.store().insert_availability(UserAvailability {
                id: 0,
                collaborator_id: payload.collaborator_id,
                start_utc: window.start(),
                end_utc: window.end(),
                is_available: payload.is_available,
                reason: payload.reason,
            })?;
            info!(
                availability_id = record.id,
                collaborator_id = record.collaborator_id,
                is_available = record.is_available,
                "Recorded availability"
            );
            Ok(record)
        })
    }

    /// Records leave: an unavailable window with the category as reason.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::create_availability`].
    pub fn record_leave(
        &mut self,
        collaborator_id: i64,
        start_utc: OffsetDateTime,
        end_utc: OffsetDateTime,
        category: &str,
    ) -> Result<UserAvailability, CoreError> {
        self.create_availability(NewAvailability {
            collaborator_id,
            start_utc,
            end_utc,
            is_available: false,
            reason: Some(category.to_string()),
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist.
    pub fn get_availability(&mut self, availability_id: i64) -> Result<UserAvailability, CoreError> {
        self.store()
            .get_availability(availability_id)?
            .ok_or_else(|| CoreError::not_found("Availability", availability_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_availability(
        &mut self,
        collaborator_id: Option<i64>,
    ) -> Result<Vec<UserAvailability>, CoreError> {
        Ok(self.store().list_availability(collaborator_id)?)
    }

    /// # Errors
    ///
    /// Returns `NotFound` or `Validation` for a bad merged window.
    pub fn update_availability(
        &mut self,
        availability_id: i64,
        patch: AvailabilityPatch,
    ) -> Result<UserAvailability, CoreError> {
        self.atomically(|ctx| {
            let mut record = ctx.get_availability(availability_id)?;
            if let Some(start) = patch.start_utc {
                record.start_utc = start;
            }
            if let Some(end) = patch.end_utc {
                record.end_utc = end;
            }
            if let Some(is_available) = patch.is_available {
                record.is_available = is_available;
            }
            if patch.reason.is_some() {
                record.reason = patch.reason;
            }
            let window = merged_window(record.start_utc, record.end_utc)?;
            record.start_utc = window.start();
            record.end_utc = window.end();

            ctx.store().update_availability(&record)?;
            info!(availability_id, "Updated availability");
            Ok(record)
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist.
    pub fn delete_availability(&mut self, availability_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            ctx.get_availability(availability_id)?;
            ctx.store().delete_availability(availability_id)?;
            info!(availability_id, "Deleted availability");
            Ok(())
        })
    }
}
