//! Plan-and-persist orchestration.

use chrono::{DateTime, Utc};
use serde::Serialize;

use eld_core::TripId;
use eld_route::{RouteProvider, path_geojson};
use eld_schedule::{HosRules, PlanRequest, TripPlan, plan_trip};
use eld_store::{TripRecord, TripStore};

use crate::timeline::{TimelineEntry, build_timeline};
use crate::{AppError, AppResult};

/// The outcome of one planning call: the durable record plus the full plan
/// it was materialized from.
#[derive(Clone, Debug, Serialize)]
pub struct PlannedTrip {
    pub record: TripRecord,
    pub plan: TripPlan,
}

/// The application facade: owns the provider, the rule set, and the store.
///
/// One `TripPlanner` may serve many trips; each `plan` call is an
/// independent scheduling run followed by one atomic persist.
pub struct TripPlanner<P: RouteProvider> {
    provider: P,
    rules: HosRules,
    store: TripStore,
}

impl<P: RouteProvider> TripPlanner<P> {
    pub fn new(provider: P, rules: HosRules, store: TripStore) -> Self {
        Self { provider, rules, store }
    }

    /// Read access to the underlying store (listings, daily logs).
    pub fn store(&self) -> &TripStore {
        &self.store
    }

    /// Write access to the underlying store.
    pub fn store_mut(&mut self) -> &mut TripStore {
        &mut self.store
    }

    /// Schedule a trip and persist the result in one transaction.
    ///
    /// On any failure — cycle exhaustion, routing, storage — nothing is
    /// persisted and no partial plan escapes.
    pub fn plan(&mut self, request: &PlanRequest, now: DateTime<Utc>) -> AppResult<PlannedTrip> {
        let plan = plan_trip(&self.provider, &self.rules, request, now)?;

        let record = TripRecord {
            id: TripId::new(),
            current_location: request.current.name.clone(),
            current_point: request.current.point,
            pickup_location: request.pickup.name.clone(),
            pickup_point: request.pickup.point,
            dropoff_location: request.dropoff.name.clone(),
            dropoff_point: request.dropoff.point,
            cycle_used_hours: request.cycle_used_hours,
            route_geojson: path_geojson(&plan.path).to_string(),
            total_distance_miles: plan.total_distance_miles,
            total_driving_hours: plan.total_driving_hours,
            created_at: now,
        };

        self.store.persist_plan(&record, &plan)?;
        log::info!("trip {} planned and persisted", record.id);

        Ok(PlannedTrip { record, plan })
    }

    /// Project a stored trip into its duty-status timeline.
    pub fn timeline(&self, id: TripId) -> AppResult<Vec<TimelineEntry>> {
        // Surfaces TripNotFound for an unknown id before looking at segments.
        self.store.fetch_trip(id)?;

        let segments = self.store.fetch_segments(id)?;
        if segments.is_empty() {
            return Err(AppError::NoRouteData(id));
        }
        Ok(build_timeline(&segments))
    }

    /// All stored trips, newest first.
    pub fn trips(&self) -> AppResult<Vec<TripRecord>> {
        Ok(self.store.list_trips()?)
    }

    /// Delete a trip and everything hanging off it.
    pub fn delete(&mut self, id: TripId) -> AppResult<()> {
        self.store.delete_trip(id)?;
        Ok(())
    }
}
