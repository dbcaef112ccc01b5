use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::entities::{BookingDraft, DraftField, Estimate, RateTable, ServiceType};
use crate::error::Error;
use crate::external::DistanceLookup;

pub type DynDistanceLookup = Arc<dyn DistanceLookup + Send + Sync>;

/// Draft and estimate as last observed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub draft: BookingDraft,
    pub estimate: Estimate,
}

/// A distance lookup issued for a particular generation of the form's
/// estimate inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateRequest {
    pub generation: u64,
    pub origin: String,
    pub destination: String,
    pub service_type: ServiceType,
}

#[derive(Debug, Default)]
struct FormState {
    draft: BookingDraft,
    estimate: Estimate,
    // bumped on every change to pickup, dropoff or service type
    generation: u64,
}

/// Owns one booking draft and keeps its estimate in step with the
/// pickup, dropoff and service type.
///
/// Lookups run without holding the state lock, so several may be in flight
/// for the same form. Only the response to the most recently issued request
/// is applied; anything older is dropped when it arrives.
pub struct BookingForm {
    rates: RateTable,
    lookup: DynDistanceLookup,
    state: Mutex<FormState>,
}

impl fmt::Debug for BookingForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingForm")
            .field("rates", &self.rates)
            .finish_non_exhaustive()
    }
}

impl BookingForm {
    pub fn new(rates: RateTable, lookup: DynDistanceLookup) -> Self {
        Self {
            rates,
            lookup,
            state: Mutex::new(FormState::default()),
        }
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        let state = self.state.lock().await;

        FormSnapshot {
            draft: state.draft.clone(),
            estimate: state.estimate,
        }
    }

    /// Applies the given fields in order. Returns a lookup to run when an
    /// estimate input changed and the draft is routable.
    pub async fn update(&self, fields: Vec<DraftField>) -> Option<EstimateRequest> {
        let mut state = self.state.lock().await;

        let mut inputs_changed = false;
        for field in fields {
            inputs_changed |= state.draft.set(field);
        }

        if !inputs_changed {
            return None;
        }

        state.generation += 1;

        if !state.draft.is_routable() {
            return None;
        }

        Some(EstimateRequest {
            generation: state.generation,
            origin: state.draft.pickup.clone(),
            destination: state.draft.dropoff.clone(),
            service_type: state.draft.service_type,
        })
    }

    /// Runs the lookup for `request` and applies the outcome. Returns false
    /// when the request was superseded before its response arrived.
    #[tracing::instrument(skip_all, fields(generation = request.generation))]
    pub async fn refresh(&self, request: EstimateRequest) -> bool {
        let outcome = self
            .lookup
            .driving_distance(&request.origin, &request.destination)
            .await;

        self.apply(&request, outcome.map(|distance| {
            Estimate::derive(distance, request.service_type, &self.rates)
        }))
        .await
    }

    /// Update then refresh, as a single call.
    pub async fn update_and_refresh(&self, fields: Vec<DraftField>) -> FormSnapshot {
        if let Some(request) = self.update(fields).await {
            self.refresh(request).await;
        }

        self.snapshot().await
    }

    async fn apply(&self, request: &EstimateRequest, outcome: Result<Estimate, Error>) -> bool {
        let mut state = self.state.lock().await;

        if state.generation != request.generation {
            tracing::debug!(
                "dropping stale estimate for generation {} (current {})",
                request.generation,
                state.generation
            );
            return false;
        }

        state.estimate = match outcome {
            Ok(estimate) => estimate,
            Err(err) => {
                tracing::warn!("distance lookup failed: {}", err);
                Estimate::zero()
            }
        };

        true
    }
}
