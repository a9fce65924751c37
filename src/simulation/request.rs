//! Inputs for a single simulation run.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::PageId;
use crate::simulation::FaultPolicy;

/// Everything the engine needs to run one simulation.
///
/// This replaces any ambient UI state: a run is fully described by its
/// request, so two runs with equal requests produce equal steps.
///
/// # Example
/// ```
/// use fifosim::{FaultPolicy, SimulationRequest};
///
/// let request = SimulationRequest::new([1u32, 2, 3, 4], 3)
///     .with_required([2u32, 4])
///     .with_policy(FaultPolicy::Drain);
/// assert!(request.tracks_faults());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Pages to access, in order.
    pub reference_string: Vec<PageId>,

    /// Number of RAM frames.
    pub frame_count: usize,

    /// Pages the observer wants resident. Empty disables fault tracking.
    #[serde(default)]
    pub required_pages: BTreeSet<PageId>,

    /// Fault accounting to apply when `required_pages` is non-empty.
    #[serde(default)]
    pub policy: FaultPolicy,
}

impl SimulationRequest {
    /// Create a request with no required pages.
    pub fn new<I, P>(reference_string: I, frame_count: usize) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PageId>,
    {
        Self {
            reference_string: reference_string.into_iter().map(Into::into).collect(),
            frame_count,
            required_pages: BTreeSet::new(),
            policy: FaultPolicy::default(),
        }
    }

    /// Set the required-page set, replacing any previous one.
    pub fn with_required<I, P>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PageId>,
    {
        self.required_pages = pages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fault policy.
    pub fn with_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the run reports faults at all.
    #[inline]
    pub fn tracks_faults(&self) -> bool {
        !self.required_pages.is_empty()
    }
}
