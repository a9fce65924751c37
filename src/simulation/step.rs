//! Simulation output units.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{FrameId, PageId};

/// What happened to the frame bank on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Page was already resident in `frame`; nothing moved.
    Hit { frame: FrameId },
    /// Page was loaded into the empty `frame`.
    Loaded { frame: FrameId },
    /// Page overwrote the longest-resident page in `frame`.
    Replaced { frame: FrameId, evicted: PageId },
}

impl StepOutcome {
    /// Frame touched by this step (or holding the page, on a hit).
    pub fn frame(&self) -> FrameId {
        match *self {
            StepOutcome::Hit { frame }
            | StepOutcome::Loaded { frame }
            | StepOutcome::Replaced { frame, .. } => frame,
        }
    }
}

/// One discrete step of a simulation.
///
/// Immutable once yielded: `frames` is a copy of the bank after the step,
/// not a view into the live simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// 1-based step number.
    pub index: usize,

    /// Page processed on this step.
    pub page: PageId,

    /// Frame bank contents after the step, in slot order.
    pub frames: Vec<Option<PageId>>,

    /// Whether the active policy signaled a required-page fault.
    pub fault: bool,

    pub outcome: StepOutcome,
}

impl SimulationStep {
    /// Check if the page was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self.outcome, StepOutcome::Hit { .. })
    }

    /// Frame written (or read, on a hit) by this step.
    #[inline]
    pub fn frame(&self) -> FrameId {
        self.outcome.frame()
    }

    /// Page evicted by this step, if any.
    pub fn evicted(&self) -> Option<PageId> {
        match self.outcome {
            StepOutcome::Replaced { evicted, .. } => Some(evicted),
            _ => None,
        }
    }
}

/// Why a simulation stopped producing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every page of the reference string was processed.
    Exhausted,
    /// The fault policy's completion condition was met.
    RequirementMet,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exhausted => write!(f, "reference string exhausted"),
            Termination::RequirementMet => write!(f, "all required pages observed"),
        }
    }
}
