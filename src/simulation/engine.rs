//! Simulation engine - the FIFO step sequence.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::{Error, PageId, Result};
use crate::ram::replacer::FifoReplacer;
use crate::ram::{FrameBank, SimulationStats};
use crate::simulation::policy::FaultTracker;
use crate::simulation::{SimulationRequest, SimulationStep, StepOutcome, Termination};

/// A lazy, finite, non-restartable FIFO simulation.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │                      Simulation                        │
/// │  reference_string ──cursor──▶ page                     │
/// │                                 │                      │
/// │             ┌───────────────────┴──────────┐           │
/// │             ▼                              ▼           │
/// │  ┌──────────────────┐            ┌──────────────────┐  │
/// │  │    FrameBank     │◀──victim───│   FifoReplacer   │  │
/// │  │ [p0] [p1] [--]   │            │ F0 → F1 (front)  │  │
/// │  └──────────────────┘            └──────────────────┘  │
/// │             │                                          │
/// │             ▼                                          │
/// │  ┌──────────────────┐                                  │
/// │  │   FaultTracker   │──▶ SimulationStep                │
/// │  └──────────────────┘                                  │
/// └────────────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use fifosim::{Simulation, SimulationRequest};
///
/// let request = SimulationRequest::new([1u32, 2, 3, 1], 3);
/// let mut sim = Simulation::new(request).unwrap();
///
/// let first = sim.next().unwrap();
/// assert_eq!(first.index, 1);
/// assert!(!first.is_hit());
///
/// let rest: Vec<_> = sim.collect();
/// assert!(rest.last().unwrap().is_hit());
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    request: SimulationRequest,

    /// Index of the next page to process.
    cursor: usize,

    bank: FrameBank,

    /// Occupied frames in fill order.
    replacer: FifoReplacer,

    tracker: FaultTracker,

    stats: SimulationStats,

    /// Set once the sequence has ended.
    termination: Option<Termination>,
}

impl Simulation {
    /// Start a simulation from empty RAM.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if the reference string is empty or
    ///   `frame_count` is 0
    pub fn new(request: SimulationRequest) -> Result<Self> {
        if request.reference_string.is_empty() {
            return Err(Error::InvalidArgument(
                "reference string must not be empty".to_string(),
            ));
        }
        if request.frame_count == 0 {
            return Err(Error::InvalidArgument(
                "frame count must be at least 1".to_string(),
            ));
        }

        let tracker = FaultTracker::new(request.policy, &request.required_pages);
        debug!(
            pages = request.reference_string.len(),
            frames = request.frame_count,
            required = request.required_pages.len(),
            policy = %request.policy,
            "starting simulation"
        );

        Ok(Self {
            bank: FrameBank::new(request.frame_count),
            replacer: FifoReplacer::new(),
            tracker,
            stats: SimulationStats::new(),
            cursor: 0,
            termination: None,
            request,
        })
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// The request this simulation was built from.
    pub fn request(&self) -> &SimulationRequest {
        &self.request
    }

    /// Live frame bank.
    pub fn frame_bank(&self) -> &FrameBank {
        &self.bank
    }

    /// Live replacement queue.
    pub fn replacement_queue(&self) -> &FifoReplacer {
        &self.replacer
    }

    /// Whether faults are reported (some required page was supplied).
    pub fn tracks_faults(&self) -> bool {
        self.tracker.is_enabled()
    }

    /// Counters over the steps produced so far.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Why the sequence ended, or None while steps remain.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Check if no more steps will be produced.
    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Drain the remaining steps into a trace.
    pub fn run_to_end(mut self) -> SimulationTrace {
        let steps: Vec<SimulationStep> = self.by_ref().collect();

        SimulationTrace {
            steps,
            // The iterator only returns None after recording a termination.
            termination: self.termination.unwrap_or(Termination::Exhausted),
            stats: self.stats,
            tracks_faults: self.tracks_faults(),
            frame_count: self.bank.capacity(),
        }
    }

    // ========================================================================
    // Internal: step evaluation
    // ========================================================================

    /// Put `page` into RAM, evicting the longest-resident page if full.
    fn place(&mut self, page: PageId) -> StepOutcome {
        if let Some(frame) = self.bank.position(page) {
            self.stats.hits += 1;
            return StepOutcome::Hit { frame };
        }

        self.stats.misses += 1;

        if let Some(frame) = self.bank.first_empty() {
            self.bank.set(frame, page);
            self.replacer.record_fill(frame);
            return StepOutcome::Loaded { frame };
        }

        // Bank is full, so every frame is queued and rotate() cannot miss.
        let frame = self
            .replacer
            .rotate()
            .expect("full frame bank with empty replacement queue");
        let evicted = self
            .bank
            .set(frame, page)
            .expect("queued frame was empty");
        self.stats.evictions += 1;
        debug!(%frame, %evicted, %page, "evicted longest-resident page");

        StepOutcome::Replaced { frame, evicted }
    }

    fn finish(&mut self, termination: Termination) {
        debug!(
            %termination,
            steps = self.cursor,
            stats = %self.stats,
            "simulation finished"
        );
        self.termination = Some(termination);
    }
}

impl Iterator for Simulation {
    type Item = SimulationStep;

    fn next(&mut self) -> Option<SimulationStep> {
        if self.termination.is_some() {
            return None;
        }

        let page = match self.request.reference_string.get(self.cursor) {
            Some(&page) => page,
            None => {
                self.finish(Termination::Exhausted);
                return None;
            }
        };
        self.cursor += 1;

        let outcome = self.place(page);
        let hit = matches!(outcome, StepOutcome::Hit { .. });
        let verdict = self.tracker.evaluate(page, hit, &self.bank);
        if verdict.fault {
            self.stats.faults += 1;
        }

        let step = SimulationStep {
            index: self.cursor,
            page,
            frames: self.bank.snapshot(),
            fault: verdict.fault,
            outcome,
        };
        trace!(
            step = step.index,
            %page,
            ?outcome,
            fault = step.fault,
            "step"
        );

        if verdict.complete {
            self.finish(Termination::RequirementMet);
        } else if self.cursor == self.request.reference_string.len() {
            self.finish(Termination::Exhausted);
        }

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.termination.is_some() {
            return (0, Some(0));
        }
        let remaining = self.request.reference_string.len() - self.cursor;
        if self.tracker.is_enabled() {
            // Early completion can cut the run short, but never below one step.
            (remaining.min(1), Some(remaining))
        } else {
            (remaining, Some(remaining))
        }
    }
}

impl FusedIterator for Simulation {}

/// A fully drained simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTrace {
    pub steps: Vec<SimulationStep>,
    pub termination: Termination,
    pub stats: SimulationStats,
    /// Whether a fault column should be shown.
    pub tracks_faults: bool,
    pub frame_count: usize,
}

/// Run a request to completion.
///
/// # Errors
/// Same as [`Simulation::new`].
pub fn simulate(request: SimulationRequest) -> Result<SimulationTrace> {
    Ok(Simulation::new(request)?.run_to_end())
}
