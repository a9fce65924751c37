//! fifosim - a step-by-step FIFO page-replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            fifosim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Front-end (input/, render/, playback/)           │   │
//! │  │     RawInput → InputLimits → Player → HistoryTable       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Engine (simulation/)                          │   │
//! │  │   SimulationRequest → Simulation: Iterator<Step>         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Fault policies: Drain (A) | Lookahead (B)     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            RAM state (ram/)                              │   │
//! │  │        FrameBank + FifoReplacer + SimulationStats        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`ram`] - Frame bank and FIFO replacement queue
//! - [`simulation`] - The step engine and fault policies
//! - [`input`] - Validation of user-typed parameters
//! - [`render`] - Text history table
//! - [`playback`] - Timed, cancellable step playback
//!
//! # Quick Start
//! ```
//! use fifosim::{simulate, FaultPolicy, SimulationRequest, Termination};
//!
//! let request = SimulationRequest::new([1u32, 2, 3, 4], 3)
//!     .with_required([2u32, 4])
//!     .with_policy(FaultPolicy::Drain);
//!
//! let trace = simulate(request).unwrap();
//! let faults: Vec<bool> = trace.steps.iter().map(|s| s.fault).collect();
//! assert_eq!(faults, vec![true, true, true, false]);
//! assert_eq!(trace.termination, Termination::RequirementMet);
//! ```

pub mod common;
pub mod input;
pub mod playback;
pub mod ram;
pub mod render;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};

pub use simulation::{
    simulate, FaultPolicy, Simulation, SimulationRequest, SimulationStep, SimulationTrace,
    StepOutcome, Termination,
};
