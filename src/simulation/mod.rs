//! The FIFO simulation engine.
//!
//! A [`Simulation`] is built from a [`SimulationRequest`] and then pulled as
//! a plain iterator of [`SimulationStep`]s. It never sleeps and never
//! renders; pacing and display are the caller's business (see
//! [`crate::playback`] and [`crate::render`]).
//!
//! # Components
//! - [`SimulationRequest`] - Validated inputs for one run
//! - [`FaultPolicy`] - Which required-page accounting to apply
//! - [`Simulation`] - The lazy step sequence
//! - [`SimulationStep`] / [`StepOutcome`] - One yielded step
//! - [`SimulationTrace`] - A fully drained run

mod engine;
mod policy;
mod request;
mod step;

pub use engine::{simulate, Simulation, SimulationTrace};
pub use policy::FaultPolicy;
pub use request::SimulationRequest;
pub use step::{SimulationStep, StepOutcome, Termination};
