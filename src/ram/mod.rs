//! Simulated RAM state.
//!
//! The RAM is a fixed bank of frames plus the queue that decides which
//! frame gets overwritten next.
//!
//! # Components
//! - [`FrameBank`] - The frame slots and their current pages
//! - [`replacer`] - Replacement policy (FIFO only)
//! - [`SimulationStats`] - Hit/miss/eviction/fault counters

mod frame_bank;
pub mod replacer;
mod stats;

pub use frame_bank::FrameBank;
pub use stats::SimulationStats;
