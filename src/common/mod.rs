//! Common types shared across the simulator.
//!
//! This module contains the primitives every other layer builds on:
//! - Configuration constants and input bounds
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
