//! Configuration constants for the simulator.
//!
//! These are the bounds the classroom front-end has always enforced. The
//! engine itself only needs `frame_count >= 1` and a non-empty reference
//! string; everything tighter belongs to [`InputLimits`](crate::input::InputLimits).

use std::time::Duration;

/// Smallest frame count accepted from user input.
pub const MIN_FRAMES: usize = 3;

/// Largest frame count accepted from user input.
pub const MAX_FRAMES: usize = 5;

/// Longest reference string accepted from user input (strictly fewer than 10 pages).
pub const MAX_REFERENCE_LEN: usize = 9;

/// Pause between revealed steps during animated playback.
pub const DEFAULT_STEP_DELAY_MS: u64 = 1000;

/// [`DEFAULT_STEP_DELAY_MS`] as a `Duration`.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(DEFAULT_STEP_DELAY_MS);
