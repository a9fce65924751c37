//! Frame identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a slot in the frame bank.
///
/// Wraps a `usize` so it can index the bank's `Vec` directly:
/// `slots[frame_id.0]`.
///
/// # Example
/// ```
/// use fifosim::FrameId;
///
/// let frame = FrameId::new(2);
/// assert_eq!(frame.to_string(), "F2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
