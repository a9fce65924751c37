//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::FrameId;

/// Replacement queue for FIFO eviction.
///
/// Holds the indices of occupied frames in fill order (front = oldest).
/// A frame enters the queue once, when it is first filled, and after that
/// only moves by [`rotate`](Self::rotate). Hits never touch the queue.
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    /// Frame IDs in fill order (front = longest resident).
    queue: VecDeque<FrameId>,
}

impl FifoReplacer {
    /// Create an empty replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Record that a previously empty frame was filled.
    ///
    /// # Panics
    /// Panics in debug builds if the frame is already queued.
    pub fn record_fill(&mut self, frame_id: FrameId) {
        debug_assert!(
            !self.queue.contains(&frame_id),
            "{} filled twice without eviction",
            frame_id
        );
        self.queue.push_back(frame_id);
    }

    /// Select the victim frame and requeue it as the newest.
    ///
    /// The caller overwrites the returned frame, so it stays occupied and
    /// moves to the back. Returns None only if nothing has been filled.
    pub fn rotate(&mut self) -> Option<FrameId> {
        let victim = self.queue.pop_front()?;
        self.queue.push_back(victim);
        Some(victim)
    }

    /// Frame that would be evicted next.
    #[inline]
    pub fn oldest(&self) -> Option<FrameId> {
        self.queue.front().copied()
    }

    /// Number of queued (occupied) frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no frame has been filled yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Frames in eviction order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.queue.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();
        assert!(replacer.is_empty());

        // Fill frames 0, 1, 2
        replacer.record_fill(FrameId::new(0));
        replacer.record_fill(FrameId::new(1));
        replacer.record_fill(FrameId::new(2));

        assert_eq!(replacer.len(), 3);
        assert_eq!(replacer.oldest(), Some(FrameId::new(0)));

        // Victims come out in fill order and cycle
        assert_eq!(replacer.rotate(), Some(FrameId::new(0)));
        assert_eq!(replacer.rotate(), Some(FrameId::new(1)));
        assert_eq!(replacer.rotate(), Some(FrameId::new(2)));
        assert_eq!(replacer.rotate(), Some(FrameId::new(0)));
        assert_eq!(replacer.len(), 3);
    }

    #[test]
    fn test_fifo_rotate_empty() {
        let mut replacer = FifoReplacer::new();
        assert_eq!(replacer.rotate(), None);
        assert_eq!(replacer.oldest(), None);
    }

    #[test]
    fn test_fifo_rotate_moves_victim_to_back() {
        let mut replacer = FifoReplacer::new();
        replacer.record_fill(FrameId::new(2));
        replacer.record_fill(FrameId::new(0));

        assert_eq!(replacer.rotate(), Some(FrameId::new(2)));

        let order: Vec<_> = replacer.iter().collect();
        assert_eq!(order, vec![FrameId::new(0), FrameId::new(2)]);
    }

    #[test]
    #[should_panic(expected = "filled twice")]
    #[cfg(debug_assertions)]
    fn test_fifo_double_fill() {
        let mut replacer = FifoReplacer::new();
        replacer.record_fill(FrameId::new(1));
        replacer.record_fill(FrameId::new(1));
    }
}
