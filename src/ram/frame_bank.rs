//! FrameBank - the simulated RAM contents.
//!
//! A [`FrameBank`] is a fixed number of slots, each empty or holding one
//! [`PageId`]. Slot indices are [`FrameId`]s and never change for the
//! lifetime of the bank.

use crate::common::{FrameId, PageId};

/// Fixed-capacity RAM, one page per frame.
///
/// # Example
/// ```
/// use fifosim::ram::FrameBank;
/// use fifosim::PageId;
///
/// let mut bank = FrameBank::new(3);
/// let slot = bank.first_empty().unwrap();
/// bank.set(slot, PageId::new(4));
/// assert!(bank.contains(PageId::new(4)));
/// assert_eq!(bank.snapshot(), vec![Some(PageId::new(4)), None, None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBank {
    slots: Vec<Option<PageId>>,
}

impl FrameBank {
    /// Create a bank of `capacity` empty frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of frames currently holding a page.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Page held by `frame`, or None if the frame is empty.
    ///
    /// # Panics
    /// Panics if `frame` is out of range.
    #[inline]
    pub fn get(&self, frame: FrameId) -> Option<PageId> {
        self.slots[frame.0]
    }

    /// Frame holding `page`, if resident.
    pub fn position(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|s| *s == Some(page))
            .map(FrameId::new)
    }

    /// Check if `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    /// Check if every page in `pages` is resident at the same time.
    ///
    /// An empty iterator is trivially contained.
    pub fn contains_all<'a, I>(&self, pages: I) -> bool
    where
        I: IntoIterator<Item = &'a PageId>,
    {
        pages.into_iter().all(|p| self.contains(*p))
    }

    /// Lowest-index empty frame, if any.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Load `page` into `frame`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `frame` is out of range.
    pub fn set(&mut self, frame: FrameId, page: PageId) -> Option<PageId> {
        self.slots[frame.0].replace(page)
    }

    /// Owned copy of the slots, safe to hand to a renderer.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }

    /// Iterate over `(frame, contents)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<PageId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (FrameId::new(i), *s))
    }
}
