//! Required-page fault accounting.
//!
//! Two historically distinct definitions of "fault" exist for the same
//! classroom tool, and they disagree. Both are kept as separate named
//! policies; the caller always picks one.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId};
use crate::ram::FrameBank;

/// How faults are signaled when required pages are supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Required pages drain from a working set as each one is first loaded.
    ///
    /// A miss faults while any required page has never been resident. The
    /// run stops at the step that loads the last outstanding one, even if
    /// earlier required pages have since been evicted.
    #[default]
    Drain,

    /// A miss faults unless, after placement, every required page is
    /// resident at the same instant.
    ///
    /// Residency is re-checked on every step, so an evicted required page
    /// has to come back. The run stops at the first step that leaves the
    /// whole set resident.
    Lookahead,
}

impl FaultPolicy {
    /// All policies, in display order.
    pub const ALL: [FaultPolicy; 2] = [FaultPolicy::Drain, FaultPolicy::Lookahead];

    /// Lowercase name used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultPolicy::Drain => "drain",
            FaultPolicy::Lookahead => "lookahead",
        }
    }
}

impl fmt::Display for FaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaultPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drain" | "a" => Ok(FaultPolicy::Drain),
            "lookahead" | "b" => Ok(FaultPolicy::Lookahead),
            other => Err(Error::InvalidArgument(format!(
                "unknown fault policy '{}' (expected drain or lookahead)",
                other
            ))),
        }
    }
}

/// Result of evaluating one step against the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Verdict {
    pub fault: bool,
    /// The policy's completion condition holds; the run ends after this step.
    pub complete: bool,
}

/// Per-run policy state.
#[derive(Debug, Clone)]
pub(crate) enum FaultTracker {
    /// No required pages: never faults, never completes early.
    Disabled,
    Drain { pending: BTreeSet<PageId> },
    Lookahead { required: BTreeSet<PageId> },
}

impl FaultTracker {
    pub fn new(policy: FaultPolicy, required: &BTreeSet<PageId>) -> Self {
        if required.is_empty() {
            return FaultTracker::Disabled;
        }
        match policy {
            FaultPolicy::Drain => FaultTracker::Drain {
                pending: required.clone(),
            },
            FaultPolicy::Lookahead => FaultTracker::Lookahead {
                required: required.clone(),
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, FaultTracker::Disabled)
    }

    /// Evaluate a step. `bank` must already reflect the step's placement.
    pub fn evaluate(&mut self, page: PageId, hit: bool, bank: &FrameBank) -> Verdict {
        let complete = match self {
            FaultTracker::Disabled => {
                return Verdict {
                    fault: false,
                    complete: false,
                }
            }
            // Pages only enter the bank by being processed, so removing the
            // current page is enough to track "ever observed".
            FaultTracker::Drain { pending } => {
                pending.remove(&page);
                pending.is_empty()
            }
            FaultTracker::Lookahead { required } => bank.contains_all(required.iter()),
        };

        Verdict {
            fault: !hit && !complete,
            complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;

    fn set(pages: &[u32]) -> BTreeSet<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    fn bank_with(capacity: usize, pages: &[u32]) -> FrameBank {
        let mut bank = FrameBank::new(capacity);
        for (i, &p) in pages.iter().enumerate() {
            bank.set(FrameId::new(i), PageId::new(p));
        }
        bank
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("drain".parse::<FaultPolicy>().unwrap(), FaultPolicy::Drain);
        assert_eq!(
            "Lookahead".parse::<FaultPolicy>().unwrap(),
            FaultPolicy::Lookahead
        );
        assert_eq!("b".parse::<FaultPolicy>().unwrap(), FaultPolicy::Lookahead);
        assert!("lru".parse::<FaultPolicy>().is_err());
    }

    #[test]
    fn test_policy_display_roundtrips_through_parse() {
        for policy in FaultPolicy::ALL {
            assert_eq!(policy.to_string().parse::<FaultPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_empty_required_disables_tracking() {
        for policy in FaultPolicy::ALL {
            let mut tracker = FaultTracker::new(policy, &BTreeSet::new());
            assert!(!tracker.is_enabled());

            let verdict = tracker.evaluate(PageId(1), false, &bank_with(3, &[1]));
            assert_eq!(
                verdict,
                Verdict {
                    fault: false,
                    complete: false
                }
            );
        }
    }

    #[test]
    fn test_drain_is_cumulative() {
        let mut tracker = FaultTracker::new(FaultPolicy::Drain, &set(&[1, 2]));

        let v = tracker.evaluate(PageId(1), false, &bank_with(1, &[1]));
        assert!(v.fault && !v.complete);

        // Page 1 has been evicted, but it was observed once; that is enough.
        let v = tracker.evaluate(PageId(2), false, &bank_with(1, &[2]));
        assert!(!v.fault && v.complete);
    }

    #[test]
    fn test_lookahead_requires_simultaneous_residency() {
        let mut tracker = FaultTracker::new(FaultPolicy::Lookahead, &set(&[1, 2]));

        let v = tracker.evaluate(PageId(1), false, &bank_with(1, &[1]));
        assert!(v.fault && !v.complete);

        let v = tracker.evaluate(PageId(2), false, &bank_with(1, &[2]));
        assert!(v.fault && !v.complete);

        let v = tracker.evaluate(PageId(2), false, &bank_with(2, &[1, 2]));
        assert!(!v.fault && v.complete);
    }

    #[test]
    fn test_hit_never_faults() {
        for policy in FaultPolicy::ALL {
            let mut tracker = FaultTracker::new(policy, &set(&[7]));
            let v = tracker.evaluate(PageId(1), true, &bank_with(2, &[1]));
            assert!(!v.fault);
        }
    }
}
