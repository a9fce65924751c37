//! Simulation statistics tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters accumulated over one simulation run.
///
/// The engine updates these as it yields steps, so a partially consumed
/// simulation reports only the steps produced so far.
///
/// # Example
/// ```
/// use fifosim::ram::SimulationStats;
///
/// let stats = SimulationStats { hits: 3, misses: 1, ..Default::default() };
/// assert_eq!(stats.hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Steps whose page was already resident.
    pub hits: u64,

    /// Steps whose page had to be loaded.
    pub misses: u64,

    /// Misses that overwrote an occupied frame.
    pub evictions: u64,

    /// Steps that signaled a required-page fault.
    pub faults: u64,
}

impl SimulationStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total steps counted.
    pub fn steps(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.steps())
    }

    /// Fraction of steps that signaled a fault (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        ratio(self.faults, self.steps())
    }
}

fn ratio(n: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        n as f64 / total as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, faults: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.faults,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimulationStats::new();
        assert_eq!(stats.steps(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let stats = SimulationStats {
            hits: 7,
            misses: 3,
            evictions: 1,
            faults: 2,
        };

        assert_eq!(stats.steps(), 10);
        assert_eq!(stats.hit_rate(), 0.7);
        assert_eq!(stats.fault_rate(), 0.2);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimulationStats {
            hits: 8,
            misses: 2,
            evictions: 1,
            faults: 0,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 8"));
        assert!(display.contains("misses: 2"));
        assert!(display.contains("80.00%"));
    }
}
