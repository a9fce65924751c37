//! Timed playback of a simulation.
//!
//! The engine is a plain iterator; this module adds the classroom pacing on
//! top. A [`Player`] pulls one step, hands it to a [`StepSink`], then sleeps
//! for the configured delay before pulling the next. Sleeping happens on a
//! [`StopHandle`] so another thread can cut the wait short.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::config::DEFAULT_STEP_DELAY_MS;
use crate::simulation::{Simulation, SimulationStep, Termination};

/// Receives steps as they are revealed.
pub trait StepSink {
    /// Called once per step, in order.
    fn on_step(&mut self, step: &SimulationStep);

    /// Called once when the simulation runs out of steps.
    ///
    /// Not called if playback is stopped early.
    fn on_finish(&mut self, _termination: Termination) {}
}

impl StepSink for Vec<SimulationStep> {
    fn on_step(&mut self, step: &SimulationStep) {
        self.push(step.clone());
    }
}

/// Pacing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause between consecutive steps, in milliseconds. 0 plays everything at once.
    pub delay_ms: u64,
}

impl PlaybackConfig {
    /// Play every step back to back.
    pub fn immediate() -> Self {
        Self { delay_ms: 0 }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

/// How a playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The simulation ended on its own after `steps` steps were shown.
    Completed { termination: Termination, steps: usize },
    /// A [`StopHandle`] cancelled playback after `steps` steps were shown.
    Stopped { steps: usize },
}

#[derive(Debug, Default)]
struct StopState {
    stopped: Mutex<bool>,
    cvar: Condvar,
}

/// Cloneable cancel token for a [`Player`].
///
/// # Example
/// ```
/// use fifosim::playback::StopHandle;
///
/// let handle = StopHandle::new();
/// let other = handle.clone();
/// other.stop();
/// assert!(handle.is_stopped());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    inner: Arc<StopState>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any sleeping player.
    pub fn stop(&self) {
        *self.inner.stopped.lock() = true;
        self.inner.cvar.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        *self.inner.stopped.lock()
    }

    /// Sleep for up to `timeout`. Returns true if stopped before or during the wait.
    fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.inner.stopped.lock();
        while !*stopped {
            if self.inner.cvar.wait_until(&mut stopped, deadline).timed_out() {
                break;
            }
        }
        *stopped
    }
}

/// Reveals simulation steps one at a time with a fixed delay.
#[derive(Debug, Clone, Default)]
pub struct Player {
    config: PlaybackConfig,
    stop: StopHandle,
}

impl Player {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            stop: StopHandle::new(),
        }
    }

    /// Handle that cancels this player's playback.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Drive `simulation` to completion (or cancellation), feeding `sink`.
    ///
    /// The first step is shown immediately; the delay only separates
    /// consecutive steps.
    pub fn play<S>(&self, simulation: &mut Simulation, sink: &mut S) -> PlaybackOutcome
    where
        S: StepSink + ?Sized,
    {
        let delay = self.config.delay();
        let mut shown = 0;

        if self.stop.is_stopped() {
            debug!("playback stopped before start");
            return PlaybackOutcome::Stopped { steps: 0 };
        }

        while let Some(step) = simulation.next() {
            sink.on_step(&step);
            shown += 1;

            if simulation.is_finished() {
                break;
            }
            if self.stop.wait(delay) {
                debug!(steps = shown, "playback stopped");
                return PlaybackOutcome::Stopped { steps: shown };
            }
        }

        let termination = simulation.termination().unwrap_or(Termination::Exhausted);
        sink.on_finish(termination);
        PlaybackOutcome::Completed {
            termination,
            steps: shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{FaultPolicy, SimulationRequest};
    use std::thread;

    fn sim(pages: &[u32]) -> Simulation {
        Simulation::new(SimulationRequest::new(pages.iter().copied(), 3)).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        indices: Vec<usize>,
        finished: Option<Termination>,
    }

    impl StepSink for Recorder {
        fn on_step(&mut self, step: &SimulationStep) {
            self.indices.push(step.index);
        }

        fn on_finish(&mut self, termination: Termination) {
            self.finished = Some(termination);
        }
    }

    #[test]
    fn test_config_default_delay() {
        assert_eq!(PlaybackConfig::default().delay(), Duration::from_secs(1));
        assert_eq!(PlaybackConfig::immediate().delay(), Duration::ZERO);
    }

    #[test]
    fn test_play_immediate() {
        let player = Player::new(PlaybackConfig::immediate());
        let mut recorder = Recorder::default();

        let outcome = player.play(&mut sim(&[1, 2, 3, 4]), &mut recorder);

        assert_eq!(recorder.indices, vec![1, 2, 3, 4]);
        assert_eq!(recorder.finished, Some(Termination::Exhausted));
        assert_eq!(
            outcome,
            PlaybackOutcome::Completed {
                termination: Termination::Exhausted,
                steps: 4
            }
        );
    }

    #[test]
    fn test_play_reports_requirement_met() {
        let req = SimulationRequest::new([1u32, 2, 3, 4], 3)
            .with_required([2u32])
            .with_policy(FaultPolicy::Drain);
        let mut simulation = Simulation::new(req).unwrap();
        let mut steps: Vec<SimulationStep> = Vec::new();

        let outcome = Player::new(PlaybackConfig::immediate()).play(&mut simulation, &mut steps);

        assert_eq!(steps.len(), 2);
        assert_eq!(
            outcome,
            PlaybackOutcome::Completed {
                termination: Termination::RequirementMet,
                steps: 2
            }
        );
    }

    #[test]
    fn test_stop_before_start() {
        let player = Player::new(PlaybackConfig::immediate());
        player.stop_handle().stop();

        let mut recorder = Recorder::default();
        let outcome = player.play(&mut sim(&[1, 2]), &mut recorder);

        assert_eq!(outcome, PlaybackOutcome::Stopped { steps: 0 });
        assert!(recorder.indices.is_empty());
        assert_eq!(recorder.finished, None);
    }

    #[test]
    fn test_stop_interrupts_delay() {
        let player = Player::new(PlaybackConfig { delay_ms: 60_000 });
        let handle = player.stop_handle();

        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            handle.stop();
        });

        let start = Instant::now();
        let mut recorder = Recorder::default();
        let outcome = player.play(&mut sim(&[1, 2, 3]), &mut recorder);
        stopper.join().unwrap();

        assert_eq!(outcome, PlaybackOutcome::Stopped { steps: 1 });
        assert_eq!(recorder.indices, vec![1]);
        assert!(start.elapsed() < Duration::from_secs(30));
    }

    #[test]
    fn test_paced_playback_waits_between_steps() {
        let player = Player::new(PlaybackConfig { delay_ms: 20 });
        let start = Instant::now();

        let outcome = player.play(&mut sim(&[1, 2, 3]), &mut Recorder::default());

        assert!(matches!(outcome, PlaybackOutcome::Completed { steps: 3, .. }));
        // Two gaps between three steps; no trailing wait.
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
