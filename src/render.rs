//! Text rendering of simulation history.
//!
//! The history table has one column per step and one row per frame, plus a
//! fault row when required pages are tracked:
//!
//! ```text
//! Page  | 1  2  3  4
//! ------+------------
//! F0    | 1* 1  1  4*
//! F1    | -  2* 2  2
//! F2    | -  -  3* 3
//! Fault | F  F  F
//! ```
//!
//! `*` marks the frame written on that step.

use std::fmt;

use crate::simulation::{SimulationStep, SimulationTrace, StepOutcome};

const EMPTY_SLOT: &str = "-";
const FAULT_MARK: &str = "F";

/// Accumulated history of a run, renderable as a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryTable {
    frame_count: usize,
    tracks_faults: bool,
    steps: Vec<SimulationStep>,
}

impl HistoryTable {
    /// Create an empty table for `frame_count` frames.
    pub fn new(frame_count: usize, tracks_faults: bool) -> Self {
        Self {
            frame_count,
            tracks_faults,
            steps: Vec::new(),
        }
    }

    /// Build a table from a drained run.
    pub fn from_trace(trace: &SimulationTrace) -> Self {
        Self {
            frame_count: trace.frame_count,
            tracks_faults: trace.tracks_faults,
            steps: trace.steps.clone(),
        }
    }

    /// Append a step as a new column.
    pub fn push(&mut self, step: SimulationStep) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn cell_width(&self) -> usize {
        self.steps
            .iter()
            .flat_map(|s| {
                std::iter::once(Some(s.page))
                    .chain(s.frames.iter().copied())
                    .flatten()
            })
            .map(|p| p.to_string().len())
            .max()
            .unwrap_or(1)
    }

    fn label_width(&self) -> usize {
        let frame_label = format!("F{}", self.frame_count.saturating_sub(1)).len();
        frame_label.max(if self.tracks_faults { 5 } else { 4 })
    }
}

impl fmt::Display for HistoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.cell_width();
        let lw = self.label_width();

        let row = |label: &str, cells: Vec<String>| -> String {
            let mut line = format!("{:<lw$} |", label, lw = lw);
            for cell in cells {
                line.push(' ');
                line.push_str(&cell);
            }
            line.trim_end().to_string()
        };
        let cell = |text: &str, marked: bool| -> String {
            format!("{:>w$}{}", text, if marked { '*' } else { ' ' }, w = w)
        };

        let header = self
            .steps
            .iter()
            .map(|s| cell(&s.page.to_string(), false))
            .collect();
        writeln!(f, "{}", row("Page", header))?;
        writeln!(
            f,
            "{}-+{}",
            "-".repeat(lw),
            "-".repeat(self.steps.len() * (w + 2))
        )?;

        for slot in 0..self.frame_count {
            let cells = self
                .steps
                .iter()
                .map(|s| {
                    let text = match s.frames.get(slot).copied().flatten() {
                        Some(page) => page.to_string(),
                        None => EMPTY_SLOT.to_string(),
                    };
                    let written = !s.is_hit() && s.frame().0 == slot;
                    cell(&text, written)
                })
                .collect();
            writeln!(f, "{}", row(&format!("F{}", slot), cells))?;
        }

        if self.tracks_faults {
            let cells = self
                .steps
                .iter()
                .map(|s| cell(if s.fault { FAULT_MARK } else { "" }, false))
                .collect();
            writeln!(f, "{}", row("Fault", cells))?;
        }

        Ok(())
    }
}

/// One-line description of a step, for animated playback.
///
/// ```
/// use fifosim::render::render_step;
/// use fifosim::{Simulation, SimulationRequest};
///
/// let mut sim = Simulation::new(SimulationRequest::new([7u32], 3)).unwrap();
/// let step = sim.next().unwrap();
/// assert_eq!(render_step(&step, false), "Step 1: page 7 loaded into F0  [7 - -]");
/// ```
pub fn render_step(step: &SimulationStep, tracks_faults: bool) -> String {
    let action = match step.outcome {
        StepOutcome::Hit { frame } => format!("hit in {}", frame),
        StepOutcome::Loaded { frame } => format!("loaded into {}", frame),
        StepOutcome::Replaced { frame, evicted } => {
            format!("replaced {} in {}", evicted, frame)
        }
    };
    let frames = step
        .frames
        .iter()
        .map(|s| s.map_or_else(|| EMPTY_SLOT.to_string(), |p| p.to_string()))
        .collect::<Vec<_>>()
        .join(" ");

    let mut line = format!(
        "Step {}: page {} {}  [{}]",
        step.index, step.page, action, frames
    );
    if tracks_faults && step.fault {
        line.push_str("  FAULT");
    }
    line
}
