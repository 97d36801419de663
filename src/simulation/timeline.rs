//! Forward-pass simulation of a sequenced two-stage line.
//!
//! # Algorithm
//!
//! One pass over the sequence with four running figures:
//! - `run_time`: cumulative manufacture time (end of the current unit on
//!   the manufacture stage)
//! - `idle_time`: cumulative assembly idle time, never decreasing
//! - `assemble_time`: cumulative assembly time
//! - `lag`: how long the current unit waits for assembly, reset each step
//!
//! Per task: `run_time += m`, then `diff = run_time - (idle_time +
//! assemble_time)`. A positive `diff` is assembly idle time; otherwise
//! `lag = -diff`. Finally `assemble_time += a`.
//!
//! Production time is `run_time + lag + a_last`. This equals the
//! completion time `C_n` of the recurrence
//! `C_i = max(run_time_i, C_{i-1}) + a_i`.
//!
//! # Complexity
//! O(n).

use log::debug;

use crate::error::{Error, Result};
use crate::models::{ScheduleResult, Sequence, Task, Timeline, TimelineEntry};

#[derive(Debug, Default)]
struct LineState {
    run_time: i64,
    idle_time: i64,
    assemble_time: i64,
    lag: i64,
}

/// What one step did to the line.
struct Step {
    manufacture_start: i64,
    assemble_start: i64,
    assemble_end: i64,
    idle_added: i64,
}

impl LineState {
    /// Advances the line by one task.
    ///
    /// Every running figure stays within `i64`; a task whose durations
    /// would push one past it yields [`Error::DurationOverflow`].
    fn step(&mut self, task: &Task) -> Result<Step> {
        let overflow = || Error::DurationOverflow { task_id: task.id() };

        let manufacture_start = self.run_time;
        self.run_time = self
            .run_time
            .checked_add(task.manufacture_time())
            .ok_or_else(overflow)?;

        // Both operands are non-negative, so the subtraction cannot overflow.
        let assembly_ready = self
            .idle_time
            .checked_add(self.assemble_time)
            .ok_or_else(overflow)?;
        let diff = self.run_time - assembly_ready;
        let idle_added = if diff > 0 {
            self.idle_time += diff;
            self.lag = 0;
            diff
        } else {
            self.lag = -diff;
            0
        };

        self.assemble_time = self
            .assemble_time
            .checked_add(task.assemble_time())
            .ok_or_else(overflow)?;

        let assemble_start = self.run_time + self.lag;
        let assemble_end = assemble_start
            .checked_add(task.assemble_time())
            .ok_or_else(overflow)?;

        Ok(Step {
            manufacture_start,
            assemble_start,
            assemble_end,
            idle_added,
        })
    }
}

/// Simulates a sequence and returns its totals.
///
/// # Errors
/// - [`Error::EmptyTaskSet`] if the sequence has no tasks.
/// - [`Error::DurationOverflow`] if a running total exceeds `i64::MAX`.
pub fn simulate(sequence: &Sequence) -> Result<ScheduleResult> {
    let last = sequence.last().ok_or(Error::EmptyTaskSet)?;

    let mut state = LineState::default();
    let mut job_sequence = Vec::with_capacity(sequence.len());
    for task in sequence {
        job_sequence.push(task.id());
        state.step(task)?;
    }

    let total_time = state
        .run_time
        .checked_add(state.lag)
        .and_then(|t| t.checked_add(last.assemble_time()))
        .ok_or(Error::DurationOverflow { task_id: last.id() })?;
    debug!(
        "Sequence list: {:?}, Idle: {}, Prod Time: {}",
        job_sequence, state.idle_time, total_time
    );

    Ok(ScheduleResult::new(job_sequence, total_time, state.idle_time))
}

/// Simulates a sequence, recording each task's stage intervals.
///
/// # Errors
/// - [`Error::EmptyTaskSet`] if the sequence has no tasks.
/// - [`Error::DurationOverflow`] if a running total exceeds `i64::MAX`.
pub fn trace(sequence: &Sequence) -> Result<Timeline> {
    if sequence.is_empty() {
        return Err(Error::EmptyTaskSet);
    }

    let mut state = LineState::default();
    let mut timeline = Timeline::new();
    for task in sequence {
        let step = state.step(task)?;
        timeline.push(TimelineEntry {
            task_id: task.id(),
            manufacture_start: step.manufacture_start,
            manufacture_end: state.run_time,
            assemble_start: step.assemble_start,
            assemble_end: step.assemble_end,
            idle_before: step.idle_added,
            lag: state.lag,
            cumulative_idle: state.idle_time,
        });
    }

    Ok(timeline)
}
