//! Schedule (solution) models.
//!
//! [`ScheduleResult`] is the terminal output of a run: the chosen order
//! and its two headline figures. [`Timeline`] is the detailed view of the
//! same run, with explicit wall-clock intervals on both stages.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! (Flow Shops)

use serde::{Deserialize, Serialize};

/// Result of scheduling a task set.
///
/// Built once by the simulator; fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    job_sequence: Vec<i64>,
    total_production_time: i64,
    total_idle_time: i64,
}

impl ScheduleResult {
    /// Creates a result.
    pub fn new(job_sequence: Vec<i64>, total_production_time: i64, total_idle_time: i64) -> Self {
        Self {
            job_sequence,
            total_production_time,
            total_idle_time,
        }
    }

    /// Task ids in processing order.
    pub fn job_sequence(&self) -> &[i64] {
        &self.job_sequence
    }

    /// Time at which the last unit leaves the assembly stage.
    pub fn total_production_time(&self) -> i64 {
        self.total_production_time
    }

    /// Total time the assembly stage waited for a manufactured unit.
    pub fn total_idle_time(&self) -> i64 {
        self.total_idle_time
    }

    /// Number of scheduled tasks.
    pub fn task_count(&self) -> usize {
        self.job_sequence.len()
    }
}

/// One task's passage through the line.
///
/// Intervals are half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Task id.
    pub task_id: i64,
    /// Manufacture stage start.
    pub manufacture_start: i64,
    /// Manufacture stage end.
    pub manufacture_end: i64,
    /// Assembly stage start.
    pub assemble_start: i64,
    /// Assembly stage end.
    pub assemble_end: i64,
    /// Assembly idle time immediately before this task.
    pub idle_before: i64,
    /// Backlog: how long the manufactured unit waited for assembly.
    pub lag: i64,
    /// Idle time accumulated up to and including this task.
    pub cumulative_idle: i64,
}

impl TimelineEntry {
    /// Manufacture duration.
    #[inline]
    pub fn manufacture_duration(&self) -> i64 {
        self.manufacture_end - self.manufacture_start
    }

    /// Assembly duration.
    #[inline]
    pub fn assemble_duration(&self) -> i64 {
        self.assemble_end - self.assemble_start
    }
}

/// Per-task timeline of a sequenced run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in processing order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Makespan: end of the last assembly operation.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.assemble_end).max().unwrap_or(0)
    }

    /// Total assembly idle time.
    pub fn total_idle(&self) -> i64 {
        self.entries.iter().map(|e| e.idle_before).sum()
    }

    /// Finds the entry for a task.
    pub fn entry_for_task(&self, task_id: i64) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.task_id == task_id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
