//! Task (job) model.
//!
//! A task is one unit of product that passes through both stages of the
//! line: first the manufacture stage, then the assembly stage.
//!
//! # Reference
//! Johnson (1954), "Optimal two- and three-stage production schedules
//! with setup times included"

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A task to be sequenced on the two-stage line.
///
/// Immutable once built: fields are only readable through accessors.
///
/// # Time Representation
/// Durations are abstract integer time units. The consumer decides what
/// a unit means (minutes, shifts, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: i64,
    manufacture_time: i64,
    assemble_time: i64,
}

impl Task {
    /// Creates a task without checking durations.
    ///
    /// Use [`Task::try_new`] for untrusted input, or run the task set
    /// through [`crate::validation::validate_tasks`].
    pub const fn new(id: i64, manufacture_time: i64, assemble_time: i64) -> Self {
        Self {
            id,
            manufacture_time,
            assemble_time,
        }
    }

    /// Creates a task, rejecting non-positive durations.
    pub fn try_new(id: i64, manufacture_time: i64, assemble_time: i64) -> Result<Self> {
        if manufacture_time <= 0 || assemble_time <= 0 {
            return Err(Error::InvalidDuration {
                task_id: id,
                manufacture_time,
                assemble_time,
            });
        }
        Ok(Self::new(id, manufacture_time, assemble_time))
    }

    /// Task identifier.
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Time required on the manufacture stage.
    #[inline]
    pub fn manufacture_time(&self) -> i64 {
        self.manufacture_time
    }

    /// Time required on the assembly stage.
    #[inline]
    pub fn assemble_time(&self) -> i64 {
        self.assemble_time
    }

    /// Total work across both stages. `None` if the sum exceeds `i64::MAX`.
    pub fn total_work(&self) -> Option<i64> {
        self.manufacture_time.checked_add(self.assemble_time)
    }
}

/// Wire form of a [`Task`]; deserialized tasks go through [`Task::try_new`].
#[derive(Deserialize)]
struct TaskRecord {
    id: i64,
    manufacture_time: i64,
    assemble_time: i64,
}

impl TryFrom<TaskRecord> for Task {
    type Error = Error;

    fn try_from(record: TaskRecord) -> Result<Self> {
        Task::try_new(record.id, record.manufacture_time, record.assemble_time)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task({}, m={}, a={})",
            self.id, self.manufacture_time, self.assemble_time
        )
    }
}
