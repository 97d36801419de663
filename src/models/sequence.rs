//! Sequence model.
//!
//! A sequence is the processing order of tasks through the line. It is
//! produced by a [`crate::sequencing::Sequencer`] and consumed read-only
//! by the simulator.

use serde::{Deserialize, Serialize};

use super::Task;

/// An ordered permutation of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    tasks: Vec<Task>,
}

impl Sequence {
    /// Wraps tasks in the given processing order.
    ///
    /// The order is taken as-is. This is how a hand-picked order is
    /// evaluated against the one a sequencer proposes.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Tasks in processing order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task ids in processing order.
    pub fn ids(&self) -> Vec<i64> {
        self.tasks.iter().map(Task::id).collect()
    }

    /// The task processed last, if any.
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the sequence holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Consumes the sequence, returning the ordered tasks.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
