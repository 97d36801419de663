//! Sequencer: orders a task set by a sequencing rule.
//!
//! # Complexity
//! O(n log n) comparisons. `slice::sort_by` is a stable merge-based sort,
//! so tasks the rule ties keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;

use super::rules::ManufactureFirst;
use super::SequencingRule;
use crate::models::{Sequence, Task};

/// Orders tasks into a [`Sequence`].
///
/// # Example
/// ```
/// use u_flowshop::models::Task;
/// use u_flowshop::sequencing::Sequencer;
///
/// let tasks = vec![Task::new(1, 5, 2), Task::new(2, 5, 9)];
/// let sequence = Sequencer::new().sequence(&tasks);
/// assert_eq!(sequence.ids(), vec![2, 1]);
/// ```
#[derive(Clone)]
pub struct Sequencer {
    rule: Arc<dyn SequencingRule>,
}

impl Sequencer {
    /// Creates a sequencer using [`ManufactureFirst`].
    pub fn new() -> Self {
        Self {
            rule: Arc::new(ManufactureFirst),
        }
    }

    /// Replaces the sequencing rule.
    pub fn with_rule<R: SequencingRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    /// The active rule.
    pub fn rule(&self) -> &dyn SequencingRule {
        self.rule.as_ref()
    }

    /// Orders a copy of `tasks`. The input is left untouched.
    pub fn sequence(&self, tasks: &[Task]) -> Sequence {
        let mut ordered = tasks.to_vec();
        if ordered.len() > 1 {
            ordered.sort_by(|a, b| self.rule.compare(a, b));
        }
        debug!(
            "Sorted {} tasks by {}: {:?}",
            ordered.len(),
            self.rule.name(),
            ordered.iter().map(Task::id).collect::<Vec<_>>()
        );
        Sequence::from_tasks(ordered)
    }

    /// Whether no adjacent pair in `tasks` is inverted under the rule.
    pub fn is_ordered(&self, tasks: &[Task]) -> bool {
        tasks
            .windows(2)
            .all(|pair| self.rule.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("rule", &self.rule.name())
            .finish()
    }
}
