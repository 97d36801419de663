//! End-to-end flow-shop scheduler.
//!
//! # Algorithm
//!
//! 1. Reject an empty task set.
//! 2. Validate the tasks (unique ids, positive durations).
//! 3. Order them with the configured [`Sequencer`].
//! 4. Simulate the sequence for totals and trace it for stage intervals.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{ScheduleResult, Sequence, Task, Timeline};
use crate::sequencing::Sequencer;
use crate::simulation::{simulate, trace, ScheduleKpi};
use crate::validation::validate_tasks;

/// Everything produced by one scheduling run.
#[derive(Debug, Clone)]
pub struct SchedulePlan {
    /// The chosen processing order.
    pub sequence: Sequence,
    /// Headline totals.
    pub result: ScheduleResult,
    /// Per-task stage intervals.
    pub timeline: Timeline,
    /// Quality metrics.
    pub kpi: ScheduleKpi,
}

/// Sequences and simulates a task set.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Task;
/// use u_flowshop::FlowShopScheduler;
///
/// let tasks = vec![Task::new(1, 5, 2), Task::new(2, 1, 6), Task::new(3, 9, 3)];
/// let plan = FlowShopScheduler::new().schedule(&tasks).unwrap();
/// assert_eq!(plan.result.job_sequence(), vec![2, 1, 3]);
/// assert_eq!(plan.result.total_production_time(), 18);
/// assert_eq!(plan.result.total_idle_time(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlowShopScheduler {
    sequencer: Sequencer,
}

impl FlowShopScheduler {
    /// Creates a scheduler with the default sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sequencer.
    pub fn with_sequencer(mut self, sequencer: Sequencer) -> Self {
        self.sequencer = sequencer;
        self
    }

    /// The configured sequencer.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Schedules `tasks`.
    ///
    /// # Errors
    /// - [`Error::EmptyTaskSet`] if `tasks` is empty.
    /// - [`Error::Validation`] if any task is invalid.
    /// - [`Error::DurationOverflow`] if production time exceeds `i64::MAX`.
    pub fn schedule(&self, tasks: &[Task]) -> Result<SchedulePlan> {
        if tasks.is_empty() {
            warn!("No tasks to schedule");
            return Err(Error::EmptyTaskSet);
        }
        validate_tasks(tasks).map_err(Error::Validation)?;

        let sequence = self.sequencer.sequence(tasks);
        let result = simulate(&sequence)?;
        let timeline = trace(&sequence)?;
        let kpi = ScheduleKpi::calculate(&timeline);
        debug!("KPI: {kpi:?}");

        Ok(SchedulePlan {
            sequence,
            result,
            timeline,
            kpi,
        })
    }
}
