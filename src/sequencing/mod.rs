//! Sequencing rules and the sequencer.
//!
//! A sequencing rule is a total order over tasks. The [`Sequencer`]
//! applies one with a stable sort, so tasks the rule considers equal keep
//! their input order and identical inputs always give identical sequences.
//!
//! # Usage
//!
//! ```
//! use u_flowshop::models::Task;
//! use u_flowshop::sequencing::{rules, Sequencer};
//!
//! let tasks = vec![Task::new(1, 5, 2), Task::new(2, 1, 6), Task::new(3, 9, 3)];
//! let sequence = Sequencer::new().with_rule(rules::ManufactureFirst).sequence(&tasks);
//! assert_eq!(sequence.ids(), vec![2, 1, 3]);
//! ```
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

pub mod rules;
mod sequencer;

pub use sequencer::Sequencer;

use crate::models::Task;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A total order over tasks deciding which enters the line first.
///
/// # Ordering Convention
/// `Ordering::Less` means `a` is processed before `b`. Returning
/// `Ordering::Equal` leaves the pair in input order.
pub trait SequencingRule: Send + Sync + Debug {
    /// Rule name (e.g., "MFT", "JOHNSON").
    fn name(&self) -> &'static str;

    /// Compares two tasks.
    fn compare(&self, a: &Task, b: &Task) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
