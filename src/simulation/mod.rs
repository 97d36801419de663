//! Timeline simulation and KPI evaluation.
//!
//! [`simulate`] walks a sequence once and returns the production and
//! idle totals. [`trace`] performs the same pass and keeps the stage
//! intervals of every task. [`ScheduleKpi`] summarizes a trace.
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

mod kpi;
mod timeline;

pub use kpi::ScheduleKpi;
pub use timeline::{simulate, trace};
