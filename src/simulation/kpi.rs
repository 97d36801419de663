//! Schedule quality metrics (KPIs).
//!
//! Computes line performance indicators from a traced timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | End of the last assembly operation |
//! | Assembly Idle | Time the assembly stage waited for units |
//! | Manufacture Busy | Sum of manufacture durations |
//! | Assembly Busy | Sum of assembly durations |
//! | Utilization | Busy / makespan, per stage |
//! | Max Backlog | Longest wait of a unit between the stages |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Timeline;

/// Line performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan: end of the last assembly operation.
    pub makespan: i64,
    /// Total assembly idle time.
    pub assembly_idle: i64,
    /// Total manufacture processing time.
    pub manufacture_busy: i64,
    /// Total assembly processing time.
    pub assembly_busy: i64,
    /// Manufacture busy / makespan (0.0..1.0).
    pub manufacture_utilization: f64,
    /// Assembly busy / makespan (0.0..1.0).
    pub assembly_utilization: f64,
    /// Largest lag of any unit between the stages.
    pub max_backlog: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a timeline.
    pub fn calculate(timeline: &Timeline) -> Self {
        let makespan = timeline.makespan();
        let manufacture_busy: i64 = timeline.entries.iter().map(|e| e.manufacture_duration()).sum();
        let assembly_busy: i64 = timeline.entries.iter().map(|e| e.assemble_duration()).sum();
        let max_backlog = timeline.entries.iter().map(|e| e.lag).max().unwrap_or(0);

        let utilization = |busy: i64| {
            if makespan <= 0 {
                0.0
            } else {
                busy as f64 / makespan as f64
            }
        };

        Self {
            makespan,
            assembly_idle: timeline.total_idle(),
            manufacture_busy,
            assembly_busy,
            manufacture_utilization: utilization(manufacture_busy),
            assembly_utilization: utilization(assembly_busy),
            max_backlog,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_idle: i64, min_assembly_utilization: f64) -> bool {
        self.assembly_idle <= max_idle && self.assembly_utilization >= min_assembly_utilization
    }
}
