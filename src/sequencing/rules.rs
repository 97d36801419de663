//! Built-in sequencing rules.
//!
//! - **MFT** ([`ManufactureFirst`]): shortest manufacture time first,
//!   longest assembly first among ties. The default rule.
//! - **JOHNSON** ([`Johnson`]): Johnson's two-machine rule, which
//!   minimizes makespan for F2 || C_max.
//!
//! # References
//! - Johnson (1954), "Optimal two- and three-stage production schedules"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use std::cmp::Ordering;

use super::SequencingRule;
use crate::models::Task;

/// Manufacture-First rule.
///
/// Orders by manufacture time ascending so the assembly stage is fed as
/// early as possible. Among equal manufacture times the longer assembly
/// job goes first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManufactureFirst;

impl SequencingRule for ManufactureFirst {
    fn name(&self) -> &'static str {
        "MFT"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.manufacture_time()
            .cmp(&b.manufacture_time())
            .then_with(|| b.assemble_time().cmp(&a.assemble_time()))
    }

    fn description(&self) -> &'static str {
        "Shortest manufacture time first, longest assembly on ties"
    }
}

/// Johnson's rule.
///
/// Splits tasks into two groups:
/// 1. `manufacture < assemble`: placed first, manufacture time ascending.
/// 2. `manufacture >= assemble`: placed last, assemble time descending.
///
/// # Reference
/// Johnson (1954), optimal for makespan on two machines in series.
#[derive(Debug, Clone, Copy, Default)]
pub struct Johnson;

impl Johnson {
    fn leads(task: &Task) -> bool {
        task.manufacture_time() < task.assemble_time()
    }
}

impl SequencingRule for Johnson {
    fn name(&self) -> &'static str {
        "JOHNSON"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match (Self::leads(a), Self::leads(b)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => a.manufacture_time().cmp(&b.manufacture_time()),
            (false, false) => b.assemble_time().cmp(&a.assemble_time()),
        }
    }

    fn description(&self) -> &'static str {
        "Johnson's two-machine rule"
    }
}
