//! Flow-shop domain models.
//!
//! Provides the data types for a two-stage (manufacture → assemble)
//! production line and the results of scheduling it.
//!
//! # Domain Mappings
//!
//! | u-flowshop | Electronics | Print shop | Kitchen |
//! |------------|-------------|------------|---------|
//! | Task | Mobile unit | Print job | Order |
//! | Manufacture stage | Part fabrication | Printing | Prep |
//! | Assembly stage | Final assembly | Binding | Plating |
//! | Sequence | Production order | Job queue | Ticket order |

mod schedule;
mod sequence;
mod task;

pub use schedule::{ScheduleResult, Timeline, TimelineEntry};
pub use sequence::Sequence;
pub use task::Task;
