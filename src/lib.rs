//! Two-stage flow-shop sequencing for the U-Engine ecosystem.
//!
//! Orders tasks through a manufacture stage followed by an assembly stage
//! so the assembly stage waits as little as possible, and reports the
//! resulting production time and assembly idle time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Sequence`, `ScheduleResult`, `Timeline`
//! - **`sequencing`**: `SequencingRule` trait, built-in rules, `Sequencer`
//! - **`simulation`**: Forward-pass simulation and KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, durations)
//! - **`io`**: Delimited-text task source and result sink
//! - **`cli`**: Command-line front end
//!
//! # Example
//!
//! ```
//! use u_flowshop::models::Task;
//! use u_flowshop::sequencing::Sequencer;
//! use u_flowshop::simulation::simulate;
//!
//! let tasks = vec![Task::new(1, 4, 7)];
//! let result = simulate(&Sequencer::new().sequence(&tasks)).unwrap();
//! assert_eq!(result.total_production_time(), 11);
//! assert_eq!(result.total_idle_time(), 4);
//! ```
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod cli;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod sequencing;
pub mod simulation;
pub mod validation;

pub use error::{Error, Result};
pub use scheduler::{FlowShopScheduler, SchedulePlan};
