//! File-based task source and result sink.
//!
//! The scheduling core never touches the filesystem; these functions sit
//! on either side of it.

mod sink;
mod source;

pub use sink::{render, write_result};
pub use source::{load_tasks, parse_record, parse_tasks, DEFAULT_DELIMITER};
