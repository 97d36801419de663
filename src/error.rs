//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading, scheduling, or writing a task set.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Task source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid integer '{value}'")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Task {task_id}: durations must be positive (manufacture={manufacture_time}, assemble={assemble_time})")]
    InvalidDuration {
        task_id: i64,
        manufacture_time: i64,
        assemble_time: i64,
    },

    #[error("No tasks to schedule")]
    EmptyTaskSet,

    #[error("Task {task_id}: production time exceeds the representable range")]
    DurationOverflow { task_id: i64 },

    #[error("Invalid task set: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    #[error("Failed to write result to {}: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
