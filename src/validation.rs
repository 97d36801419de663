//! Input validation for flow-shop task sets.
//!
//! Checks structural integrity of a task set before sequencing. Detects:
//! - Duplicate task IDs
//! - Non-positive manufacture or assembly durations
//!
//! All problems are collected, not just the first one. Emptiness is not a
//! validation problem: [`crate::FlowShopScheduler`] reports it as
//! [`crate::Error::EmptyTaskSet`].

use crate::models::Task;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has a zero or negative stage duration.
    NonPositiveDuration,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task set.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. Every manufacture and assembly time is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for task in tasks {
        if !ids.insert(task.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id()),
            ));
        }

        if task.manufacture_time() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Task {} has non-positive manufacture time {}",
                    task.id(),
                    task.manufacture_time()
                ),
            ));
        }

        if task.assemble_time() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Task {} has non-positive assemble time {}",
                    task.id(),
                    task.assemble_time()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
