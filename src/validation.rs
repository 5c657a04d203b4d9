//! Input validation for distribution problems.
//!
//! Checks structural integrity of the process set and the processor
//! pool before distribution. Detects:
//! - Non-positive processor counts
//! - Processor counts above the configured pool limit
//! - Duplicate process IDs
//! - Non-finite arrival or burst times
//! - Negative arrival times
//! - Non-positive burst times
//!
//! All issues are collected; validation does not stop at the first one.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The processor pool is empty, negative, or above the pool limit.
    InvalidProcessorCount,
    /// Two processes share the same ID.
    DuplicateId,
    /// An arrival or burst time is NaN or infinite.
    NonFiniteTime,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative processing time.
    NonPositiveBurst,
    /// A synthetic generator range is empty or out of domain.
    InvalidGeneratorRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the processor count alone.
pub fn validate_processor_count(num_processors: i64) -> ValidationResult {
    if num_processors < 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidProcessorCount,
            format!("Processor count must be at least 1, got {num_processors}"),
        )]);
    }
    Ok(())
}

/// Validates the processor count against an upper pool limit.
///
/// The working state holds one entry per processor, so the limit bounds
/// the memory a single call may request.
pub fn validate_processor_limit(num_processors: i64, max_processors: usize) -> ValidationResult {
    let max = i64::try_from(max_processors).unwrap_or(i64::MAX);
    if num_processors > max {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidProcessorCount,
            format!("Processor count {num_processors} exceeds the limit of {max_processors}"),
        )]);
    }
    Ok(())
}

/// Validates the input data for a distribution problem.
///
/// Checks:
/// 1. At least one processor
/// 2. No duplicate process IDs
/// 3. Arrival and burst times are finite
/// 4. Arrival times are non-negative
/// 5. Burst times are strictly positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], num_processors: i64) -> ValidationResult {
    let mut errors = match validate_processor_count(num_processors) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if !p.arrival_time.is_finite() || !p.burst_time.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteTime,
                format!(
                    "Process {} has non-finite timing (arrival {}, burst {})",
                    p.id, p.arrival_time, p.burst_time
                ),
            ));
            continue;
        }

        if p.arrival_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} arrives before t=0 ({})",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time ({})",
                    p.id, p.burst_time
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
