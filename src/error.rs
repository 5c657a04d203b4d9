//! Error types for distribution.
//!
//! The engine raises a single error kind: a structurally invalid call.
//! It carries every validation issue that was found so the caller can
//! correct the request in one pass.

use crate::validation::ValidationError;

/// Errors returned by distribution operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocationError {
    /// The processor count or a process is malformed.
    #[error("invalid configuration: {}", summarize(.issues))]
    InvalidConfiguration {
        /// Every issue detected during validation.
        issues: Vec<ValidationError>,
    },
}

impl AllocationError {
    /// Issues behind this error.
    pub fn issues(&self) -> &[ValidationError] {
        match self {
            Self::InvalidConfiguration { issues } => issues,
        }
    }
}

impl From<Vec<ValidationError>> for AllocationError {
    fn from(issues: Vec<ValidationError>) -> Self {
        Self::InvalidConfiguration { issues }
    }
}

fn summarize(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
