//! Synthetic process generation.
//!
//! Produces well-formed random process sets for demos, benchmarks and
//! tests. Default ranges:
//!
//! | Field | Range |
//! |-------|-------|
//! | arrival_time | `[0, 10)` |
//! | burst_time | `[1, 5)` |
//! | priority | `[1, 10]` |
//!
//! IDs are assigned `0..n` in generation order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AllocationError;
use crate::models::{Process, ProcessId};
use crate::validation::{ValidationError, ValidationErrorKind};
use crate::wire::{DistributeRequest, DistributeResponse};

/// Random process generator.
///
/// # Example
///
/// ```
/// use u_distribute::generate::ProcessGenerator;
///
/// let processes = ProcessGenerator::new()
///     .with_priority_range(1, 3)
///     .generate_seeded(5, 42)
///     .unwrap();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=3).contains(&p.priority)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessGenerator {
    /// Half-open arrival time range `[min, max)`.
    pub arrival_range: (f64, f64),
    /// Half-open burst time range `[min, max)`.
    pub burst_range: (f64, f64),
    /// Inclusive priority range `[min, max]`.
    pub priority_range: (i32, i32),
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self {
            arrival_range: (0.0, 10.0),
            burst_range: (1.0, 5.0),
            priority_range: (1, 10),
        }
    }
}

impl ProcessGenerator {
    /// Creates a generator with the default ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival time range `[min, max)`.
    pub fn with_arrival_range(mut self, min: f64, max: f64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the burst time range `[min, max)`.
    pub fn with_burst_range(mut self, min: f64, max: f64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the priority range `[min, max]`.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    /// Checks that every range is non-empty and yields valid processes.
    pub fn validate(&self) -> Result<(), AllocationError> {
        let mut issues = Vec::new();
        let (a_min, a_max) = self.arrival_range;
        let (b_min, b_max) = self.burst_range;
        let (p_min, p_max) = self.priority_range;

        if !(a_min.is_finite() && a_max.is_finite() && 0.0 <= a_min && a_min < a_max) {
            issues.push(range_error(format!(
                "Arrival range [{a_min}, {a_max}) must be finite, non-empty and start at or after 0"
            )));
        }
        if !(b_min.is_finite() && b_max.is_finite() && 0.0 < b_min && b_min < b_max) {
            issues.push(range_error(format!(
                "Burst range [{b_min}, {b_max}) must be finite, non-empty and strictly positive"
            )));
        }
        if p_min > p_max {
            issues.push(range_error(format!(
                "Priority range [{p_min}, {p_max}] is empty"
            )));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues.into())
        }
    }

    /// Generates `count` processes with IDs `0..count`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Process>, AllocationError> {
        self.validate()?;
        let processes = (0..count as ProcessId)
            .map(|id| Process {
                id,
                arrival_time: rng.random_range(self.arrival_range.0..self.arrival_range.1),
                burst_time: rng.random_range(self.burst_range.0..self.burst_range.1),
                priority: rng.random_range(self.priority_range.0..=self.priority_range.1),
            })
            .collect();
        debug!(count, "generated synthetic processes");
        Ok(processes)
    }

    /// Generates `count` processes from a deterministic seed.
    pub fn generate_seeded(&self, count: usize, seed: u64) -> Result<Vec<Process>, AllocationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(count, &mut rng)
    }
}

fn range_error(message: String) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidGeneratorRange, message)
}

/// A generated system state together with its distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestData {
    /// Generated request.
    pub system_state: DistributeRequest,
    /// Result of distributing the request.
    pub allocation_result: DistributeResponse,
}

/// Generates a random system state and distributes it.
///
/// The generated request goes through the same
/// [`DistributeRequest::execute`] path as caller-supplied requests.
pub fn generate_test_data<R: Rng + ?Sized>(
    num_processes: usize,
    num_processors: i64,
    rng: &mut R,
) -> Result<TestData, AllocationError> {
    let processes = ProcessGenerator::new().generate(num_processes, rng)?;
    let system_state = DistributeRequest::new(processes, num_processors);
    let allocation_result = system_state.execute()?;
    Ok(TestData {
        system_state,
        allocation_result,
    })
}
