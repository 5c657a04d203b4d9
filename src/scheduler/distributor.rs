//! Priority-greedy workload distributor.
//!
//! # Algorithm
//!
//! 1. Validate the request; any issue rejects the whole call.
//! 2. Order processes by priority (descending) with an explicit tie-break.
//! 3. Append each process to the least-loaded processor queue.
//! 4. Run every queue as a sequential timeline to derive waiting and
//!    turnaround times.
//! 5. Aggregate pool utilization over the makespan.
//!
//! # Complexity
//! O(n log n + n * p) where n=processes, p=processors.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5: Parallel Machine Models

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::balance::{assign, priority_order, TieBreak};
use super::kpi::pool_utilization;
use super::timeline::run_pool;
use crate::error::AllocationError;
use crate::models::{Allocation, Process, ProcessorState};
use crate::validation::{validate_input, validate_processor_limit};

/// Default upper bound on the processor pool size.
pub const DEFAULT_MAX_PROCESSORS: usize = 4096;

/// Priority-greedy workload distributor.
///
/// Stateless between calls: all working state (loads, queues, clocks)
/// lives on the stack of [`Distributor::distribute`], so one instance
/// can serve concurrent callers.
///
/// # Example
///
/// ```
/// use u_distribute::models::Process;
/// use u_distribute::scheduler::{Distributor, TieBreak};
///
/// let processes = vec![
///     Process::new(0, 3.0).with_priority(5),
///     Process::new(1, 2.0).with_priority(9),
///     Process::new(2, 1.0).with_priority(5).with_arrival_time(1.0),
/// ];
///
/// let distributor = Distributor::new().with_tie_break(TieBreak::InputOrder);
/// let allocation = distributor.distribute(&processes, 2).unwrap();
///
/// // Highest priority goes first, onto processor 0
/// assert_eq!(allocation.queue(0)[0].id, 1);
/// assert_eq!(allocation.processor_of(0), Some(1));
/// assert_eq!(allocation.waiting_times.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distributor {
    tie_break: TieBreak,
    max_processors: usize,
}

impl Default for Distributor {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            max_processors: DEFAULT_MAX_PROCESSORS,
        }
    }
}

impl Distributor {
    /// Creates a distributor that breaks priority ties by input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secondary ordering key for equal priorities.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the largest accepted processor count.
    pub fn with_max_processors(mut self, max_processors: usize) -> Self {
        self.max_processors = max_processors;
        self
    }

    /// Configured tie-break rule.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Largest accepted processor count.
    pub fn max_processors(&self) -> usize {
        self.max_processors
    }

    /// Distributes processes over `num_processors` processors.
    ///
    /// # Errors
    /// [`AllocationError::InvalidConfiguration`] if `num_processors` is
    /// zero or above [`Distributor::max_processors`], or any process has
    /// a duplicate ID, a negative or non-finite arrival time, or a
    /// non-positive or non-finite burst time.
    pub fn distribute(
        &self,
        processes: &[Process],
        num_processors: usize,
    ) -> Result<Allocation, AllocationError> {
        let requested = i64::try_from(num_processors).unwrap_or(i64::MAX);
        let mut issues = validate_input(processes, requested).err().unwrap_or_default();
        if let Err(limit) = validate_processor_limit(requested, self.max_processors) {
            issues.extend(limit);
        }
        if !issues.is_empty() {
            warn!(
                issues = issues.len(),
                processes = processes.len(),
                processors = num_processors,
                "rejected distribution request"
            );
            return Err(issues.into());
        }

        debug!(
            processes = processes.len(),
            processors = num_processors,
            tie_break = ?self.tie_break,
            "distributing"
        );

        let order = priority_order(processes, self.tie_break);
        let mut pool = ProcessorState::pool(num_processors);
        assign(processes, &order, &mut pool);
        let slots = run_pool(&mut pool);

        let makespan = pool.iter().map(|s| s.current_time).fold(0.0, f64::max);
        let total_processing_time: f64 = processes.iter().map(|p| p.burst_time).sum();
        let utilization = pool_utilization(total_processing_time, num_processors, makespan);

        let waiting_times = slots
            .iter()
            .map(|s| (s.process_id, s.waiting_time()))
            .collect();
        let turnaround_times = slots
            .iter()
            .map(|s| (s.process_id, s.turnaround_time()))
            .collect();

        debug!(makespan, utilization, "distribution complete");

        Ok(Allocation {
            num_processors,
            processor_allocations: pool.into_iter().map(|s| s.queue).collect(),
            slots,
            waiting_times,
            turnaround_times,
            utilization,
            makespan,
        })
    }
}

/// Distributes processes with the default configuration.
///
/// Shorthand for `Distributor::new().distribute(processes, num_processors)`.
pub fn distribute(
    processes: &[Process],
    num_processors: usize,
) -> Result<Allocation, AllocationError> {
    Distributor::new().distribute(processes, num_processors)
}
