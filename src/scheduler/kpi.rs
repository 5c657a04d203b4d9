//! Allocation quality metrics (KPIs).
//!
//! Computes standard performance indicators from a completed
//! allocation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time over all processors |
//! | Utilization | 100 * Σ burst / (processors * makespan), capped at 100 |
//! | Avg / Max Waiting | Mean and largest of max(0, start - arrival) |
//! | Avg Turnaround | Mean of max(0, completion - arrival) |
//! | Processor Utilization | Busy time / makespan per processor |
//! | Load Imbalance | Largest minus smallest assigned load |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Allocation;

/// Pool utilization in percent.
///
/// `0` when no processor time is available (no work, or zero
/// makespan). The result is capped at 100 to absorb floating-point
/// overshoot.
pub fn pool_utilization(total_processing_time: f64, num_processors: usize, makespan: f64) -> f64 {
    let total_available_time = num_processors as f64 * makespan;
    if total_available_time <= 0.0 {
        return 0.0;
    }
    (100.0 * total_processing_time / total_available_time).min(100.0)
}

/// Allocation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationKpi {
    /// Latest completion time.
    pub makespan: f64,
    /// Sum of burst times across all processes.
    pub total_processing_time: f64,
    /// Pool utilization in percent (0.0..=100.0).
    pub utilization: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Per-processor busy fraction (0.0..=1.0), indexed by processor.
    pub utilization_by_processor: Vec<f64>,
    /// Largest minus smallest assigned load.
    pub load_imbalance: f64,
}

impl AllocationKpi {
    /// Computes KPIs from an allocation.
    pub fn calculate(allocation: &Allocation) -> Self {
        let count = allocation.process_count();

        let total_processing_time: f64 = allocation
            .processor_allocations
            .iter()
            .flatten()
            .map(|p| p.burst_time)
            .sum();

        let total_waiting: f64 = allocation.waiting_times.values().sum();
        let max_waiting_time = allocation
            .waiting_times
            .values()
            .copied()
            .fold(0.0, f64::max);
        let total_turnaround: f64 = allocation.turnaround_times.values().sum();

        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (total_waiting / count as f64, total_turnaround / count as f64)
        };

        let utilization_by_processor = (0..allocation.num_processors)
            .map(|i| allocation.processor_utilization(i).unwrap_or(0.0))
            .collect();

        let loads = allocation.processor_loads();
        let load_imbalance = if loads.is_empty() {
            0.0
        } else {
            let max = loads.iter().copied().fold(f64::MIN, f64::max);
            let min = loads.iter().copied().fold(f64::MAX, f64::min);
            max - min
        };

        Self {
            makespan: allocation.makespan,
            total_processing_time,
            utilization: allocation.utilization,
            avg_waiting_time,
            max_waiting_time,
            avg_turnaround_time,
            utilization_by_processor,
            load_imbalance,
        }
    }

    /// Whether the allocation meets the given quality thresholds.
    ///
    /// `min_utilization` is in percent, like [`AllocationKpi::utilization`].
    pub fn meets_thresholds(&self, max_waiting: f64, min_utilization: f64) -> bool {
        self.max_waiting_time <= max_waiting && self.utilization >= min_utilization
    }
}
