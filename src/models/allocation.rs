//! Allocation (solution) model.
//!
//! An allocation is the complete outcome of distributing a process set
//! over a processor pool: the per-processor queues, the simulated
//! execution slot of every process, and the derived timing metrics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Process, ProcessId, ProcessorIndex};

/// Result of one distribution call.
///
/// Every input process appears in exactly one queue, exactly one slot,
/// and exactly once in each timing map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Size of the processor pool.
    pub num_processors: usize,
    /// Queue per processor, indexed by processor. Order = execution order.
    pub processor_allocations: Vec<Vec<Process>>,
    /// Simulated execution slots, grouped by processor in queue order.
    pub slots: Vec<ExecutionSlot>,
    /// Waiting time per process (≥ 0).
    pub waiting_times: BTreeMap<ProcessId, f64>,
    /// Turnaround time per process (≥ 0).
    pub turnaround_times: BTreeMap<ProcessId, f64>,
    /// Pool utilization in percent, `[0, 100]`.
    pub utilization: f64,
    /// Completion time of the last processor to finish.
    pub makespan: f64,
}

/// The simulated run of one process on its processor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSlot {
    /// Executed process.
    pub process_id: ProcessId,
    /// Processor the process was assigned to.
    pub processor: ProcessorIndex,
    /// Arrival time copied from the process.
    pub arrival_time: f64,
    /// Processing time copied from the process.
    pub burst_time: f64,
    /// Time execution began.
    pub start_time: f64,
    /// Time execution finished.
    pub completion_time: f64,
}

impl ExecutionSlot {
    /// Execution length. Taken from the burst rather than
    /// `completion - start`, which loses precision at large clock values.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.burst_time
    }

    /// Time spent ready but not running, clamped at zero.
    #[inline]
    pub fn waiting_time(&self) -> f64 {
        (self.start_time - self.arrival_time).max(0.0)
    }

    /// Time from arrival to completion, never less than the burst.
    #[inline]
    pub fn turnaround_time(&self) -> f64 {
        (self.completion_time - self.arrival_time).max(self.burst_time)
    }
}

impl Allocation {
    /// Creates an allocation with `num_processors` empty queues.
    pub fn empty(num_processors: usize) -> Self {
        Self {
            num_processors,
            processor_allocations: vec![Vec::new(); num_processors],
            ..Default::default()
        }
    }

    /// Number of allocated processes.
    pub fn process_count(&self) -> usize {
        self.slots.len()
    }

    /// Queue of a processor. Empty for an out-of-range index.
    pub fn queue(&self, processor: ProcessorIndex) -> &[Process] {
        self.processor_allocations
            .get(processor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Processor a process was assigned to.
    pub fn processor_of(&self, process_id: ProcessId) -> Option<ProcessorIndex> {
        self.slot_for_process(process_id).map(|s| s.processor)
    }

    /// Finds the execution slot of a process.
    pub fn slot_for_process(&self, process_id: ProcessId) -> Option<&ExecutionSlot> {
        self.slots.iter().find(|s| s.process_id == process_id)
    }

    /// Returns the execution slots of a processor in queue order.
    pub fn slots_for_processor(&self, processor: ProcessorIndex) -> Vec<&ExecutionSlot> {
        self.slots
            .iter()
            .filter(|s| s.processor == processor)
            .collect()
    }

    /// Assigned load (sum of burst times) of a processor.
    pub fn processor_load(&self, processor: ProcessorIndex) -> f64 {
        self.queue(processor).iter().map(|p| p.burst_time).sum()
    }

    /// Assigned loads of all processors, indexed by processor.
    pub fn processor_loads(&self) -> Vec<f64> {
        (0..self.num_processors)
            .map(|i| self.processor_load(i))
            .collect()
    }

    /// Completion time of a processor's last process (0 if idle).
    pub fn processor_completion(&self, processor: ProcessorIndex) -> f64 {
        self.slots_for_processor(processor)
            .last()
            .map(|s| s.completion_time)
            .unwrap_or(0.0)
    }

    /// Busy time of a processor divided by the makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn processor_utilization(&self, processor: ProcessorIndex) -> Option<f64> {
        if self.makespan <= 0.0 {
            return None;
        }
        let busy: f64 = self
            .slots_for_processor(processor)
            .iter()
            .map(|s| s.duration())
            .sum();
        Some((busy / self.makespan).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: ProcessId, processor: usize, arrival: f64, start: f64, end: f64) -> ExecutionSlot {
        ExecutionSlot {
            process_id: id,
            processor,
            arrival_time: arrival,
            burst_time: end - start,
            start_time: start,
            completion_time: end,
        }
    }

    fn sample() -> Allocation {
        let mut alloc = Allocation::empty(2);
        alloc.processor_allocations[0] = vec![Process::new(0, 4.0), Process::new(2, 2.0)];
        alloc.processor_allocations[1] = vec![Process::new(1, 3.0).with_arrival_time(1.0)];
        alloc.slots = vec![
            slot(0, 0, 0.0, 0.0, 4.0),
            slot(2, 0, 0.0, 4.0, 6.0),
            slot(1, 1, 1.0, 1.0, 4.0),
        ];
        alloc.makespan = 6.0;
        alloc
    }

    #[test]
    fn test_empty_allocation() {
        let alloc = Allocation::empty(4);
        assert_eq!(alloc.processor_allocations.len(), 4);
        assert!(alloc.processor_allocations.iter().all(Vec::is_empty));
        assert_eq!(alloc.process_count(), 0);
        assert!(alloc.processor_utilization(0).is_none());
    }

    #[test]
    fn test_slot_metrics() {
        let s = slot(5, 0, 2.0, 3.0, 7.0);
        assert!((s.duration() - 4.0).abs() < 1e-10);
        assert!((s.waiting_time() - 1.0).abs() < 1e-10);
        assert!((s.turnaround_time() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_slot_clamps_negative() {
        // Start before arrival cannot happen in the engine, but waiting
        // never goes negative and turnaround never drops below the burst.
        let s = slot(5, 0, 10.0, 3.0, 7.0);
        assert_eq!(s.waiting_time(), 0.0);
        assert_eq!(s.turnaround_time(), 4.0);
    }

    #[test]
    fn test_turnaround_at_large_arrival() {
        // 1e16 + 1 rounds back to 1e16, so completion - arrival is 0
        let s = ExecutionSlot {
            process_id: 0,
            processor: 0,
            arrival_time: 1e16,
            burst_time: 1.0,
            start_time: 1e16,
            completion_time: 1e16 + 1.0,
        };
        assert_eq!(s.waiting_time(), 0.0);
        assert_eq!(s.turnaround_time(), 1.0);
        assert_eq!(s.duration(), 1.0);
    }

    #[test]
    fn test_queries() {
        let alloc = sample();
        assert_eq!(alloc.process_count(), 3);
        assert_eq!(alloc.processor_of(2), Some(0));
        assert_eq!(alloc.processor_of(1), Some(1));
        assert_eq!(alloc.processor_of(99), None);
        assert_eq!(alloc.slots_for_processor(0).len(), 2);
        assert!(alloc.queue(7).is_empty());
        assert!((alloc.processor_load(0) - 6.0).abs() < 1e-10);
        assert_eq!(alloc.processor_loads(), vec![6.0, 3.0]);
        assert!((alloc.processor_completion(1) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_processor_utilization() {
        let alloc = sample();
        assert!((alloc.processor_utilization(0).unwrap() - 1.0).abs() < 1e-10);
        assert!((alloc.processor_utilization(1).unwrap() - 0.5).abs() < 1e-10);
    }
}
