//! Per-processor working state.
//!
//! Processors carry no state between allocation calls. During one call
//! each processor is a small value-type accumulator held in an
//! index-addressed `Vec`, so processor `i` is always `states[i]`.

use serde::{Deserialize, Serialize};

use super::Process;

/// Processor index in `[0, num_processors)`.
pub type ProcessorIndex = usize;

/// Working state of one processor during an allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessorState {
    /// Position of this processor in the pool.
    pub index: ProcessorIndex,
    /// Sum of `burst_time` over assigned processes.
    pub load: f64,
    /// Assigned processes in assignment (= execution) order.
    pub queue: Vec<Process>,
    /// Simulation clock; completion time of the last executed process.
    pub current_time: f64,
}

impl ProcessorState {
    /// Creates an idle processor with an empty queue.
    pub fn new(index: ProcessorIndex) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Creates the working state for a pool of `count` processors.
    pub fn pool(count: usize) -> Vec<Self> {
        (0..count).map(Self::new).collect()
    }

    /// Appends a process to the queue and accumulates its load.
    pub fn enqueue(&mut self, process: Process) {
        self.load += process.burst_time;
        self.queue.push(process);
    }

    /// Number of queued processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing has been assigned to this processor.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
