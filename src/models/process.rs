//! Process (workload unit) model.
//!
//! A process is a single unit of work that must run to completion on
//! exactly one processor. The engine reads processes and copies them
//! into per-processor queues; it never mutates the caller's values.

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = u64;

/// A workload unit to be distributed.
///
/// # Time Representation
/// Times are abstract simulation units (the synthetic generator uses
/// seconds). `arrival_time` is relative to t=0, the instant every
/// processor starts idle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run (≥ 0).
    pub arrival_time: f64,
    /// Processing time required once started (> 0).
    pub burst_time: f64,
    /// Scheduling priority (higher = scheduled earlier).
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: ProcessId, burst_time: f64) -> Self {
        Self {
            id,
            arrival_time: 0.0,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: f64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest possible completion time if started on arrival.
    #[inline]
    pub fn earliest_completion(&self) -> f64 {
        self.arrival_time + self.burst_time
    }
}
