//! Timeline pass: sequential execution of each processor queue.
//!
//! Each processor runs its queue strictly in assignment order, one
//! process at a time, without preemption. A process starts at the later
//! of its arrival and the processor's clock. Queues are never re-sorted
//! by arrival, so priority dominates arrival time.

use crate::models::{ExecutionSlot, ProcessorState};

/// Runs one processor's queue and advances its clock.
///
/// Returns one slot per queued process, in queue order. The clock is
/// reset to 0 first, so the pass is repeatable.
pub fn run_queue(state: &mut ProcessorState) -> Vec<ExecutionSlot> {
    state.current_time = 0.0;
    let mut slots = Vec::with_capacity(state.queue.len());

    for process in &state.queue {
        let start_time = state.current_time.max(process.arrival_time);
        let completion_time = start_time + process.burst_time;

        slots.push(ExecutionSlot {
            process_id: process.id,
            processor: state.index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
        });

        state.current_time = completion_time;
    }

    slots
}

/// Runs every processor in the pool, concatenating slots by processor.
pub fn run_pool(pool: &mut [ProcessorState]) -> Vec<ExecutionSlot> {
    pool.iter_mut().flat_map(run_queue).collect()
}
