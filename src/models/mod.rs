//! Workload distribution domain models.
//!
//! Provides the data types for describing a distribution problem
//! (processes, processor pool) and its solution (allocation).
//!
//! # Domain Mappings
//!
//! | u-distribute | Operating System | Batch Compute | Service Desk |
//! |--------------|------------------|---------------|--------------|
//! | Process | Process/Thread | Job | Ticket |
//! | Processor | CPU Core | Worker Node | Agent |
//! | Allocation | Run Queues | Job Placement | Work Queues |

mod allocation;
mod process;
mod processor;

pub use allocation::{Allocation, ExecutionSlot};
pub use process::{Process, ProcessId};
pub use processor::{ProcessorIndex, ProcessorState};
