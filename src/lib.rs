//! Workload distribution for the U-Engine ecosystem.
//!
//! Distributes a batch of processes over a fixed processor pool with a
//! priority-greedy, least-loaded heuristic and derives waiting time,
//! turnaround time and pool utilization. The computation is offline and
//! one-shot: no preemption, no migration, no state between calls.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessorState`, `Allocation`,
//!   `ExecutionSlot`
//! - **`scheduler`**: `Distributor` (assignment + timeline passes) and
//!   `AllocationKpi`
//! - **`validation`**: Input integrity checks (processor count, IDs, timings)
//! - **`generate`**: Seeded synthetic process sets
//! - **`wire`**: Serde request/response records for a service boundary
//!
//! # Example
//!
//! ```
//! use u_distribute::models::Process;
//! use u_distribute::scheduler::distribute;
//!
//! let processes = vec![Process::new(0, 5.0).with_priority(1)];
//! let allocation = distribute(&processes, 1).unwrap();
//! assert_eq!(allocation.waiting_times[&0], 0.0);
//! assert_eq!(allocation.turnaround_times[&0], 5.0);
//! assert_eq!(allocation.utilization, 100.0);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod generate;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod wire;

pub use error::AllocationError;
