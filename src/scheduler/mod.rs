//! Greedy distribution engine and KPI evaluation.
//!
//! Provides the priority-driven, least-loaded distributor and
//! allocation quality metrics.
//!
//! # Algorithm
//!
//! `Distributor` sorts processes by priority, assigns each to the
//! currently least-loaded processor, then replays every processor queue
//! as a sequential timeline. It is not optimal, but gives a balanced
//! baseline in near-linear time.
//!
//! # KPI
//!
//! `AllocationKpi` computes makespan, utilization, waiting and
//! turnaround averages, and load spread.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod balance;
mod distributor;
mod kpi;
mod timeline;

pub use balance::{assign, least_loaded, priority_order, TieBreak};
pub use distributor::{distribute, Distributor, DEFAULT_MAX_PROCESSORS};
pub use kpi::{pool_utilization, AllocationKpi};
pub use timeline::{run_pool, run_queue};
