//! Assignment pass: priority ordering and least-loaded placement.
//!
//! # Algorithm
//!
//! 1. Order processes by priority (descending), breaking ties with an
//!    explicit secondary key so the result never depends on sort
//!    stability.
//! 2. Place each process on the processor with the smallest assigned
//!    load; ties go to the smallest processor index.
//!
//! This is the list-scheduling heuristic (Graham 1969). It bounds the
//! spread between the most and least loaded processor by the largest
//! single burst, but does not minimize makespan.
//!
//! # Complexity
//! O(n log n + n * p) where n=processes, p=processors.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Process, ProcessorIndex, ProcessorState};

/// Secondary ordering key for processes of equal priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Keep the relative input order (default).
    #[default]
    InputOrder,
    /// Earliest arrival first, then input order.
    EarliestArrival,
}

impl TieBreak {
    fn compare(self, processes: &[Process], a: usize, b: usize) -> Ordering {
        match self {
            Self::InputOrder => a.cmp(&b),
            Self::EarliestArrival => processes[a]
                .arrival_time
                .total_cmp(&processes[b].arrival_time)
                .then(a.cmp(&b)),
        }
    }
}

/// Returns process indices in dispatch order.
///
/// Priority descending, then `tie_break`. The final key is always the
/// input index, so the order is total.
pub fn priority_order(processes: &[Process], tie_break: TieBreak) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_unstable_by(|&a, &b| {
        processes[b]
            .priority
            .cmp(&processes[a].priority)
            .then_with(|| tie_break.compare(processes, a, b))
    });
    indices
}

/// Index of the processor with the smallest assigned load.
///
/// Returns `None` for an empty pool.
pub fn least_loaded(pool: &[ProcessorState]) -> Option<ProcessorIndex> {
    let mut best: Option<(ProcessorIndex, f64)> = None;
    for state in pool {
        match best {
            // Strict comparison keeps the lowest index on ties
            Some((_, load)) if state.load >= load => {}
            _ => best = Some((state.index, state.load)),
        }
    }
    best.map(|(index, _)| index)
}

/// Assigns every process to a processor queue.
///
/// `order` lists indices into `processes` in dispatch order. Each
/// process is appended to the currently least-loaded processor.
pub fn assign(processes: &[Process], order: &[usize], pool: &mut [ProcessorState]) {
    for &idx in order {
        let Some(target) = least_loaded(pool) else {
            return;
        };
        let process = processes[idx];
        pool[target].enqueue(process);
        trace!(
            process = process.id,
            priority = process.priority,
            processor = target,
            load = pool[target].load,
            "assigned"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(processes: &[Process], order: &[usize]) -> Vec<u64> {
        order.iter().map(|&i| processes[i].id).collect()
    }

    #[test]
    fn test_priority_descending() {
        let processes = vec![
            Process::new(0, 1.0).with_priority(1),
            Process::new(1, 1.0).with_priority(10),
            Process::new(2, 1.0).with_priority(5),
        ];
        let order = priority_order(&processes, TieBreak::InputOrder);
        assert_eq!(ids(&processes, &order), vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let processes = vec![
            Process::new(9, 1.0).with_priority(3).with_arrival_time(5.0),
            Process::new(4, 1.0).with_priority(3).with_arrival_time(1.0),
            Process::new(7, 1.0).with_priority(8),
            Process::new(1, 1.0).with_priority(3).with_arrival_time(0.0),
        ];
        let order = priority_order(&processes, TieBreak::InputOrder);
        assert_eq!(ids(&processes, &order), vec![7, 9, 4, 1]);
    }

    #[test]
    fn test_ties_by_arrival() {
        let processes = vec![
            Process::new(9, 1.0).with_priority(3).with_arrival_time(5.0),
            Process::new(4, 1.0).with_priority(3).with_arrival_time(1.0),
            Process::new(7, 1.0).with_priority(8),
            Process::new(1, 1.0).with_priority(3).with_arrival_time(1.0),
        ];
        let order = priority_order(&processes, TieBreak::EarliestArrival);
        // 4 and 1 share arrival 1.0 → input order decides
        assert_eq!(ids(&processes, &order), vec![7, 4, 1, 9]);
    }

    #[test]
    fn test_least_loaded_prefers_lowest_index() {
        let pool = ProcessorState::pool(3);
        assert_eq!(least_loaded(&pool), Some(0));

        let mut pool = ProcessorState::pool(3);
        pool[0].enqueue(Process::new(0, 2.0));
        pool[1].enqueue(Process::new(1, 1.0));
        pool[2].enqueue(Process::new(2, 1.0));
        assert_eq!(least_loaded(&pool), Some(1));
    }

    #[test]
    fn test_least_loaded_empty_pool() {
        assert_eq!(least_loaded(&[]), None);
    }

    #[test]
    fn test_assign_balances_load() {
        // Priorities force order 6, 5, 4, 3, 2 (bursts 5, 4, 3, 3, 1)
        let processes = vec![
            Process::new(0, 5.0).with_priority(6),
            Process::new(1, 4.0).with_priority(5),
            Process::new(2, 3.0).with_priority(4),
            Process::new(3, 3.0).with_priority(3),
            Process::new(4, 1.0).with_priority(2),
        ];
        let order = priority_order(&processes, TieBreak::InputOrder);
        let mut pool = ProcessorState::pool(2);
        assign(&processes, &order, &mut pool);

        // P0: 5 → 5+3 = 8        P1: 4 → 4+3 = 7 → 7+1 = 8
        let q0: Vec<u64> = pool[0].queue.iter().map(|p| p.id).collect();
        let q1: Vec<u64> = pool[1].queue.iter().map(|p| p.id).collect();
        assert_eq!(q0, vec![0, 3]);
        assert_eq!(q1, vec![1, 2, 4]);
        assert!((pool[0].load - 8.0).abs() < 1e-10);
        assert!((pool[1].load - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_assign_more_processors_than_processes() {
        let processes = vec![Process::new(0, 2.0), Process::new(1, 2.0)];
        let order = priority_order(&processes, TieBreak::InputOrder);
        let mut pool = ProcessorState::pool(4);
        assign(&processes, &order, &mut pool);
        assert_eq!(pool[0].len(), 1);
        assert_eq!(pool[1].len(), 1);
        assert!(pool[2].is_empty());
        assert!(pool[3].is_empty());
    }
}
