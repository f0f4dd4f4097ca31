//! Quantum-based round robin.
//!
//! # Algorithm
//!
//! 1. Admit every pending process with `arrival_time <= clock` to the tail
//!    of the FIFO ready queue (arrival order, ties keep input order).
//! 2. Dequeue the head and run it for `min(remaining, quantum)`.
//! 3. A finished process leaves the system. Otherwise pay the context
//!    switch (if any) and re-enqueue it at the tail. Processes that arrived
//!    during the slice are admitted at the next decision point, behind it.
//! 4. With an empty ready queue the CPU idles until the next arrival.
//!
//! Every slice is its own timeline segment, so no segment exceeds the
//! quantum. Idle time is recorded explicitly.
//!
//! # Complexity
//! O(n + S) where S is the number of slices (at most total_burst / 1).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::state::RunState;
use super::Scheduler;
use crate::error::Result;
use crate::models::{Algorithm, ProcessSet, RunResult, Ticks};
use crate::validation::validate_round_robin;

/// Round robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessSet;
/// use cpu_sched::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let processes = ProcessSet::from_bursts([(0, 5), (1, 3), (2, 1)]);
/// let result = RoundRobinScheduler::new(2).run(&processes).unwrap();
///
/// assert_eq!(result.completion_order(), vec![3, 1, 2]);
/// assert_eq!(result.total_time(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    time_quantum: Ticks,
    context_switch_cost: Ticks,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum and no switch cost.
    pub fn new(time_quantum: Ticks) -> Self {
        Self {
            time_quantum,
            context_switch_cost: 0,
        }
    }

    /// Sets the cost charged on every non-terminal preemption.
    pub fn with_context_switch_cost(mut self, cost: Ticks) -> Self {
        self.context_switch_cost = cost;
        self
    }

    /// The time quantum.
    pub fn time_quantum(&self) -> Ticks {
        self.time_quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            time_quantum: self.time_quantum,
        }
    }

    fn context_switch_cost(&self) -> Ticks {
        self.context_switch_cost
    }

    fn run(&self, processes: &ProcessSet) -> Result<RunResult> {
        validate_round_robin(processes, self.time_quantum, self.context_switch_cost)?;
        log::debug!(
            "round robin: {} processes, quantum={}, cs={}",
            processes.len(),
            self.time_quantum,
            self.context_switch_cost
        );

        let mut state = RunState::new(processes);

        // Stable sort keeps input order among equal arrivals.
        let mut by_arrival: Vec<usize> = (0..processes.len()).collect();
        by_arrival.sort_by_key(|&idx| state.process(idx).arrival_time);
        let mut pending: VecDeque<usize> = by_arrival.into();
        let mut ready: VecDeque<usize> = VecDeque::new();

        while !pending.is_empty() || !ready.is_empty() {
            while let Some(&idx) = pending.front() {
                if state.process(idx).arrival_time > state.clock() {
                    break;
                }
                pending.pop_front();
                ready.push_back(idx);
            }

            let Some(idx) = ready.pop_front() else {
                if let Some(&next) = pending.front() {
                    let gap = state.process(next).arrival_time - state.clock();
                    state.idle(gap);
                }
                continue;
            };

            let slice = state.process(idx).remaining_time.min(self.time_quantum);
            if !state.execute(idx, slice, false) {
                state.context_switch(self.context_switch_cost);
                ready.push_back(idx);
            }
        }

        let result = state.into_result(self.algorithm(), self.context_switch_cost);
        log::debug!(
            "round robin: finished at t={} with {} segments",
            result.total_time(),
            result.timeline.len()
        );
        Ok(result)
    }
}
