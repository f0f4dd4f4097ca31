//! Preemptive shortest-remaining-time-first.
//!
//! # Algorithm
//!
//! The clock advances one tick at a time. At every tick:
//! 1. Among arrived, unfinished processes pick the one with the least
//!    remaining time (ties → lowest process ID). With none eligible the
//!    CPU idles until the next arrival.
//! 2. Run it for exactly one tick.
//! 3. If it finishes and other processes are still outstanding, pay the
//!    context switch cost.
//!
//! Preemption is therefore aligned to whole ticks. Unlike round robin, a
//! preemption by a shorter arrival is free; only completions are charged.
//! Consecutive ticks of the same process (or of idling) are coalesced into
//! one timeline segment.
//!
//! # Complexity
//! O(T * n) where T is the total busy time; idle gaps cost O(n) each.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::state::RunState;
use super::Scheduler;
use crate::error::Result;
use crate::models::{Algorithm, Process, ProcessSet, RunResult, Ticks};
use crate::validation::validate_srtf;

/// Shortest-remaining-time-first scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessSet;
/// use cpu_sched::scheduler::{Scheduler, SrtfScheduler};
///
/// let processes = ProcessSet::from_bursts([(0, 8), (1, 4), (2, 9), (3, 5)]);
/// let result = SrtfScheduler::new().run(&processes).unwrap();
///
/// assert_eq!(result.completion_order(), vec![2, 4, 1, 3]);
/// assert_eq!(result.total_time(), 26);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrtfScheduler {
    context_switch_cost: Ticks,
}

impl SrtfScheduler {
    /// Creates a scheduler with no switch cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cost charged after each completion (except the last).
    pub fn with_context_switch_cost(mut self, cost: Ticks) -> Self {
        self.context_switch_cost = cost;
        self
    }
}

/// Earliest arrival still in the future.
fn next_arrival(table: &[Process], clock: Ticks) -> Option<Ticks> {
    table
        .iter()
        .filter(|p| !p.is_finished() && p.arrival_time > clock)
        .map(|p| p.arrival_time)
        .min()
}

/// Index of the eligible process with the least remaining time.
fn shortest_remaining(table: &[Process], clock: Ticks) -> Option<usize> {
    table
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready_at(clock))
        .min_by_key(|(_, p)| (p.remaining_time, p.id))
        .map(|(idx, _)| idx)
}

impl Scheduler for SrtfScheduler {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn context_switch_cost(&self) -> Ticks {
        self.context_switch_cost
    }

    fn run(&self, processes: &ProcessSet) -> Result<RunResult> {
        validate_srtf(processes, self.context_switch_cost)?;
        log::debug!(
            "srtf: {} processes, cs={}",
            processes.len(),
            self.context_switch_cost
        );

        let mut state = RunState::new(processes);

        while !state.is_done() {
            let Some(idx) = shortest_remaining(state.table(), state.clock()) else {
                match next_arrival(state.table(), state.clock()) {
                    Some(arrival) => state.idle(arrival - state.clock()),
                    None => break,
                }
                continue;
            };

            if state.execute(idx, 1, true) && !state.is_done() {
                state.context_switch(self.context_switch_cost);
            }
        }

        let result = state.into_result(self.algorithm(), self.context_switch_cost);
        log::debug!(
            "srtf: finished at t={} with {} segments",
            result.total_time(),
            result.timeline.len()
        );
        Ok(result)
    }
}
