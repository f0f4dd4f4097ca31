//! Scheduling engines.
//!
//! Two preemptive single-CPU disciplines behind a common [`Scheduler`]
//! trait:
//!
//! - [`RoundRobinScheduler`]: FIFO ready queue, fixed time quantum,
//!   context switch charged on every non-terminal preemption.
//! - [`SrtfScheduler`]: shortest remaining time first at one-tick
//!   granularity, context switch charged after each completion.
//!
//! Both produce a [`RunResult`]: a contiguous timeline covering
//! `[0, total_time)` with explicit idle and context-switch segments, plus
//! the completed processes in completion order.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod request;
mod round_robin;
mod srtf;
mod state;

pub use request::SimulationRequest;
pub use round_robin::RoundRobinScheduler;
pub use srtf::SrtfScheduler;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Algorithm, ProcessSet, RunResult, Ticks};

/// A CPU scheduling discipline.
///
/// Implementations validate their input, simulate on a private copy of
/// the processes and never mutate the caller's [`ProcessSet`], so the same
/// set can be run repeatedly with different parameters.
pub trait Scheduler: Send + Sync + Debug {
    /// Short name (e.g., "RR", "SRTF").
    fn name(&self) -> &'static str;

    /// Discipline and parameters recorded on the result.
    fn algorithm(&self) -> Algorithm;

    /// Context-switch overhead in ticks.
    fn context_switch_cost(&self) -> Ticks;

    /// Simulates the process set to completion.
    fn run(&self, processes: &ProcessSet) -> Result<RunResult>;
}

/// Runs round robin with the given quantum and context-switch cost.
pub fn schedule_round_robin(
    processes: &ProcessSet,
    time_quantum: Ticks,
    context_switch_cost: Ticks,
) -> Result<RunResult> {
    RoundRobinScheduler::new(time_quantum)
        .with_context_switch_cost(context_switch_cost)
        .run(processes)
}

/// Runs SRTF with the given context-switch cost.
pub fn schedule_srtf(processes: &ProcessSet, context_switch_cost: Ticks) -> Result<RunResult> {
    SrtfScheduler::new()
        .with_context_switch_cost(context_switch_cost)
        .run(processes)
}

/// Runs whichever discipline the request selects.
pub fn simulate(request: &SimulationRequest) -> Result<RunResult> {
    request.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, SegmentKind};
    use crate::workload::WorkloadGenerator;

    fn workloads() -> Vec<ProcessSet> {
        (0..40)
            .map(|seed| {
                WorkloadGenerator::new(1 + (seed as usize % 8))
                    .with_max_arrival(12)
                    .with_burst_range(1, 9)
                    .with_seed(seed)
                    .generate()
                    .unwrap()
            })
            .collect()
    }

    fn all_runs() -> Vec<(ProcessSet, RunResult)> {
        let mut runs = Vec::new();
        for set in workloads() {
            for cs in [0, 1, 3] {
                for q in [1, 2, 5] {
                    runs.push((set.clone(), schedule_round_robin(&set, q, cs).unwrap()));
                }
                runs.push((set.clone(), schedule_srtf(&set, cs).unwrap()));
            }
        }
        runs
    }

    #[test]
    fn test_every_process_completes() {
        for (set, result) in all_runs() {
            assert_eq!(result.processes.len(), set.len());
            for p in &result.processes {
                assert_eq!(p.remaining_time, 0);
                assert!(p.is_finished());
                let start = p.start_time.unwrap();
                let finish = p.finish_time.unwrap();
                assert!(p.arrival_time <= start && start <= finish);
            }
        }
    }

    #[test]
    fn test_turnaround_at_least_burst() {
        for (_, result) in all_runs() {
            for p in &result.processes {
                assert!(p.turnaround_time().unwrap() >= p.burst_time);
                assert!(p.waiting_time().unwrap() >= 0);
            }
        }
    }

    #[test]
    fn test_work_conservation() {
        for (set, result) in all_runs() {
            assert_eq!(result.timeline.busy_time(), set.total_burst_time());
            for p in &set {
                assert_eq!(result.timeline.time_in(SegmentKind::Process(p.id)), p.burst_time);
            }
        }
    }

    #[test]
    fn test_timeline_partitions_run() {
        for (_, result) in all_runs() {
            assert!(result.timeline.is_contiguous());
            let last_finish = result
                .processes
                .iter()
                .filter_map(|p| p.finish_time)
                .max()
                .unwrap();
            assert_eq!(result.total_time(), last_finish);
        }
    }

    #[test]
    fn test_completion_order_is_by_finish_time() {
        for (_, result) in all_runs() {
            let finishes: Vec<Ticks> = result
                .processes
                .iter()
                .filter_map(|p| p.finish_time)
                .collect();
            assert!(finishes.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_round_robin_slices_bounded_by_quantum() {
        for set in workloads() {
            for q in [1, 2, 4] {
                let result = schedule_round_robin(&set, q, 1).unwrap();
                assert!(result
                    .timeline
                    .iter()
                    .filter(|s| s.kind.process_id().is_some())
                    .all(|s| s.duration() <= q));
            }
        }
    }

    #[test]
    fn test_srtf_always_runs_shortest() {
        for set in workloads() {
            let result = schedule_srtf(&set, 0).unwrap();
            let mut remaining: Vec<(Process, Ticks)> =
                set.iter().map(|p| (p.clone(), p.burst_time)).collect();

            for s in result.timeline.iter() {
                let Some(id) = s.kind.process_id() else {
                    continue;
                };
                for t in s.start..s.end {
                    let running = remaining
                        .iter()
                        .find(|(p, _)| p.id == id)
                        .map(|(_, r)| *r)
                        .unwrap();
                    let shortest = remaining
                        .iter()
                        .filter(|(p, r)| p.arrival_time <= t && *r > 0)
                        .map(|(_, r)| *r)
                        .min()
                        .unwrap();
                    assert_eq!(running, shortest, "P{id} not shortest at t={t}");

                    if let Some(entry) = remaining.iter_mut().find(|(p, _)| p.id == id) {
                        entry.1 -= 1;
                    }
                }
            }
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        for set in workloads() {
            assert_eq!(
                schedule_round_robin(&set, 3, 1).unwrap(),
                schedule_round_robin(&set.clone(), 3, 1).unwrap()
            );
            assert_eq!(
                schedule_srtf(&set, 2).unwrap(),
                schedule_srtf(&set.clone(), 2).unwrap()
            );
        }
    }

    #[test]
    fn test_simulate_dispatches_by_algorithm() {
        let set = ProcessSet::from_bursts([(0, 5), (1, 3), (2, 1)]);
        let rr = simulate(&SimulationRequest::new(
            set.clone(),
            Algorithm::RoundRobin { time_quantum: 2 },
        ))
        .unwrap();
        assert_eq!(rr, schedule_round_robin(&set, 2, 0).unwrap());

        let srtf = simulate(&SimulationRequest::new(set.clone(), Algorithm::Srtf)).unwrap();
        assert_eq!(srtf, schedule_srtf(&set, 0).unwrap());
    }

    #[test]
    fn test_single_process_degenerate() {
        let set = ProcessSet::from_bursts([(0, 6)]);
        for result in [
            schedule_round_robin(&set, 10, 0).unwrap(),
            schedule_srtf(&set, 0).unwrap(),
        ] {
            let p = result.process(1).unwrap();
            assert_eq!(p.waiting_time(), Some(0));
            assert_eq!(p.response_time(), Some(0));
            assert_eq!(p.turnaround_time(), Some(6));
        }
    }
}
