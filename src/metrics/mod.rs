//! Performance metrics for a completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | finish time |
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | CPU Utilization | total burst / total elapsed |
//! | Throughput | processes / total elapsed |
//! | Context Switches | number of context-switch segments |
//!
//! Averages over zero completed processes are undefined, so
//! [`compute_metrics`] rejects such runs with
//! [`SimulationError::DegenerateMetrics`] instead of producing NaN.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

mod advice;

pub use advice::QuantumAdvice;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, Process, ProcessId, RunResult, Ticks};

/// Timing metrics of one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: Ticks,
    /// Burst time.
    pub burst_time: Ticks,
    /// First dispatch time.
    pub start_time: Ticks,
    /// Finish time.
    pub completion_time: Ticks,
    /// finish - arrival.
    pub turnaround_time: Ticks,
    /// turnaround - burst.
    pub waiting_time: Ticks,
    /// start - arrival.
    pub response_time: Ticks,
}

impl ProcessMetrics {
    /// Derives metrics from a process; `None` unless it started and finished.
    pub fn from_process(p: &Process) -> Option<Self> {
        let start = p.start_time?;
        let finish = p.finish_time?;
        let turnaround = finish - p.arrival_time;
        Some(Self {
            id: p.id,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            start_time: start,
            completion_time: finish,
            turnaround_time: turnaround,
            waiting_time: turnaround - p.burst_time,
            response_time: start - p.arrival_time,
        })
    }
}

/// Per-process and aggregate metrics of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Discipline that produced the run.
    pub algorithm: Algorithm,
    /// Per-process metrics, in completion order.
    pub processes: Vec<ProcessMetrics>,
    /// Total elapsed simulated time (end of the timeline).
    pub total_time: Ticks,
    /// Sum of burst times.
    pub total_burst_time: Ticks,
    /// Mean completion time.
    pub avg_completion_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean burst time.
    pub avg_burst_time: f64,
    /// Fraction of elapsed time spent executing processes (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of context-switch segments in the timeline.
    pub context_switch_count: usize,
}

impl Metrics {
    /// Computes metrics from a run.
    ///
    /// Only processes with both a start and a finish time count.
    ///
    /// # Errors
    /// [`SimulationError::DegenerateMetrics`] if no process completed.
    pub fn calculate(result: &RunResult) -> Result<Self> {
        let processes: Vec<ProcessMetrics> = result
            .processes
            .iter()
            .filter_map(ProcessMetrics::from_process)
            .collect();
        if processes.is_empty() {
            return Err(SimulationError::DegenerateMetrics);
        }

        let n = processes.len() as f64;
        let mean = |f: fn(&ProcessMetrics) -> Ticks| -> f64 {
            processes.iter().map(|m| f(m) as f64).sum::<f64>() / n
        };

        let total_time = result.total_time();
        let total_burst_time: Ticks = processes.iter().map(|m| m.burst_time).sum();
        let (cpu_utilization, throughput) = if total_time > 0 {
            (
                total_burst_time as f64 / total_time as f64,
                n / total_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            algorithm: result.algorithm,
            avg_completion_time: mean(|m| m.completion_time),
            avg_turnaround_time: mean(|m| m.turnaround_time),
            avg_waiting_time: mean(|m| m.waiting_time),
            avg_response_time: mean(|m| m.response_time),
            avg_burst_time: mean(|m| m.burst_time),
            processes,
            total_time,
            total_burst_time,
            cpu_utilization,
            throughput,
            context_switch_count: result.timeline.context_switch_count(),
        })
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Metrics of one process.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == id)
    }

    /// Quantum advice for round robin runs; `None` for other disciplines.
    pub fn quantum_advice(&self) -> Option<QuantumAdvice> {
        QuantumAdvice::evaluate(self)
    }
}

/// Computes metrics from a run. See [`Metrics::calculate`].
pub fn compute_metrics(result: &RunResult) -> Result<Metrics> {
    Metrics::calculate(result)
}
