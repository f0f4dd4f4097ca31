//! Simulation output model.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Ticks, Timeline};

/// Scheduling discipline and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// Quantum-based round robin.
    RoundRobin {
        /// Maximum contiguous slice per dispatch.
        time_quantum: Ticks,
    },
    /// Preemptive shortest-remaining-time-first.
    Srtf,
}

impl Algorithm {
    /// Short display name ("RR", "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin { .. } => "RR",
            Self::Srtf => "SRTF",
        }
    }

    /// Time quantum, for round robin.
    pub fn time_quantum(&self) -> Option<Ticks> {
        match self {
            Self::RoundRobin { time_quantum } => Some(*time_quantum),
            Self::Srtf => None,
        }
    }
}

/// Result of one simulation run.
///
/// `processes` holds the engine's final copies in completion order, with
/// `start_time` and `finish_time` filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Discipline that produced this run.
    pub algorithm: Algorithm,
    /// Context-switch cost the run was charged with.
    pub context_switch_cost: Ticks,
    /// Execution timeline.
    pub timeline: Timeline,
    /// Completed processes, in completion order.
    pub processes: Vec<Process>,
}

impl RunResult {
    /// Total elapsed simulated time.
    pub fn total_time(&self) -> Ticks {
        self.timeline.end_time()
    }

    /// Finds a completed process by id.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.processes.iter().map(|p| p.id).collect()
    }

    /// Finish time of a process.
    pub fn finish_time(&self, id: ProcessId) -> Option<Ticks> {
        self.process(id).and_then(|p| p.finish_time)
    }
}
