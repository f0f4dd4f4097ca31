//! Serializable simulation request.

use serde::{Deserialize, Serialize};

use super::{RoundRobinScheduler, Scheduler, SrtfScheduler};
use crate::error::Result;
use crate::models::{Algorithm, ProcessSet, RunResult, Ticks};

/// Input container for one simulation run.
///
/// Can be built in code or deserialized, e.g. from JSON:
///
/// ```
/// use cpu_sched::scheduler::SimulationRequest;
///
/// let json = r#"{
///     "processes": [
///         {"id": 1, "arrival_time": 0, "burst_time": 5},
///         {"id": 2, "arrival_time": 1, "burst_time": 3}
///     ],
///     "algorithm": {"type": "round_robin", "time_quantum": 2},
///     "context_switch_cost": 1
/// }"#;
///
/// let request: SimulationRequest = serde_json::from_str(json).unwrap();
/// let result = request.run().unwrap();
/// assert_eq!(result.timeline.context_switch_count(), 3);
/// assert_eq!(result.total_time(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: ProcessSet,
    /// Discipline and its parameters.
    pub algorithm: Algorithm,
    /// Context-switch overhead in ticks.
    #[serde(default)]
    pub context_switch_cost: Ticks,
}

impl SimulationRequest {
    /// Creates a request with no context-switch cost.
    pub fn new(processes: ProcessSet, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            context_switch_cost: 0,
        }
    }

    /// Sets the context-switch cost.
    pub fn with_context_switch_cost(mut self, cost: Ticks) -> Self {
        self.context_switch_cost = cost;
        self
    }

    /// Builds the scheduler this request selects.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match self.algorithm {
            Algorithm::RoundRobin { time_quantum } => Box::new(
                RoundRobinScheduler::new(time_quantum)
                    .with_context_switch_cost(self.context_switch_cost),
            ),
            Algorithm::Srtf => Box::new(
                SrtfScheduler::new().with_context_switch_cost(self.context_switch_cost),
            ),
        }
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<RunResult> {
        self.scheduler().run(&self.processes)
    }
}
