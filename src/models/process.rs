//! Process model.
//!
//! A process is a unit of CPU work with an arrival time and a burst
//! (total CPU demand). The scheduling engines copy processes into their
//! own run state, so a [`ProcessSet`] is never mutated by a simulation.
//!
//! # Time Representation
//! All times are integer ticks on a simulated clock starting at t=0.

use serde::{Deserialize, Serialize};

/// Process identifier. Ordinals start at 1.
pub type ProcessId = u32;

/// Simulated clock value / duration in ticks.
pub type Ticks = i64;

/// A process to be scheduled, together with its run-time bookkeeping.
///
/// `remaining_time`, `start_time` and `finish_time` are owned by the engine
/// that runs the process. Inside a [`ProcessSet`] they always hold their
/// initial values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time required.
    pub burst_time: Ticks,
    /// CPU time still required.
    #[serde(default)]
    pub remaining_time: Ticks,
    /// First time the process was given the CPU.
    #[serde(default)]
    pub start_time: Option<Ticks>,
    /// Time the process completed.
    #[serde(default)]
    pub finish_time: Option<Ticks>,
}

impl Process {
    /// Creates a fresh process that has not run yet.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
        }
    }

    /// Whether the process has run to completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0 && self.finish_time.is_some()
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn is_ready_at(&self, clock: Ticks) -> bool {
        self.arrival_time <= clock && self.remaining_time > 0
    }

    /// Turnaround time (finish - arrival), once finished.
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.finish_time.map(|finish| finish - self.arrival_time)
    }

    /// Waiting time (turnaround - burst), once finished.
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Response time (first dispatch - arrival), once started.
    pub fn response_time(&self) -> Option<Ticks> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    /// Resets run-time fields to their pre-simulation values.
    fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.finish_time = None;
    }

    // Engine-side mutators.

    pub(crate) fn mark_dispatched(&mut self, clock: Ticks) {
        if self.start_time.is_none() {
            self.start_time = Some(clock);
        }
    }

    pub(crate) fn consume(&mut self, ticks: Ticks) {
        debug_assert!(ticks <= self.remaining_time, "P{} over-consumed", self.id);
        self.remaining_time -= ticks;
    }

    pub(crate) fn mark_finished(&mut self, clock: Ticks) {
        debug_assert_eq!(self.remaining_time, 0, "P{} finished early", self.id);
        self.finish_time = Some(clock);
    }
}

/// An immutable, ordered set of processes to simulate.
///
/// Input order is significant: round robin breaks arrival-time ties by it.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessSet;
///
/// let set = ProcessSet::from_bursts([(0, 5), (1, 3), (2, 1)]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.get(2).unwrap().burst_time, 3);
/// assert_eq!(set.total_burst_time(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Process>", into = "Vec<Process>")]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates a set from explicit processes.
    ///
    /// Run-time fields are reset so every simulation starts from scratch.
    pub fn new(processes: Vec<Process>) -> Self {
        let mut processes = processes;
        for p in &mut processes {
            p.reset();
        }
        Self { processes }
    }

    /// Creates a set from `(arrival_time, burst_time)` pairs, numbering
    /// processes 1, 2, 3, ... in the given order.
    pub fn from_bursts(pairs: impl IntoIterator<Item = (Ticks, Ticks)>) -> Self {
        let processes = pairs
            .into_iter()
            .zip(1..)
            .map(|((arrival, burst), id)| Process::new(id, arrival, burst))
            .collect();
        Self { processes }
    }

    /// Appends a process with the next free ordinal id.
    pub fn with_process(mut self, arrival_time: Ticks, burst_time: Ticks) -> Self {
        let id = self.next_id();
        self.processes
            .push(Process::new(id, arrival_time, burst_time));
        self
    }

    fn next_id(&self) -> ProcessId {
        self.processes.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Finds a process by id.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Independent working copy for one simulation run.
    pub(crate) fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }
}

impl From<Vec<Process>> for ProcessSet {
    fn from(processes: Vec<Process>) -> Self {
        Self::new(processes)
    }
}

impl From<ProcessSet> for Vec<Process> {
    fn from(set: ProcessSet) -> Self {
        set.processes
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
