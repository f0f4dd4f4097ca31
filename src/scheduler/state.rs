//! Per-run simulation state shared by the engines.
//!
//! Holds a private copy of the processes (indexed by input position),
//! the clock, the timeline being built and the completion order. Two runs
//! never share a `RunState`, so process bookkeeping cannot alias across
//! simulations.

use crate::models::{Algorithm, Process, ProcessSet, RunResult, SegmentKind, Ticks, Timeline};

#[derive(Debug)]
pub(crate) struct RunState {
    table: Vec<Process>,
    timeline: Timeline,
    clock: Ticks,
    completed: Vec<usize>,
}

impl RunState {
    pub(crate) fn new(processes: &ProcessSet) -> Self {
        let table = processes.snapshot();
        let completed = Vec::with_capacity(table.len());
        Self {
            table,
            timeline: Timeline::new(),
            clock: 0,
            completed,
        }
    }

    pub(crate) fn clock(&self) -> Ticks {
        self.clock
    }

    pub(crate) fn table(&self) -> &[Process] {
        &self.table
    }

    pub(crate) fn process(&self, idx: usize) -> &Process {
        &self.table[idx]
    }

    /// Whether every process has completed.
    pub(crate) fn is_done(&self) -> bool {
        self.completed.len() == self.table.len()
    }

    /// Runs process `idx` for `ticks` starting at the current clock.
    ///
    /// With `coalesce`, time is appended to the previous segment when the
    /// same process was already running. Returns `true` if the process
    /// completed.
    pub(crate) fn execute(&mut self, idx: usize, ticks: Ticks, coalesce: bool) -> bool {
        let clock = self.clock;
        let process = &mut self.table[idx];
        if process.start_time.is_none() {
            log::trace!("t={clock}: first dispatch of P{}", process.id);
        }
        process.mark_dispatched(clock);

        let kind = SegmentKind::Process(process.id);
        if coalesce {
            self.timeline.extend(kind, clock, ticks);
        } else {
            self.timeline.push(kind, clock, ticks);
        }

        self.clock += ticks;
        process.consume(ticks);
        if process.remaining_time > 0 {
            return false;
        }

        process.mark_finished(self.clock);
        log::trace!("t={}: P{} finished", self.clock, process.id);
        self.completed.push(idx);
        true
    }

    /// Leaves the CPU idle for `ticks`.
    pub(crate) fn idle(&mut self, ticks: Ticks) {
        self.timeline.extend(SegmentKind::Idle, self.clock, ticks);
        self.clock += ticks;
    }

    /// Charges a context switch of `cost` ticks. A zero cost records nothing.
    pub(crate) fn context_switch(&mut self, cost: Ticks) {
        if cost <= 0 {
            return;
        }
        log::trace!("t={}: context switch ({cost})", self.clock);
        self.timeline
            .push(SegmentKind::ContextSwitch, self.clock, cost);
        self.clock += cost;
    }

    pub(crate) fn into_result(self, algorithm: Algorithm, context_switch_cost: Ticks) -> RunResult {
        let Self {
            table,
            timeline,
            completed,
            ..
        } = self;

        let mut slots: Vec<Option<Process>> = table.into_iter().map(Some).collect();
        let processes = completed
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();

        RunResult {
            algorithm,
            context_switch_cost,
            timeline,
            processes,
        }
    }
}
