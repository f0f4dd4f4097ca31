//! CPU scheduling simulator.
//!
//! Turns a set of processes (arrival time, burst time) into an execution
//! timeline and performance metrics under two preemptive single-CPU
//! disciplines: quantum-based round robin and shortest-remaining-time-first.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessSet`, `TimelineSegment`,
//!   `Timeline`, `RunResult`, `Algorithm`
//! - **`validation`**: Input checks run before every simulation
//! - **`scheduler`**: `RoundRobinScheduler`, `SrtfScheduler`, `SimulationRequest`
//! - **`metrics`**: Turnaround/waiting/response times, utilization,
//!   throughput, and the round robin quantum advisory
//! - **`report`**: Plain-text Gantt strip and metrics table
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::{compute_metrics, schedule_round_robin, ProcessSet};
//!
//! let processes = ProcessSet::from_bursts([(0, 5), (1, 3), (2, 1)]);
//! let run = schedule_round_robin(&processes, 2, 0).unwrap();
//! let metrics = compute_metrics(&run).unwrap();
//!
//! assert_eq!(run.completion_order(), vec![3, 1, 2]);
//! assert!((metrics.avg_waiting_time - 4.0).abs() < 1e-10);
//! ```
//!
//! # Design
//!
//! Every run is a pure function of its inputs: engines copy the process set,
//! keep all state local, and never touch the network or global state.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
pub use metrics::{compute_metrics, Metrics, ProcessMetrics, QuantumAdvice};
pub use models::{
    Algorithm, Process, ProcessSet, RunResult, SegmentKind, Timeline, TimelineSegment,
};
pub use scheduler::{schedule_round_robin, schedule_srtf, simulate, Scheduler, SimulationRequest};
