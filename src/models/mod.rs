//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` / `ProcessSet` | Input workload (arrival, burst) |
//! | `TimelineSegment` / `Timeline` | Gantt-chart view of a run |
//! | `RunResult` | Timeline plus completed processes |
//! | `Algorithm` | Discipline and its parameters |

mod process;
mod run;
mod timeline;

pub use process::{Process, ProcessId, ProcessSet, Ticks};
pub use run::{Algorithm, RunResult};
pub use timeline::{SegmentKind, Timeline, TimelineSegment};
