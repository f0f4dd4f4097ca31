//! Execution timeline model.
//!
//! A timeline is the Gantt-chart view of a simulation: an ordered list of
//! half-open intervals that partition `[0, total_time)`, each tagged with
//! what the CPU was doing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Ticks};

/// What the CPU was doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "process_id", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Executing the given process.
    Process(ProcessId),
    /// No eligible work.
    Idle,
    /// Fixed overhead paid when the engine switches processes.
    ContextSwitch,
}

impl SegmentKind {
    /// The running process, if this is an execution segment.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Self::Process(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(id) => write!(f, "P{id}"),
            Self::Idle => f.write_str("Idle"),
            Self::ContextSwitch => f.write_str("CS"),
        }
    }
}

/// A tagged interval `[start, end)` on the simulated clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// What the CPU was doing.
    pub kind: SegmentKind,
    /// Start time (inclusive).
    pub start: Ticks,
    /// End time (exclusive).
    pub end: Ticks,
}

impl TimelineSegment {
    /// Creates a segment.
    pub fn new(kind: SegmentKind, start: Ticks, end: Ticks) -> Self {
        Self { kind, start, end }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Ordered, contiguous sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment `[start, start + duration)` as its own entry.
    ///
    /// `start` must equal the current end of the timeline.
    pub fn push(&mut self, kind: SegmentKind, start: Ticks, duration: Ticks) {
        debug_assert_eq!(start, self.end_time(), "timeline must stay contiguous");
        debug_assert!(duration > 0, "empty {kind} segment at t={start}");
        self.segments
            .push(TimelineSegment::new(kind, start, start + duration));
    }

    /// Appends time, extending the last segment if it has the same kind.
    ///
    /// Context switches are never merged: each one is a separate event.
    pub fn extend(&mut self, kind: SegmentKind, start: Ticks, duration: Ticks) {
        if kind != SegmentKind::ContextSwitch {
            if let Some(last) = self.segments.last_mut() {
                if last.kind == kind && last.end == start {
                    last.end += duration;
                    return;
                }
            }
        }
        self.push(kind, start, duration);
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Iterates segments in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineSegment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (total elapsed time), or 0 if empty.
    pub fn end_time(&self) -> Ticks {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time spent in segments of the given kind.
    pub fn time_in(&self, kind: SegmentKind) -> Ticks {
        self.segments
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.duration())
            .sum()
    }

    /// Total time spent executing any process.
    pub fn busy_time(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|s| s.kind.process_id().is_some())
            .map(|s| s.duration())
            .sum()
    }

    /// Number of context-switch segments.
    pub fn context_switch_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::ContextSwitch)
            .count()
    }

    /// Execution segments of one process.
    pub fn segments_for_process(&self, id: ProcessId) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Process(id))
            .collect()
    }

    /// Whether segments start at 0, touch end-to-start and are non-empty.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for s in &self.segments {
            if s.start != cursor || s.end <= s.start {
                return false;
            }
            cursor = s.end;
        }
        true
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineSegment;
    type IntoIter = std::slice::Iter<'a, TimelineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
