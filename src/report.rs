//! Plain-text rendering of runs and metrics.
//!
//! Gives callers a ready-made textual Gantt strip and metrics table.
//! Graphical rendering is left to callers, who can consume the
//! serializable models directly.

use std::fmt::Write as _;

use crate::metrics::Metrics;
use crate::models::Timeline;

/// Renders a timeline as a Gantt strip with boundary times underneath.
///
/// ```
/// use cpu_sched::models::ProcessSet;
/// use cpu_sched::report::render_timeline;
/// use cpu_sched::scheduler::schedule_srtf;
///
/// let set = ProcessSet::from_bursts([(0, 2), (0, 3)]);
/// let result = schedule_srtf(&set, 1).unwrap();
/// assert_eq!(
///     render_timeline(&result.timeline),
///     "| P1 | CS | P2 |\n0    2    3    6"
/// );
/// ```
pub fn render_timeline(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return String::new();
    }

    let mut bars = String::from("|");
    let mut ticks = String::new();
    for segment in timeline {
        let label = segment.kind.to_string();
        let start = segment.start.to_string();
        let inner = label.len().max(start.len());
        let _ = write!(bars, " {label:<inner$} |");
        let _ = write!(ticks, "{start:<width$}", width = inner + 3);
    }
    ticks.push_str(&timeline.end_time().to_string());

    format!("{bars}\n{ticks}")
}

const HEADERS: [&str; 7] = [
    "Process",
    "Arrival",
    "Burst",
    "Completion",
    "Turnaround",
    "Waiting",
    "Response",
];

/// Renders the per-process table, the averages row and the aggregates.
///
/// Rows are ordered by process ID.
pub fn render_metrics(metrics: &Metrics) -> String {
    let mut rows: Vec<[String; 7]> = Vec::with_capacity(metrics.processes.len() + 2);
    rows.push(HEADERS.map(String::from));

    let mut by_id: Vec<_> = metrics.processes.iter().collect();
    by_id.sort_by_key(|m| m.id);
    for m in by_id {
        rows.push([
            format!("P{}", m.id),
            m.arrival_time.to_string(),
            m.burst_time.to_string(),
            m.completion_time.to_string(),
            m.turnaround_time.to_string(),
            m.waiting_time.to_string(),
            m.response_time.to_string(),
        ]);
    }

    rows.push([
        "Average".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", metrics.avg_completion_time),
        format!("{:.2}", metrics.avg_turnaround_time),
        format!("{:.2}", metrics.avg_waiting_time),
        format!("{:.2}", metrics.avg_response_time),
    ]);

    let mut widths = [0usize; 7];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = format!("{:<w$}", row[0], w = widths[0]);
        for (cell, w) in row.iter().zip(widths).skip(1) {
            let _ = write!(line, "  {cell:>w$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "CPU utilization: {:.2}%",
        metrics.cpu_utilization * 100.0
    );
    let _ = writeln!(out, "Throughput: {:.4} processes/tick", metrics.throughput);
    let _ = write!(out, "Context switches: {}", metrics.context_switch_count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use crate::models::{ProcessSet, SegmentKind};
    use crate::scheduler::{schedule_round_robin, schedule_srtf};

    #[test]
    fn test_render_timeline_alignment() {
        let mut timeline = Timeline::new();
        timeline.push(SegmentKind::Process(1), 0, 2);
        timeline.push(SegmentKind::Idle, 2, 10);
        timeline.push(SegmentKind::Process(2), 12, 1);

        let text = render_timeline(&timeline);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| P1 | Idle | P2 |");
        assert_eq!(lines[1], "0    2      12   13");

        // Every boundary time starts under a '|'.
        for (pos, ch) in lines[0].char_indices() {
            if ch == '|' {
                assert_ne!(lines[1].as_bytes().get(pos), Some(&b' '));
            }
        }
    }

    #[test]
    fn test_render_empty_timeline() {
        assert_eq!(render_timeline(&Timeline::new()), "");
    }

    #[test]
    fn test_render_metrics_table() {
        let set = ProcessSet::from_bursts([(0, 5), (1, 3), (2, 1)]);
        let metrics = compute_metrics(&schedule_round_robin(&set, 2, 0).unwrap()).unwrap();
        let text = render_metrics(&metrics);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Process  Arrival  Burst  Completion  Turnaround  Waiting  Response"
        );
        // Completion order is P3, P1, P2 but rows are listed by ID.
        assert!(lines[1].starts_with("P1 "));
        assert!(lines[2].starts_with("P2 "));
        assert!(lines[3].starts_with("P3 "));
        assert!(lines[3].ends_with(" 4"));
        assert!(lines[4].starts_with("Average"));
        assert!(lines[4].contains("8.00") && lines[4].contains("7.00") && lines[4].contains("4.00"));
        assert_eq!(lines[5], "CPU utilization: 100.00%");
        assert_eq!(lines[6], "Throughput: 0.3333 processes/tick");
        assert_eq!(lines[7], "Context switches: 0");
    }

    #[test]
    fn test_render_metrics_columns_align() {
        let set = ProcessSet::from_bursts([(0, 8), (1, 4), (2, 9), (3, 5)]);
        let metrics = compute_metrics(&schedule_srtf(&set, 0).unwrap()).unwrap();
        let text = render_metrics(&metrics);
        let table: Vec<&str> = text.lines().take(6).collect();

        let width = table[0].len();
        assert!(table.iter().all(|line| line.len() == width));
    }
}
