//! Round robin time-quantum advisory.
//!
//! A deterministic heuristic over computed metrics, checked in order:
//!
//! 1. `context_switches > 2 × processes` → quantum too small, raise it to
//!    `ceil(avg_burst)`.
//! 2. `avg_waiting > 1.5 × avg_burst` → quantum too large, lower it.
//! 3. Otherwise the quantum is balanced.
//!
//! Only the decision is produced here; wording is left to the caller.

use serde::{Deserialize, Serialize};

use super::Metrics;
use crate::models::Ticks;

/// Context switches allowed per process before advising a larger quantum.
const MAX_SWITCHES_PER_PROCESS: usize = 2;

/// Waiting/burst ratio above which a smaller quantum is advised.
const MAX_WAIT_TO_BURST_RATIO: f64 = 1.5;

/// Outcome of the quantum heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "advice", rename_all = "snake_case")]
pub enum QuantumAdvice {
    /// Too many context switches; raise the quantum.
    Increase {
        /// Quantum used for the run.
        current: Ticks,
        /// Suggested quantum: mean burst rounded up.
        suggested: Ticks,
        /// Observed context switches.
        context_switches: usize,
    },
    /// Waiting dominates burst time; lower the quantum.
    Decrease {
        /// Quantum used for the run.
        current: Ticks,
        /// Observed mean waiting time.
        avg_waiting_time: f64,
    },
    /// The quantum suits the workload.
    Balanced {
        /// Quantum used for the run.
        current: Ticks,
    },
}

impl QuantumAdvice {
    /// Applies the heuristic; `None` unless the run was round robin.
    pub fn evaluate(metrics: &Metrics) -> Option<Self> {
        let current = metrics.algorithm.time_quantum()?;

        let advice = if metrics.context_switch_count
            > MAX_SWITCHES_PER_PROCESS * metrics.process_count()
        {
            Self::Increase {
                current,
                suggested: metrics.avg_burst_time.ceil() as Ticks,
                context_switches: metrics.context_switch_count,
            }
        } else if metrics.avg_waiting_time > MAX_WAIT_TO_BURST_RATIO * metrics.avg_burst_time {
            Self::Decrease {
                current,
                avg_waiting_time: metrics.avg_waiting_time,
            }
        } else {
            Self::Balanced { current }
        };
        Some(advice)
    }

    /// Quantum the run used.
    pub fn current_quantum(&self) -> Ticks {
        match self {
            Self::Increase { current, .. }
            | Self::Decrease { current, .. }
            | Self::Balanced { current } => *current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use crate::models::{Algorithm, ProcessSet};
    use crate::scheduler::schedule_round_robin;

    fn advise(pairs: &[(Ticks, Ticks)], quantum: Ticks, cs: Ticks) -> QuantumAdvice {
        let set = ProcessSet::from_bursts(pairs.iter().copied());
        let result = schedule_round_robin(&set, quantum, cs).unwrap();
        compute_metrics(&result).unwrap().quantum_advice().unwrap()
    }

    #[test]
    fn test_many_switches_advise_increase() {
        // Two bursts of 5 with q=1: P1 and P2 each preempted 4 times → 8 switches > 4.
        let advice = advise(&[(0, 5), (0, 5)], 1, 1);
        assert_eq!(
            advice,
            QuantumAdvice::Increase {
                current: 1,
                suggested: 5,
                context_switches: 8,
            }
        );
    }

    #[test]
    fn test_suggested_quantum_rounds_up() {
        // Mean burst 3.5 → suggest 4.
        let advice = advise(&[(0, 3), (0, 4)], 1, 1);
        assert!(matches!(advice, QuantumAdvice::Increase { suggested: 4, .. }));
    }

    #[test]
    fn test_long_waits_advise_decrease() {
        // One long job ahead of many short ones, no switch cost.
        // P1 0-20, P2..P5 finish at 21..24 → waiting 0, 19, 20, 21, 22
        let advice = advise(&[(0, 20), (1, 1), (1, 1), (1, 1), (1, 1)], 20, 0);
        match advice {
            QuantumAdvice::Decrease {
                current,
                avg_waiting_time,
            } => {
                assert_eq!(current, 20);
                assert!((avg_waiting_time - 82.0 / 5.0).abs() < 1e-10);
            }
            other => panic!("expected Decrease, got {other:?}"),
        }
    }

    #[test]
    fn test_balanced() {
        let advice = advise(&[(0, 5), (1, 3), (2, 1)], 2, 0);
        assert_eq!(advice, QuantumAdvice::Balanced { current: 2 });
        assert_eq!(advice.current_quantum(), 2);
    }

    #[test]
    fn test_switch_threshold_is_strict() {
        // Exactly 2 switches per process is still acceptable.
        // P1(0,3) q=1 cs=1: two preemptions for one process → 2 > 2 is false.
        let advice = advise(&[(0, 3)], 1, 1);
        assert_eq!(advice, QuantumAdvice::Balanced { current: 1 });
    }

    #[test]
    fn test_not_applicable_to_srtf() {
        let set = ProcessSet::from_bursts([(0, 3)]);
        let result = crate::scheduler::schedule_srtf(&set, 0).unwrap();
        let metrics = compute_metrics(&result).unwrap();
        assert_eq!(metrics.algorithm, Algorithm::Srtf);
        assert_eq!(QuantumAdvice::evaluate(&metrics), None);
    }
}
