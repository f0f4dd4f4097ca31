//! Input validation for simulation runs.
//!
//! Checks the process set and scheduling parameters before any engine
//! starts, so a run never discovers bad input halfway through. Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Process IDs below 1
//! - Non-positive burst times
//! - Negative arrival times
//! - Zero or negative time quanta
//! - Negative context-switch costs
//! - Inputs whose worst-case finish time does not fit in `Ticks`
//!
//! All issues are collected, not just the first one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessSet, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes to schedule.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is 0; IDs are ordinals starting at 1.
    InvalidProcessId,
    /// A process has `burst_time < 1`.
    InvalidBurstTime,
    /// A process has `arrival_time < 0`.
    NegativeArrivalTime,
    /// Round robin quantum is below 1.
    InvalidTimeQuantum,
    /// Context-switch cost is negative.
    NegativeContextSwitchCost,
    /// The simulated clock could overflow `Ticks` before every process finishes.
    TimeOverflow,
    /// Workload generator settings cannot produce a valid set.
    InvalidWorkload,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every process ID is at least 1
/// 4. Every burst time is at least 1
/// 5. No arrival time is negative
pub fn validate_processes(processes: &ProcessSet) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", p.id),
            ));
        }

        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessId,
                format!("Process ID {} must be >= 1", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Process P{} has burst time {} (must be >= 1)", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!(
                    "Process P{} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates round robin parameters on top of the process set.
pub fn validate_round_robin(
    processes: &ProcessSet,
    time_quantum: Ticks,
    context_switch_cost: Ticks,
) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();

    if time_quantum < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeQuantum,
            format!("Time quantum {time_quantum} must be >= 1"),
        ));
    }
    errors.extend(check_context_switch_cost(context_switch_cost));
    if errors.is_empty() {
        errors.extend(check_time_horizon(processes, context_switch_cost));
    }

    into_result(errors)
}

/// Validates SRTF parameters on top of the process set.
pub fn validate_srtf(processes: &ProcessSet, context_switch_cost: Ticks) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    errors.extend(check_context_switch_cost(context_switch_cost));
    if errors.is_empty() {
        errors.extend(check_time_horizon(processes, context_switch_cost));
    }
    into_result(errors)
}

fn check_context_switch_cost(cost: Ticks) -> Option<ValidationError> {
    (cost < 0).then(|| {
        ValidationError::new(
            ValidationErrorKind::NegativeContextSwitchCost,
            format!("Context switch cost {cost} must be >= 0"),
        )
    })
}

/// Worst-case finish time: last arrival, plus all bursts, plus one switch
/// per tick of burst. Neither engine switches more often than that.
fn worst_case_end(processes: &ProcessSet, cost: Ticks) -> Option<Ticks> {
    let last_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    let total_burst = processes
        .iter()
        .try_fold(0, |acc: Ticks, p| acc.checked_add(p.burst_time))?;
    let switching = total_burst.checked_mul(cost)?;
    last_arrival.checked_add(total_burst)?.checked_add(switching)
}

/// Expects process and cost checks to have passed.
fn check_time_horizon(processes: &ProcessSet, cost: Ticks) -> Option<ValidationError> {
    if processes.is_empty() || worst_case_end(processes, cost).is_some() {
        return None;
    }
    Some(ValidationError::new(
        ValidationErrorKind::TimeOverflow,
        format!(
            "Simulated time could exceed {} ticks for {} processes with context switch cost {cost}",
            Ticks::MAX,
            processes.len()
        ),
    ))
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        log::debug!("rejected simulation input: {} issue(s)", errors.len());
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_processes() -> ProcessSet {
        ProcessSet::from_bursts([(0, 5), (1, 3), (2, 1)])
    }

    #[test]
    fn test_valid_input() {
        let set = sample_processes();
        assert!(validate_processes(&set).is_ok());
        assert!(validate_round_robin(&set, 2, 0).is_ok());
        assert!(validate_srtf(&set, 1).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_processes(&ProcessSet::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_process_id() {
        let set = ProcessSet::new(vec![Process::new(1, 0, 2), Process::new(1, 3, 2)]);
        let errors = validate_processes(&set).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_zero_burst() {
        let set = ProcessSet::from_bursts([(0, 0)]);
        let errors = validate_processes(&set).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_negative_arrival() {
        let set = ProcessSet::from_bursts([(-1, 3)]);
        let errors = validate_processes(&set).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrivalTime));
    }

    #[test]
    fn test_zero_quantum() {
        let errors = validate_round_robin(&sample_processes(), 0, 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidTimeQuantum);
    }

    #[test]
    fn test_negative_context_switch() {
        let errors = validate_srtf(&sample_processes(), -2).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeContextSwitchCost);
        assert_eq!(errors[0].to_string(), "Context switch cost -2 must be >= 0");
    }

    #[test]
    fn test_multiple_errors() {
        // Zero burst + negative arrival + bad quantum + bad cost
        let set = ProcessSet::from_bursts([(-3, 0)]);
        let errors = validate_round_robin(&set, 0, -1).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_zero_process_id() {
        let set = ProcessSet::new(vec![Process::new(0, 0, 2), Process::new(1, 0, 1)]);
        let errors = validate_processes(&set).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcessId);
        assert_eq!(errors[0].to_string(), "Process ID 0 must be >= 1");
    }

    #[test]
    fn test_arrival_near_max_overflows() {
        let set = ProcessSet::from_bursts([(Ticks::MAX - 1, 5)]);
        let errors = validate_round_robin(&set, 10, 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let errors = validate_srtf(&set, 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_switch_cost_overflows() {
        let set = ProcessSet::from_bursts([(0, 5), (0, 5)]);
        let errors = validate_srtf(&set, Ticks::MAX / 4).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_total_burst_overflows() {
        let set = ProcessSet::from_bursts([(0, Ticks::MAX), (0, 1)]);
        let errors = validate_round_robin(&set, 1, 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_horizon_at_max_is_accepted() {
        let set = ProcessSet::from_bursts([(Ticks::MAX - 5, 5)]);
        assert!(validate_round_robin(&set, 10, 0).is_ok());
        assert!(validate_srtf(&set, 0).is_ok());
    }
}
