//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulation and metrics entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Input rejected before the simulation started.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Averages requested over a run with no completed processes.
    #[error("cannot compute metrics: run has no completed processes")]
    DegenerateMetrics,
}

impl SimulationError {
    /// Validation issues, for `InvalidInput`.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::DegenerateMetrics => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimulationError>;
