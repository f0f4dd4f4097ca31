//! Seeded random workload generation.
//!
//! Produces reproducible process sets for experiments and for exercising
//! the engines across many inputs. The same settings and seed always give
//! the same set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::{ProcessSet, Ticks};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Random process-set generator.
///
/// Arrivals are drawn uniformly from `0..=max_arrival` and bursts from
/// `min_burst..=max_burst`. Processes are numbered 1..=n in generation
/// order.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
///
/// let set = WorkloadGenerator::new(5)
///     .with_max_arrival(10)
///     .with_burst_range(1, 8)
///     .with_seed(42)
///     .generate()
///     .unwrap();
/// assert_eq!(set.len(), 5);
/// assert!(set.iter().all(|p| (1..=8).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    process_count: usize,
    max_arrival: Ticks,
    min_burst: Ticks,
    max_burst: Ticks,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `process_count` processes.
    ///
    /// Defaults: arrivals in `0..=10`, bursts in `1..=10`, seed 0.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst-time range.
    pub fn with_burst_range(mut self, min_burst: Ticks, max_burst: Ticks) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    ///
    /// # Errors
    /// `InvalidInput` if the settings cannot produce a valid set.
    pub fn generate(&self) -> Result<ProcessSet> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let pairs: Vec<(Ticks, Ticks)> = (0..self.process_count)
            .map(|_| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                (arrival, burst)
            })
            .collect();

        log::debug!(
            "generated {} processes (seed {})",
            pairs.len(),
            self.seed
        );
        Ok(ProcessSet::from_bursts(pairs))
    }

    fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.process_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                "Workload must contain at least one process",
            ));
        }
        if self.max_arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                format!("Max arrival {} must be >= 0", self.max_arrival),
            ));
        }
        if self.min_burst < 1 || self.min_burst > self.max_burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                format!(
                    "Burst range {}..={} must be non-empty and start at >= 1",
                    self.min_burst, self.max_burst
                ),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
