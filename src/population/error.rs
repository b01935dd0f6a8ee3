use thiserror::Error;

/// Failures raised while building a customer population.
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("gave up after {attempts} profiles with {accepted} of {target} customers accepted")]
    AttemptLimitExceeded {
        attempts: u64,
        accepted: usize,
        target: usize,
    },
    #[error("population size must be at least 1")]
    EmptyPopulation,
    #[error("age window ({min_exclusive}, {max_exclusive}) admits no whole-year age")]
    InvalidAgeWindow {
        min_exclusive: i64,
        max_exclusive: i64,
    },
    #[error("habit weights must be finite, non-negative and sum to more than zero: {0}")]
    InvalidWeights(String),
    #[error("budget for {habit} must be a finite, non-negative amount (got {amount})")]
    InvalidBudget { habit: &'static str, amount: f64 },
    #[error("unknown shopping habit '{0}'")]
    UnknownHabit(String),
    #[error("profile source failed")]
    Source(#[source] anyhow::Error),
}
