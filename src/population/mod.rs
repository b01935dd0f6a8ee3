//! Customer population pipeline: age-filtered profiles, habit sampling and
//! budget lookup.

pub mod age;
pub mod budget;
mod error;
pub mod habit;
pub mod summary;

pub use age::{age_in_years, AgeWindow, DAYS_PER_YEAR};
pub use budget::BudgetTable;
pub use error::PopulationError;
pub use habit::{Habit, HabitSampler, HabitWeights};
pub use summary::{chi_square, PopulationSummary, CHI_SQUARE_CRITICAL_DF2_P001};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::profiles::{ProfileSource, SyntheticProfileSource};

/// Number of customers in a default population.
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// One synthetic shopper as persisted for the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub age: i64,
    pub habit: Habit,
    pub budget: f64,
}

/// Everything that shapes a population apart from randomness and the date.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationPlan {
    pub size: usize,
    pub age_window: AgeWindow,
    pub habit_weights: HabitWeights,
    pub budgets: BudgetTable,
    /// Upper bound on profiles drawn; `None` retries forever.
    pub max_attempts: Option<u64>,
}

impl Default for PopulationPlan {
    fn default() -> Self {
        Self {
            size: DEFAULT_POPULATION_SIZE,
            age_window: AgeWindow::default(),
            habit_weights: HabitWeights::default(),
            budgets: BudgetTable::default(),
            max_attempts: None,
        }
    }
}

impl PopulationPlan {
    pub fn validate(&self) -> Result<(), PopulationError> {
        if self.size == 0 {
            return Err(PopulationError::EmptyPopulation);
        }
        self.age_window.validate()?;
        self.habit_weights.validate()?;
        self.budgets.validate()
    }
}

/// Outcome of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub records: Vec<CustomerRecord>,
    /// Profiles drawn from the source, accepted or not.
    pub attempts: u64,
    pub rejected: u64,
}

/// Ages accepted so far plus the attempt counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeAccumulator {
    pub ages: Vec<i64>,
    pub attempts: u64,
}

impl AgeAccumulator {
    pub fn rejected(&self) -> u64 {
        self.attempts - self.ages.len() as u64
    }
}

/// Folds one candidate birthdate into the accumulator.
pub fn accept_candidate(
    mut acc: AgeAccumulator,
    birthdate: NaiveDate,
    today: NaiveDate,
    window: &AgeWindow,
) -> AgeAccumulator {
    acc.attempts += 1;
    let age = age_in_years(birthdate, today);
    if window.contains(age) {
        acc.ages.push(age);
    }
    acc
}

/// Draws profiles until `plan.size` of them fall inside the age window.
pub fn filter_ages<S: ProfileSource + ?Sized>(
    source: &mut S,
    plan: &PopulationPlan,
    today: NaiveDate,
) -> Result<AgeAccumulator, PopulationError> {
    let mut acc = AgeAccumulator {
        ages: Vec::with_capacity(plan.size),
        attempts: 0,
    };
    while acc.ages.len() < plan.size {
        if let Some(limit) = plan.max_attempts {
            if acc.attempts >= limit {
                return Err(PopulationError::AttemptLimitExceeded {
                    attempts: acc.attempts,
                    accepted: acc.ages.len(),
                    target: plan.size,
                });
            }
        }
        let profile = source.next_profile().map_err(PopulationError::Source)?;
        acc = accept_candidate(acc, profile.birthdate, today, &plan.age_window);
    }
    debug!(
        attempts = acc.attempts,
        rejected = acc.rejected(),
        "age filter satisfied"
    );
    Ok(acc)
}

/// Attaches a sampled habit and its budget to every accepted age.
pub fn assign_habits<R: Rng + ?Sized>(
    ages: &[i64],
    sampler: &HabitSampler,
    budgets: &BudgetTable,
    rng: &mut R,
) -> Vec<CustomerRecord> {
    ages.iter()
        .map(|&age| {
            let habit = sampler.sample(rng);
            CustomerRecord {
                age,
                habit,
                budget: budgets.budget_for(habit),
            }
        })
        .collect()
}

/// Runs the full pipeline against an arbitrary profile source.
pub fn generate_population<S, R>(
    source: &mut S,
    rng: &mut R,
    plan: &PopulationPlan,
    today: NaiveDate,
) -> Result<Population, PopulationError>
where
    S: ProfileSource + ?Sized,
    R: Rng + ?Sized,
{
    plan.validate()?;
    let sampler = HabitSampler::new(&plan.habit_weights)?;
    let acc = filter_ages(source, plan, today)?;
    let records = assign_habits(&acc.ages, &sampler, &plan.budgets, rng);
    info!(
        customers = records.len(),
        attempts = acc.attempts,
        "population generated"
    );
    Ok(Population {
        rejected: acc.rejected(),
        attempts: acc.attempts,
        records,
    })
}

/// Independent RNG streams derived from one master seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedStreams {
    pub master: u64,
}

impl SeedStreams {
    const PROFILE_SLOT: u64 = 1;
    const HABIT_SLOT: u64 = 2;

    pub fn new(master: u64) -> Self {
        Self { master }
    }

    fn derive(&self, slot: u64) -> u64 {
        self.master ^ slot.wrapping_mul(0x9e37_79b9_7f4a_7c15)
    }

    pub fn profile_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.derive(Self::PROFILE_SLOT))
    }

    pub fn habit_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.derive(Self::HABIT_SLOT))
    }
}

/// Seeded run against the built-in synthetic profile source.
pub fn generate_seeded(
    seed: u64,
    plan: &PopulationPlan,
    today: NaiveDate,
) -> Result<Population, PopulationError> {
    let streams = SeedStreams::new(seed);
    let mut source = SyntheticProfileSource::from_rng(streams.profile_rng(), today);
    let mut rng = streams.habit_rng();
    generate_population(&mut source, &mut rng, plan, today)
}
