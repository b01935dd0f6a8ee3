use serde::{Deserialize, Serialize};

use super::{CustomerRecord, Habit, HabitWeights};

/// Chi-square critical value for two degrees of freedom at p = 0.001.
pub const CHI_SQUARE_CRITICAL_DF2_P001: f64 = 13.816;

/// Pearson goodness-of-fit statistic of `observed` counts (in
/// [`Habit::ALL`] order) against the expected proportions of `weights`.
/// A habit with zero expected count contributes nothing when unobserved
/// and makes the statistic infinite when observed.
pub fn chi_square(observed: [u64; 3], weights: &HabitWeights) -> f64 {
    let total: u64 = observed.iter().sum();
    if total == 0 {
        return 0.0;
    }
    weights
        .probabilities()
        .iter()
        .zip(observed)
        .map(|(p, count)| {
            let expected = p * total as f64;
            if expected <= 0.0 {
                return if count == 0 { 0.0 } else { f64::INFINITY };
            }
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Descriptive statistics for a generated population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    pub customers: usize,
    pub daily: u64,
    pub weekly: u64,
    pub sporadic: u64,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub mean_budget: Option<f64>,
}

impl PopulationSummary {
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let mut summary = Self {
            customers: records.len(),
            daily: 0,
            weekly: 0,
            sporadic: 0,
            min_age: records.iter().map(|r| r.age).min(),
            max_age: records.iter().map(|r| r.age).max(),
            mean_budget: None,
        };
        for record in records {
            match record.habit {
                Habit::Daily => summary.daily += 1,
                Habit::Weekly => summary.weekly += 1,
                Habit::Sporadic => summary.sporadic += 1,
            }
        }
        if !records.is_empty() {
            let total: f64 = records.iter().map(|r| r.budget).sum();
            summary.mean_budget = Some(total / records.len() as f64);
        }
        summary
    }

    pub fn habit_counts(&self) -> [u64; 3] {
        [self.daily, self.weekly, self.sporadic]
    }

    pub fn chi_square(&self, weights: &HabitWeights) -> f64 {
        chi_square(self.habit_counts(), weights)
    }

    pub fn fits_weights(&self, weights: &HabitWeights, critical: f64) -> bool {
        self.chi_square(weights) < critical
    }

    /// Multi-line text report for terminal output.
    pub fn render(&self, weights: &HabitWeights) -> String {
        let mut out = String::new();
        out.push_str(&format!("Customers: {}\n", self.customers));
        for (habit, count) in Habit::ALL.iter().zip(self.habit_counts()) {
            let share = if self.customers == 0 {
                0.0
            } else {
                count as f64 * 100.0 / self.customers as f64
            };
            out.push_str(&format!("  {habit:<9} {count:>6} ({share:.1}%)\n"));
        }
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            out.push_str(&format!("Age range: {min}-{max}\n"));
        }
        if let Some(mean) = self.mean_budget {
            out.push_str(&format!("Mean budget: {mean:.2}\n"));
        }
        out.push_str(&format!(
            "Chi-square vs weights: {:.3}\n",
            self.chi_square(weights)
        ));
        out
    }
}
