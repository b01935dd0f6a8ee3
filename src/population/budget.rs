use serde::{Deserialize, Serialize};

use super::{Habit, PopulationError};

/// Spend associated with each habit: per visit for daily and weekly
/// shoppers, per month for sporadic ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTable {
    #[serde(default = "default_daily_budget")]
    pub daily: f64,
    #[serde(default = "default_weekly_budget")]
    pub weekly: f64,
    #[serde(default = "default_sporadic_budget")]
    pub sporadic: f64,
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self {
            daily: default_daily_budget(),
            weekly: default_weekly_budget(),
            sporadic: default_sporadic_budget(),
        }
    }
}

const fn default_daily_budget() -> f64 {
    4.0
}

const fn default_weekly_budget() -> f64 {
    26.5
}

const fn default_sporadic_budget() -> f64 {
    115.0
}

impl BudgetTable {
    pub fn budget_for(&self, habit: Habit) -> f64 {
        match habit {
            Habit::Daily => self.daily,
            Habit::Weekly => self.weekly,
            Habit::Sporadic => self.sporadic,
        }
    }

    /// Looks up a budget by raw habit label.
    pub fn budget_for_label(&self, label: &str) -> Result<f64, PopulationError> {
        Ok(self.budget_for(label.parse()?))
    }

    pub fn validate(&self) -> Result<(), PopulationError> {
        for habit in Habit::ALL {
            let amount = self.budget_for(habit);
            if !amount.is_finite() || amount < 0.0 {
                return Err(PopulationError::InvalidBudget {
                    habit: habit.as_str(),
                    amount,
                });
            }
        }
        Ok(())
    }
}
