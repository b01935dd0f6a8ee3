//! Shopping-frequency habits and the categorical sampler that assigns them.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::PopulationError;

/// How often a customer shops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Habit {
    Daily,
    Weekly,
    Sporadic,
}

impl Habit {
    /// Sampling order; the cumulative thresholds are built in this order.
    pub const ALL: [Habit; 3] = [Habit::Daily, Habit::Weekly, Habit::Sporadic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Habit::Daily => "daily",
            Habit::Weekly => "weekly",
            Habit::Sporadic => "sporadic",
        }
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Habit {
    type Err = PopulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Habit::Daily),
            "weekly" => Ok(Habit::Weekly),
            "sporadic" => Ok(Habit::Sporadic),
            _ => Err(PopulationError::UnknownHabit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Habit {
    type Error = PopulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Relative weights for each habit. Only their ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitWeights {
    #[serde(default = "default_daily_weight")]
    pub daily: f64,
    #[serde(default = "default_weekly_weight")]
    pub weekly: f64,
    #[serde(default = "default_sporadic_weight")]
    pub sporadic: f64,
}

impl Default for HabitWeights {
    fn default() -> Self {
        Self {
            daily: default_daily_weight(),
            weekly: default_weekly_weight(),
            sporadic: default_sporadic_weight(),
        }
    }
}

const fn default_daily_weight() -> f64 {
    3.0
}

const fn default_weekly_weight() -> f64 {
    48.0
}

const fn default_sporadic_weight() -> f64 {
    42.0
}

impl HabitWeights {
    pub fn weight(&self, habit: Habit) -> f64 {
        match habit {
            Habit::Daily => self.daily,
            Habit::Weekly => self.weekly,
            Habit::Sporadic => self.sporadic,
        }
    }

    pub fn total(&self) -> f64 {
        self.daily + self.weekly + self.sporadic
    }

    pub fn validate(&self) -> Result<(), PopulationError> {
        for habit in Habit::ALL {
            let weight = self.weight(habit);
            if !weight.is_finite() || weight < 0.0 {
                return Err(PopulationError::InvalidWeights(format!(
                    "{habit} weight is {weight}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(PopulationError::InvalidWeights("weights sum to zero".into()));
        }
        Ok(())
    }

    /// Normalized probabilities in [`Habit::ALL`] order.
    pub fn probabilities(&self) -> [f64; 3] {
        let total = self.total();
        Habit::ALL.map(|habit| self.weight(habit) / total)
    }
}

/// Inverse-CDF sampler over the three habits.
#[derive(Debug, Clone, Copy)]
pub struct HabitSampler {
    daily_cutoff: f64,
    weekly_cutoff: f64,
}

impl HabitSampler {
    pub fn new(weights: &HabitWeights) -> Result<Self, PopulationError> {
        weights.validate()?;
        let [p_daily, p_weekly, _] = weights.probabilities();
        Ok(Self {
            daily_cutoff: p_daily,
            weekly_cutoff: p_daily + p_weekly,
        })
    }

    /// Maps a uniform draw in [0, 1) to a habit. First matching threshold wins.
    pub fn classify(&self, draw: f64) -> Habit {
        if draw <= self.daily_cutoff {
            Habit::Daily
        } else if draw <= self.weekly_cutoff {
            Habit::Weekly
        } else {
            Habit::Sporadic
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Habit {
        self.classify(rng.gen::<f64>())
    }
}
