//! Synthetic person profiles and the sources that produce them.
//!
//! The population pipeline only reads the birthdate; the remaining fields
//! mirror what a faker-style `profile()` call returns so generated data
//! looks plausible when inspected on its own.

pub mod replay;
pub mod synthetic;

pub use replay::ReplayProfileSource;
pub use synthetic::SyntheticProfileSource;

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub mail: String,
    pub birthdate: NaiveDate,
}

impl Profile {
    /// Minimal profile carrying only a birthdate.
    pub fn born_on(birthdate: NaiveDate) -> Self {
        Self {
            name: String::new(),
            sex: None,
            mail: String::new(),
            birthdate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

/// Anything that can hand out profiles one at a time.
pub trait ProfileSource {
    fn next_profile(&mut self) -> Result<Profile>;
}

impl<S: ProfileSource + ?Sized> ProfileSource for Box<S> {
    fn next_profile(&mut self) -> Result<Profile> {
        (**self).next_profile()
    }
}
