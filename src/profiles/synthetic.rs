use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Profile, ProfileSource, Sex};
use crate::population::DAYS_PER_YEAR;

const FEMALE_NAMES: &[&str] = &[
    "Alice", "Beatriz", "Chiara", "Dana", "Elena", "Fatima", "Greta", "Hannah", "Ines", "Julia",
    "Keiko", "Laura", "Marta", "Nora", "Olivia", "Paula",
];
const MALE_NAMES: &[&str] = &[
    "Aaron", "Bruno", "Carlos", "David", "Emil", "Felix", "Hugo", "Ivan", "Jonas", "Karim",
    "Luca", "Marco", "Nils", "Omar", "Pedro", "Tomas",
];
const SURNAMES: &[&str] = &[
    "Almeida", "Berg", "Costa", "Dubois", "Evans", "Fischer", "Garcia", "Hansen", "Ito", "Jansen",
    "Kowalski", "Lopez", "Moreau", "Novak", "Okafor", "Rossi", "Schmidt", "Silva", "Weber",
];
const MAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Oldest age handed out by default, matching faker's `date_of_birth`.
pub const DEFAULT_MAX_AGE: u32 = 115;

/// Faker-style profile generator driven by an explicit seeded RNG.
///
/// Birthdates are uniform over the `max_age + 1` years ending at `today`,
/// so the source never runs dry.
pub struct SyntheticProfileSource {
    rng: StdRng,
    today: NaiveDate,
    max_age: u32,
}

impl SyntheticProfileSource {
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), today)
    }

    pub fn from_rng(rng: StdRng, today: NaiveDate) -> Self {
        Self {
            rng,
            today,
            max_age: DEFAULT_MAX_AGE,
        }
    }

    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = max_age;
        self
    }

    fn birthdate(&mut self) -> Result<NaiveDate> {
        let span_days = ((self.max_age as f64 + 1.0) * DAYS_PER_YEAR).floor() as i64 - 1;
        let offset = self.rng.gen_range(0..=span_days.max(0));
        self.today
            .checked_sub_signed(Duration::days(offset))
            .with_context(|| format!("Birthdate {offset} days before {} is out of range", self.today))
    }
}

impl ProfileSource for SyntheticProfileSource {
    fn next_profile(&mut self) -> Result<Profile> {
        let sex = if self.rng.gen_bool(0.5) {
            Sex::Female
        } else {
            Sex::Male
        };
        let first_names = match sex {
            Sex::Female => FEMALE_NAMES,
            Sex::Male => MALE_NAMES,
        };
        let first = first_names.choose(&mut self.rng).unwrap_or(&"Alex");
        let last = SURNAMES.choose(&mut self.rng).unwrap_or(&"Doe");
        let domain = MAIL_DOMAINS.choose(&mut self.rng).unwrap_or(&"example.com");
        let mail = format!(
            "{}.{}{}@{domain}",
            first.to_lowercase(),
            last.to_lowercase(),
            self.rng.gen_range(1..100)
        );
        let birthdate = self.birthdate()?;
        Ok(Profile {
            name: format!("{first} {last}"),
            sex: Some(sex),
            mail,
            birthdate,
        })
    }
}
