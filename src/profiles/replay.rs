use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use super::{Profile, ProfileSource};

/// Replays a fixed sequence of profiles, e.g. an exported faker run.
#[derive(Debug, Clone, Default)]
pub struct ReplayProfileSource {
    remaining: VecDeque<Profile>,
    served: usize,
}

impl ReplayProfileSource {
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            remaining: profiles.into_iter().collect(),
            served: 0,
        }
    }

    pub fn from_birthdates(birthdates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self::new(birthdates.into_iter().map(Profile::born_on))
    }

    /// Loads a JSON array of profiles. Every entry needs a `birthdate`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data =
            fs::read(path).with_context(|| format!("Failed reading profile file {:?}", path))?;
        let profiles: Vec<Profile> = serde_json::from_slice(&data)
            .with_context(|| format!("Failed parsing profile file {:?}", path))?;
        Ok(Self::new(profiles))
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl ProfileSource for ReplayProfileSource {
    fn next_profile(&mut self) -> Result<Profile> {
        let profile = self.remaining.pop_front().ok_or_else(|| {
            anyhow!(
                "Profile sequence exhausted after {} profiles",
                self.served
            )
        })?;
        self.served += 1;
        Ok(profile)
    }
}
