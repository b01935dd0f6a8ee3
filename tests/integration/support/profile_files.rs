use chrono::NaiveDate;
use shoppersim::profiles::Profile;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `birthdates` as a replayable profile file and returns its path.
pub fn write_profile_file(dir: &Path, name: &str, birthdates: &[NaiveDate]) -> PathBuf {
    let profiles: Vec<Profile> = birthdates.iter().copied().map(Profile::born_on).collect();
    let path = dir.join(name);
    fs::write(
        &path,
        serde_json::to_vec_pretty(&profiles).expect("profiles serialize"),
    )
    .expect("failed to write profile file");
    path
}
