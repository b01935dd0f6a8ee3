//! Configuration primitives for ShopperSim.
//!
//! Stored in a TOML file located at:
//!   %APPDATA%/ShopperSim/config/config.toml on Windows
//!   $XDG_DATA_HOME/ShopperSim/config/config.toml on Linux
//!   ~/Library/Application Support/ShopperSim/config/config.toml on macOS
//!
//! Every key is optional; missing sections fall back to the stock
//! supermarket population (100 customers aged 19-98, habit weights 3/48/42).

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::population::{
    AgeWindow, BudgetTable, HabitWeights, PopulationPlan, DEFAULT_POPULATION_SIZE,
};

/// Environment variable overriding the workspace root.
pub const HOME_ENV_VAR: &str = "SHOPPERSIM_HOME";

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Run history appended after every generation.
pub const EVENTS_FILE_NAME: &str = "events.jsonl";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub population: PopulationSettings,
    /// Relative habit weights (daily, weekly, sporadic).
    #[serde(default)]
    pub habits: HabitWeights,
    /// Budget attached to each habit.
    #[serde(default)]
    pub budgets: BudgetTable,
    #[serde(default)]
    pub output: OutputSettings,
}

impl AppConfig {
    /// Population plan described by this configuration.
    pub fn plan(&self) -> PopulationPlan {
        PopulationPlan {
            size: self.population.size,
            age_window: AgeWindow {
                min_exclusive: self.population.min_age_exclusive,
                max_exclusive: self.population.max_age_exclusive,
            },
            habit_weights: self.habits,
            budgets: self.budgets,
            max_attempts: self.population.max_attempts,
        }
    }
}

/// Size and sampling knobs for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSettings {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_min_age_exclusive")]
    pub min_age_exclusive: i64,
    #[serde(default = "default_max_age_exclusive")]
    pub max_age_exclusive: i64,
    /// Cap on profiles drawn before giving up; unbounded when absent.
    #[serde(default)]
    pub max_attempts: Option<u64>,
    /// Master seed; a fresh one is drawn per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PopulationSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            min_age_exclusive: default_min_age_exclusive(),
            max_age_exclusive: default_max_age_exclusive(),
            max_attempts: None,
            seed: None,
        }
    }
}

const fn default_size() -> usize {
    DEFAULT_POPULATION_SIZE
}

const fn default_min_age_exclusive() -> i64 {
    18
}

const fn default_max_age_exclusive() -> i64 {
    99
}

/// Where the generated customer list lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("customers.json")
}

/// Returns the root directory where ShopperSim stores data.
///
/// Order of precedence:
/// 1. `SHOPPERSIM_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    workspace_root_from(env::var_os(HOME_ENV_VAR))
}

/// Resolves the workspace root from an explicit `SHOPPERSIM_HOME` value.
/// Empty values count as unset.
pub fn workspace_root_from(home: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = home.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("ShopperSim"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the workspace configuration or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    load_from(config_file_path()?)
}

/// Loads a configuration file, falling back to defaults when it is absent.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Loads a configuration file the caller named explicitly; it must exist.
pub fn load_required<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.is_file() {
        bail!("Config file {:?} does not exist", path);
    }
    load_from(path)
}

/// Persists the configuration to the workspace config file.
pub fn save(config: &AppConfig) -> Result<PathBuf> {
    let path = config_file_path()?;
    save_to(config, &path)?;
    Ok(path)
}

pub fn save_to<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating config directory {:?}", parent))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed writing config file {:?}", path))?;
    Ok(())
}

/// Ensures the workspace directories exist.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    ensure_workspace_at(workspace_root()?)
}

pub fn ensure_workspace_at(root: impl Into<PathBuf>) -> Result<WorkspacePaths> {
    let paths = WorkspacePaths::at(root);
    fs::create_dir_all(&paths.config_dir)
        .with_context(|| format!("Failed creating workspace {:?}", paths.root))?;
    Ok(paths)
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_dir = root.join("config");
        Self { root, config_dir }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    pub fn events_file(&self) -> PathBuf {
        self.root.join(EVENTS_FILE_NAME)
    }
}
