use anyhow::Result;
use shoppersim::workspace::{
    config_file_path, ensure_workspace_structure, load_or_default, save, HOME_ENV_VAR,
};
use std::env;

use crate::IntegrationHarness;

// Only test in this crate that touches SHOPPERSIM_HOME.
#[test]
fn home_env_var_relocates_workspace() -> Result<()> {
    let harness = IntegrationHarness::new();
    env::set_var(HOME_ENV_VAR, harness.workspace_path());

    let paths = ensure_workspace_structure()?;
    assert_eq!(paths.root, harness.workspace_path());
    assert!(paths.config_dir.is_dir());

    let mut config = load_or_default()?;
    config.population.seed = Some(77);
    let saved = save(&config)?;
    assert_eq!(saved, config_file_path()?);
    assert_eq!(load_or_default()?.population.seed, Some(77));

    env::remove_var(HOME_ENV_VAR);
    Ok(())
}
