mod config;

pub use config::{
    config_dir, config_file_path, ensure_workspace_at, ensure_workspace_structure, load_from,
    load_or_default, load_required, save, save_to, workspace_root, workspace_root_from,
    AppConfig, OutputSettings, PopulationSettings, WorkspacePaths, CONFIG_FILE_NAME,
    EVENTS_FILE_NAME, HOME_ENV_VAR,
};
