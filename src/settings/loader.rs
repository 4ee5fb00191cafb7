//! Load the buff config file and merge it at startup

use crate::core::{RepairError, Result};
use crate::settings::file::BuffConfigFile;
use crate::settings::live::LiveSettings;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the buff config
pub const CONFIG_FILE_NAME: &str = "buffs.jsonc";

/// Config location under the server's base directory
pub fn default_config_path(base_dir: &Path) -> PathBuf {
    base_dir
        .join("user")
        .join("mods")
        .join("RepairSkillExtension")
        .join(CONFIG_FILE_NAME)
}

/// Parse config text. Comments and trailing commas are allowed.
pub fn parse_config(content: &str) -> Result<BuffConfigFile> {
    let cfg: BuffConfigFile =
        json5::from_str(content).map_err(|e| RepairError::ConfigParse(e.to_string()))?;

    cfg.buff_settings
        .validate()
        .map_err(RepairError::ConfigParse)?;

    Ok(cfg)
}

/// Read and parse a config file
pub fn load_config_file(path: &Path) -> Result<BuffConfigFile> {
    if !path.exists() {
        return Err(RepairError::ConfigNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load a config file and merge it into `settings`.
///
/// Any load failure is logged and leaves `settings` untouched; the server
/// keeps running with what it had. Returns whether the config was applied.
pub fn load_and_apply(path: &Path, settings: &mut LiveSettings) -> bool {
    let cfg = match load_config_file(path) {
        Ok(cfg) => cfg,
        Err(RepairError::ConfigNotFound(path)) => {
            tracing::error!("{} not found: {}", CONFIG_FILE_NAME, path.display());
            return false;
        }
        Err(e) => {
            tracing::error!("Error loading {}: {}", path.display(), e);
            return false;
        }
    };

    let report = settings.apply(&cfg);
    if report.skipped.is_empty() {
        tracing::info!("{} applied successfully", path.display());
    } else {
        tracing::info!(
            "{} applied; skipped skills: {:?}",
            path.display(),
            report.skipped
        );
    }

    true
}
