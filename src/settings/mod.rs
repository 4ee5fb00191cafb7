//! Buff config file model, loader and live settings

pub mod file;
mod global;
pub mod live;
mod loader;

pub use file::{BonusSettings, BonusValues, BuffConfig, BuffConfigFile, MinMax, RepairKitConfig};
pub use global::{install_live_settings, live_settings};
pub use live::{
    apply_buff_settings, apply_repair_kit_settings, ApplyReport, ArmorSkillSettings,
    BuffSettings, LiveSettings, LiveSkillSettings, RepairKitTables, RepairRuntimeConfig,
    SkillKind, SkillSettings, WeaponTreatmentSettings,
};
pub use loader::{
    default_config_path, load_and_apply, load_config_file, parse_config, CONFIG_FILE_NAME,
};
