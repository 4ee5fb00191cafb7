//! Process-wide live settings
//!
//! Buff chances and repair-kit bonus tables are merged from the config file
//! once at startup, then installed here and only read afterwards. Readers
//! never observe a partially merged object: merging happens on an owned
//! `LiveSettings` before it is installed.

use crate::settings::live::LiveSettings;
use std::sync::OnceLock;

static LIVE_SETTINGS: OnceLock<LiveSettings> = OnceLock::new();

/// Get the installed live settings (initializes with defaults if not set)
pub fn live_settings() -> &'static LiveSettings {
    LIVE_SETTINGS.get_or_init(LiveSettings::default)
}

/// Install the live settings (can only be called once)
///
/// Returns Err with the rejected settings if they were already set.
pub fn install_live_settings(settings: LiveSettings) -> Result<(), LiveSettings> {
    LIVE_SETTINGS.set(settings)
}
