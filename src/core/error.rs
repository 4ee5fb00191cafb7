use crate::core::types::{SkillId, TemplateId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepairError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("{skill} settings are not {expected}")]
    ConfigShapeMismatch {
        skill: SkillId,
        expected: &'static str,
    },

    #[error("Item {0} has no repair points")]
    MissingRepairPoints(TemplateId),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unable to find item {0} in the item database")]
    UnknownTemplate(TemplateId),

    #[error("Live skill settings have no entry for {0}")]
    MissingSkillEntry(SkillId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RepairError>;
