//! Player skill progress as seen by the repair extension
//!
//! The profile store owns the real numbers; this module only reads progress
//! and describes grants for the caller to persist.

pub mod progress;

pub use progress::{skill_level, PlayerSkills, SkillPointGrant, SkillProgress, PROGRESS_PER_LEVEL};
