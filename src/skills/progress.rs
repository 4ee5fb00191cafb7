//! Per-player skill progress

use crate::core::SkillId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Progress points per skill level
pub const PROGRESS_PER_LEVEL: f64 = 100.0;

/// Skill level for a cumulative progress value (`floor(progress / 100)`)
pub fn skill_level(progress: f64) -> f64 {
    (progress / PROGRESS_PER_LEVEL).floor()
}

/// Read access to a player's skill progress
pub trait SkillProgress {
    /// Cumulative progress for a skill. Unknown skills report 0.
    fn progress(&self, skill: SkillId) -> f64;

    fn level(&self, skill: SkillId) -> f64 {
        skill_level(self.progress(skill))
    }
}

/// Experience to add to one skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillPointGrant {
    pub skill: SkillId,
    pub points: f64,
}

/// In-memory skill store for a single player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSkills {
    #[serde(default)]
    progress: HashMap<SkillId, f64>,
}

impl PlayerSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style progress setter
    #[must_use]
    pub fn with_progress(mut self, skill: SkillId, progress: f64) -> Self {
        self.progress.insert(skill, progress);
        self
    }

    pub fn add_points(&mut self, skill: SkillId, points: f64) {
        *self.progress.entry(skill).or_insert(0.0) += points;
    }

    pub fn apply_grant(&mut self, grant: &SkillPointGrant) {
        self.add_points(grant.skill, grant.points);
    }
}

impl SkillProgress for PlayerSkills {
    fn progress(&self, skill: SkillId) -> f64 {
        self.progress.get(&skill).copied().unwrap_or(0.0)
    }
}
