//! Decide whether a kit repair earns a buff
//!
//! Chance formula:
//!
//! ```text
//! restored   = repair_points / max_durability
//! multiplier = min(restored, received_max) / received_max
//! chance     = min_chance + level_bonus * skill_level * multiplier
//! ```
//!
//! The chance is not clamped; anything above 1.0 always buffs.

use crate::core::{ItemClass, RepairError, SkillId};
use crate::items::ItemTemplate;
use crate::repair::RepairOutcome;
use crate::settings::{BuffSettings, LiveSkillSettings};
use crate::skills::{skill_level, SkillProgress};
use rand::Rng;

/// Vest skill progress face covers and visors need before they can buff (level 10)
pub const FACE_COVER_MIN_PROGRESS: f64 = 1000.0;

/// Why a repair was not considered for a buff
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    TraderRepair,
    ItemClass(ItemClass),
    MissingRepairPoints,
    SkillTooLow { skill: SkillId, progress: f64 },
}

/// Outcome of the buff decision for one repair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuffDecision {
    /// Passed every precondition
    pub eligible: bool,
    pub probability: f64,
    /// Eligible and the roll landed at or under `probability`
    pub triggered: bool,
    pub governing_skill: Option<SkillId>,
    pub rejection: Option<Rejection>,
}

impl BuffDecision {
    fn rejected(rejection: Rejection, governing_skill: Option<SkillId>) -> Self {
        Self {
            eligible: false,
            probability: 0.0,
            triggered: false,
            governing_skill,
            rejection: Some(rejection),
        }
    }
}

/// Fraction of the template's max durability a repair restored
pub fn restored_fraction(repair_points: f64, max_durability: f64) -> f64 {
    if max_durability <= 0.0 {
        return 0.0;
    }
    repair_points / max_durability
}

/// Share of the level bonus a repair earns, capped at 1
pub fn durability_multiplier(restored_fraction: f64, received_durability_max_percent: f64) -> f64 {
    restored_fraction.min(received_durability_max_percent) / received_durability_max_percent
}

pub fn buff_probability(settings: &BuffSettings, skill_level: f64, durability_multiplier: f64) -> f64 {
    settings.common_buff_min_chance_value
        + settings.common_buff_chance_level_bonus * skill_level * durability_multiplier
}

/// Evaluate a repaired item for a buff and roll for it.
///
/// Trader repairs, non-armor items (weapons included) and repairs without
/// repair points never qualify. Face covers and visors additionally need
/// [`FACE_COVER_MIN_PROGRESS`] in their governing vest skill.
pub fn evaluate(
    outcome: &RepairOutcome,
    template: &ItemTemplate,
    progress: &impl SkillProgress,
    skills: &LiveSkillSettings,
    rng: &mut impl Rng,
) -> BuffDecision {
    if !outcome.repaired_by_kit {
        return BuffDecision::rejected(Rejection::TraderRepair, None);
    }

    if !template.class.is_armor_like() {
        return BuffDecision::rejected(Rejection::ItemClass(template.class), None);
    }

    let skill = template.armor_type.governing_skill();

    let Some(repair_points) = outcome.repair_points else {
        tracing::error!("{}", RepairError::MissingRepairPoints(template.id.clone()));
        return BuffDecision::rejected(Rejection::MissingRepairPoints, Some(skill));
    };

    let skill_progress = progress.progress(skill);
    if template.class.is_face_cover_like() && skill_progress < FACE_COVER_MIN_PROGRESS {
        return BuffDecision::rejected(
            Rejection::SkillTooLow {
                skill,
                progress: skill_progress,
            },
            Some(skill),
        );
    }

    let settings = skills.buff_settings(skill);
    let multiplier = durability_multiplier(
        restored_fraction(repair_points, template.max_durability),
        settings.received_durability_max_percent,
    );
    let probability = buff_probability(settings, skill_level(skill_progress), multiplier);

    let roll: f64 = rng.gen();
    BuffDecision {
        eligible: true,
        probability,
        triggered: roll <= probability,
        governing_skill: Some(skill),
        rejection: None,
    }
}
