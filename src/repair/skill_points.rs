//! Bonus armor XP for kit repairs

use crate::core::{RepairError, Result};
use crate::items::ItemTemplate;
use crate::repair::RepairOutcome;
use crate::skills::SkillPointGrant;

/// XP earned for `repair_points` restored
pub fn compute_bonus_xp(repair_points: f64, multiplier: f64) -> f64 {
    repair_points * multiplier
}

/// Skill points for a kit repair of an armor-like item.
///
/// Returns `Ok(None)` for trader repairs and non-armor items. Unlike the
/// buff path there is no skill-level gate, so face covers and visors earn
/// XP at any level.
pub fn award_skill_points(
    outcome: &RepairOutcome,
    template: &ItemTemplate,
    multiplier: f64,
) -> Result<Option<SkillPointGrant>> {
    if !outcome.repaired_by_kit || !template.class.is_armor_like() {
        return Ok(None);
    }

    let skill = template.armor_type.governing_skill();
    let repair_points = outcome
        .repair_points
        .ok_or_else(|| RepairError::MissingRepairPoints(template.id.clone()))?;

    let points = compute_bonus_xp(repair_points, multiplier);
    tracing::debug!("Added extra armor XP: {} to {} for {}", points, skill, template.id);

    Ok(Some(SkillPointGrant { skill, points }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArmorType, ItemClass, ItemId, SkillId, TemplateId};
    use crate::items::RepairedItem;

    fn outcome(template: &ItemTemplate, points: Option<f64>, by_kit: bool) -> RepairOutcome {
        RepairOutcome {
            repaired_item: RepairedItem::new(ItemId::new("i1"), template.id.clone(), 50.0),
            repair_points: points,
            repaired_by_kit: by_kit,
        }
    }

    #[test]
    fn test_compute_bonus_xp() {
        assert_eq!(compute_bonus_xp(40.0, 0.05), 2.0);
        assert_eq!(compute_bonus_xp(0.0, 0.05), 0.0);
    }

    #[test]
    fn test_face_cover_earns_xp_at_any_level() {
        let template = ItemTemplate::new(TemplateId::new("visor"), ItemClass::Visor, 20.0)
            .with_armor_type(ArmorType::Heavy);

        let grant = award_skill_points(&outcome(&template, Some(10.0), true), &template, 0.5)
            .unwrap()
            .unwrap();

        assert_eq!(grant.skill, SkillId::HeavyVests);
        assert_eq!(grant.points, 5.0);
    }

    #[test]
    fn test_trader_repair_earns_nothing() {
        let template = ItemTemplate::new(TemplateId::new("armor"), ItemClass::Armor, 80.0);
        let grant =
            award_skill_points(&outcome(&template, Some(10.0), false), &template, 0.5).unwrap();
        assert!(grant.is_none());
    }

    #[test]
    fn test_weapon_earns_nothing() {
        let template = ItemTemplate::new(TemplateId::new("rifle"), ItemClass::Weapon, 80.0);
        let grant =
            award_skill_points(&outcome(&template, Some(10.0), true), &template, 0.5).unwrap();
        assert!(grant.is_none());
    }

    #[test]
    fn test_missing_points_is_an_error() {
        let template = ItemTemplate::new(TemplateId::new("armor"), ItemClass::Armor, 80.0);
        let result = award_skill_points(&outcome(&template, None, true), &template, 0.5);
        assert!(matches!(result, Err(RepairError::MissingRepairPoints(_))));
    }
}
