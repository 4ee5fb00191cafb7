//! Post-repair enhancement: bonus XP and buffs for one repair event
//!
//! Runs after the base repair has already been committed. Nothing here
//! fails the repair; problems end up in [`RepairEnhancement::errors`].

use crate::core::RepairError;
use crate::items::{Buff, ItemCatalog};
use crate::repair::eligibility::{evaluate, BuffDecision};
use crate::repair::instantiate::apply_buff;
use crate::repair::skill_points::award_skill_points;
use crate::repair::RepairOutcome;
use crate::settings::{live_settings, LiveSettings};
use crate::skills::{SkillPointGrant, SkillProgress};
use rand::Rng;

/// What the extension decided for one repair
#[derive(Debug, Default)]
pub struct RepairEnhancement {
    /// Buff now attached to the repaired item
    pub buff: Option<Buff>,
    /// XP for the caller to add to the player's profile
    pub skill_grant: Option<SkillPointGrant>,
    pub decision: Option<BuffDecision>,
    pub errors: Vec<RepairError>,
}

impl RepairEnhancement {
    pub fn is_empty(&self) -> bool {
        self.buff.is_none() && self.skill_grant.is_none()
    }
}

/// Applies bonus XP and buffs on top of finished repairs
pub struct RepairEnhancer<'a, C: ItemCatalog + ?Sized> {
    catalog: &'a C,
    settings: &'a LiveSettings,
}

impl<'a, C: ItemCatalog + ?Sized> RepairEnhancer<'a, C> {
    pub fn new(catalog: &'a C, settings: &'a LiveSettings) -> Self {
        Self { catalog, settings }
    }

    /// Enhancer reading the process-wide live settings
    pub fn with_live_settings(catalog: &'a C) -> RepairEnhancer<'a, C> {
        Self::new(catalog, live_settings())
    }

    /// Grant bonus XP and roll for a buff.
    ///
    /// A triggered buff replaces whatever buff the repaired item carried.
    /// Trader repairs are returned untouched.
    pub fn enhance(
        &self,
        outcome: &mut RepairOutcome,
        progress: &impl SkillProgress,
        rng: &mut impl Rng,
    ) -> RepairEnhancement {
        let mut result = RepairEnhancement::default();
        if !outcome.repaired_by_kit {
            return result;
        }

        let Some(template) = self.catalog.template(outcome.template_id()) else {
            let err = RepairError::UnknownTemplate(outcome.template_id().clone());
            tracing::error!("{}", err);
            result.errors.push(err);
            return result;
        };

        let multiplier = self
            .settings
            .repair
            .armor_kit_skill_point_gain_per_repair_point_multiplier;
        // Missing repair points are logged once, by `evaluate`
        match award_skill_points(outcome, template, multiplier) {
            Ok(grant) => result.skill_grant = grant,
            Err(err) => result.errors.push(err),
        }

        let decision = evaluate(outcome, template, progress, &self.settings.skills, rng);
        result.decision = Some(decision);
        if !decision.triggered {
            return result;
        }

        let Some(table) = self.settings.repair.repair_kit.table_for(template.class) else {
            return result;
        };

        match apply_buff(table, &mut outcome.repaired_item, rng) {
            Ok(buff) => {
                tracing::debug!(
                    "Applied {} {} buff ({:.2}) to {}",
                    buff.rarity,
                    buff.bonus_type,
                    buff.value,
                    template.id
                );
                result.buff = Some(buff.clone());
            }
            Err(err) => {
                tracing::warn!("Buff for {} failed: {}", template.id, err);
                result.errors.push(err);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArmorType, ItemClass, ItemId, SkillId, TemplateId};
    use crate::items::{catalog_from, ItemTemplate, RepairedItem};
    use crate::random::WeightTable;
    use crate::skills::PlayerSkills;
    use rand::rngs::mock::StepRng;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the test and a scoped fmt subscriber
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn catalog() -> HashMap<TemplateId, ItemTemplate> {
        catalog_from([
            ItemTemplate::new("vest", ItemClass::Vest, 100.0).with_armor_type(ArmorType::Light),
            ItemTemplate::new("mask", ItemClass::FaceCover, 40.0).with_armor_type(ArmorType::Heavy),
            ItemTemplate::new("rifle", ItemClass::Weapon, 100.0),
        ])
    }

    fn always_buff() -> LiveSettings {
        let mut settings = LiveSettings::default();
        for skill in SkillId::ALL {
            settings
                .skills
                .entry_mut(skill)
                .buff_settings_mut()
                .common_buff_min_chance_value = 2.0;
        }
        settings
    }

    fn kit_repair(template: &str, points: Option<f64>) -> RepairOutcome {
        RepairOutcome {
            repaired_item: RepairedItem::new(ItemId::new("item"), TemplateId::new(template), 60.0),
            repair_points: points,
            repaired_by_kit: true,
        }
    }

    #[test]
    fn test_kit_repair_grants_xp_and_buff() {
        let catalog = catalog();
        let settings = always_buff();
        let enhancer = RepairEnhancer::new(&catalog, &settings);
        let mut outcome = kit_repair("vest", Some(40.0));

        let result = enhancer.enhance(&mut outcome, &PlayerSkills::new(), &mut StepRng::new(0, 0));

        let grant = result.skill_grant.unwrap();
        assert_eq!(grant.skill, SkillId::LightVests);
        assert_eq!(grant.points, 40.0 * 0.05);
        assert!(result.buff.is_some());
        assert_eq!(outcome.repaired_item.buff, result.buff);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_face_cover_uses_headwear_table() {
        let catalog = catalog();
        let mut settings = always_buff();
        settings.repair.repair_kit.headwear.rarity_weight = WeightTable::new().with("Rare", 1.0);
        let enhancer = RepairEnhancer::new(&catalog, &settings);
        let progress = PlayerSkills::new().with_progress(SkillId::HeavyVests, 1200.0);
        let mut outcome = kit_repair("mask", Some(10.0));

        let result = enhancer.enhance(&mut outcome, &progress, &mut StepRng::new(0, 0));

        assert_eq!(result.buff.map(|b| b.rarity), Some(crate::items::Rarity::Rare));
        assert_eq!(
            result.skill_grant.map(|g| g.skill),
            Some(SkillId::HeavyVests)
        );
    }

    #[test]
    fn test_unknown_template_reported() {
        let catalog = catalog();
        let settings = always_buff();
        let enhancer = RepairEnhancer::new(&catalog, &settings);
        let mut outcome = kit_repair("ghost", Some(10.0));

        let result = enhancer.enhance(&mut outcome, &PlayerSkills::new(), &mut StepRng::new(0, 0));

        assert!(result.is_empty());
        assert!(matches!(
            result.errors.as_slice(),
            [RepairError::UnknownTemplate(_)]
        ));
    }

    #[test]
    fn test_bad_table_does_not_fail_repair() {
        let catalog = catalog();
        let mut settings = always_buff();
        settings.repair.repair_kit.vest.rarity_weight = WeightTable::new();
        let enhancer = RepairEnhancer::new(&catalog, &settings);
        let mut outcome = kit_repair("vest", Some(40.0));

        let result = enhancer.enhance(&mut outcome, &PlayerSkills::new(), &mut StepRng::new(0, 0));

        // XP still granted, buff reported as failed
        assert!(result.skill_grant.is_some());
        assert!(result.buff.is_none());
        assert!(outcome.repaired_item.buff.is_none());
        assert!(matches!(
            result.errors.as_slice(),
            [RepairError::InvalidConfiguration(_)]
        ));
    }

    #[test]
    fn test_missing_points_logged_once() {
        let catalog = catalog();
        let settings = always_buff();
        let enhancer = RepairEnhancer::new(&catalog, &settings);
        let mut outcome = kit_repair("vest", None);

        let log = CapturedLog::default();
        let sink = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || {
            enhancer.enhance(&mut outcome, &PlayerSkills::new(), &mut StepRng::new(0, 0))
        });

        assert!(matches!(
            result.errors.as_slice(),
            [RepairError::MissingRepairPoints(_)]
        ));
        let output = log.contents();
        assert_eq!(output.matches("vest has no repair points").count(), 1, "{}", output);
        assert!(output.contains("ERROR"));
    }
}
