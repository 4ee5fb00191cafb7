//! Live skill and repair-kit settings, and merging the config file into them

use crate::core::{ItemClass, RepairError, Result, SkillId};
use crate::settings::file::{BonusSettings, BuffConfig, BuffConfigFile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Buff chance settings of one skill, as held by the server globals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuffSettings {
    pub common_buff_chance_level_bonus: f64,
    pub common_buff_min_chance_value: f64,
    pub current_durability_loss_to_remove_buff: f64,
    pub max_durability_loss_to_remove_buff: f64,
    #[serde(rename = "RareBuffChanceCoff")]
    pub rare_buff_chance_coefficient: f64,
    pub received_durability_max_percent: f64,
}

impl Default for BuffSettings {
    fn default() -> Self {
        Self {
            common_buff_chance_level_bonus: 0.01,
            common_buff_min_chance_value: 0.01,
            current_durability_loss_to_remove_buff: 0.25,
            max_durability_loss_to_remove_buff: 0.15,
            rare_buff_chance_coefficient: 0.14,
            received_durability_max_percent: 0.5,
        }
    }
}

/// Settings block of an armor skill (LightVests, HeavyVests)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArmorSkillSettings {
    pub buff_settings: BuffSettings,
}

/// Settings block of the WeaponTreatment skill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeaponTreatmentSettings {
    pub buff_settings: BuffSettings,
}

/// Which settings block a skill entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Armor,
    WeaponTreatment,
}

impl SkillKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            SkillKind::Armor => "ArmorSkills",
            SkillKind::WeaponTreatment => "WeaponTreatment",
        }
    }
}

/// One skill's live settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkillSettings {
    Armor(ArmorSkillSettings),
    WeaponTreatment(WeaponTreatmentSettings),
}

impl SkillSettings {
    pub fn kind(&self) -> SkillKind {
        match self {
            SkillSettings::Armor(_) => SkillKind::Armor,
            SkillSettings::WeaponTreatment(_) => SkillKind::WeaponTreatment,
        }
    }

    pub fn buff_settings(&self) -> &BuffSettings {
        match self {
            SkillSettings::Armor(s) => &s.buff_settings,
            SkillSettings::WeaponTreatment(s) => &s.buff_settings,
        }
    }

    pub fn buff_settings_mut(&mut self) -> &mut BuffSettings {
        match self {
            SkillSettings::Armor(s) => &mut s.buff_settings,
            SkillSettings::WeaponTreatment(s) => &mut s.buff_settings,
        }
    }
}

/// Skills that receive config values, with the block each must hold
const TRACKED_SKILLS: [(SkillId, SkillKind); 3] = [
    (SkillId::LightVests, SkillKind::Armor),
    (SkillId::HeavyVests, SkillKind::Armor),
    (SkillId::WeaponTreatment, SkillKind::WeaponTreatment),
];

/// A config value copied into every tracked skill
struct BroadcastField {
    name: &'static str,
    read: fn(&BuffConfig) -> f64,
    write: fn(&mut BuffSettings, f64),
}

/// The only fields the config file overrides. The remaining buff fields
/// keep the server's values.
const BROADCAST_FIELDS: [BroadcastField; 3] = [
    BroadcastField {
        name: "CommonBuffChanceLevelBonus",
        read: |cfg| cfg.common_buff_chance_level_bonus,
        write: |settings, value| settings.common_buff_chance_level_bonus = value,
    },
    BroadcastField {
        name: "CommonBuffMinChanceValue",
        read: |cfg| cfg.common_buff_min_chance_value,
        write: |settings, value| settings.common_buff_min_chance_value = value,
    },
    BroadcastField {
        name: "ReceivedDurabilityMaxPercent",
        read: |cfg| cfg.received_durability_max_percent,
        write: |settings, value| settings.received_durability_max_percent = value,
    },
];

/// Live settings of the skills tracked by this extension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSkillSettings {
    light_vests: SkillSettings,
    heavy_vests: SkillSettings,
    weapon_treatment: SkillSettings,
}

impl Default for LiveSkillSettings {
    fn default() -> Self {
        Self {
            light_vests: SkillSettings::Armor(ArmorSkillSettings::default()),
            heavy_vests: SkillSettings::Armor(ArmorSkillSettings::default()),
            weapon_treatment: SkillSettings::WeaponTreatment(WeaponTreatmentSettings::default()),
        }
    }
}

impl LiveSkillSettings {
    /// Build from the server's skill table. Every tracked skill must be present.
    pub fn from_entries(mut entries: HashMap<SkillId, SkillSettings>) -> Result<Self> {
        let mut take = |skill: SkillId| {
            entries
                .remove(&skill)
                .ok_or(RepairError::MissingSkillEntry(skill))
        };

        Ok(Self {
            light_vests: take(SkillId::LightVests)?,
            heavy_vests: take(SkillId::HeavyVests)?,
            weapon_treatment: take(SkillId::WeaponTreatment)?,
        })
    }

    pub fn entry(&self, skill: SkillId) -> &SkillSettings {
        match skill {
            SkillId::LightVests => &self.light_vests,
            SkillId::HeavyVests => &self.heavy_vests,
            SkillId::WeaponTreatment => &self.weapon_treatment,
        }
    }

    pub fn entry_mut(&mut self, skill: SkillId) -> &mut SkillSettings {
        match skill {
            SkillId::LightVests => &mut self.light_vests,
            SkillId::HeavyVests => &mut self.heavy_vests,
            SkillId::WeaponTreatment => &mut self.weapon_treatment,
        }
    }

    pub fn buff_settings(&self, skill: SkillId) -> &BuffSettings {
        self.entry(skill).buff_settings()
    }
}

/// Which skills a merge updated and which it skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    pub updated: Vec<SkillId>,
    pub skipped: Vec<SkillId>,
}

/// Broadcast the config's buff chances into every tracked skill.
///
/// A skill holding an unexpected settings block is logged and skipped; the
/// other skills are still updated.
pub fn apply_buff_settings(cfg: &BuffConfig, skills: &mut LiveSkillSettings) -> ApplyReport {
    let mut report = ApplyReport::default();

    for (skill, expected) in TRACKED_SKILLS {
        let entry = skills.entry_mut(skill);
        if entry.kind() != expected {
            let err = RepairError::ConfigShapeMismatch {
                skill,
                expected: expected.type_name(),
            };
            tracing::warn!("{}", err);
            report.skipped.push(skill);
            continue;
        }

        let settings = entry.buff_settings_mut();
        for field in &BROADCAST_FIELDS {
            let value = (field.read)(cfg);
            (field.write)(settings, value);
            tracing::trace!("{}.{} = {}", skill, field.name, value);
        }
        report.updated.push(skill);
    }

    report
}

/// Repair-kit bonus tables per equipment class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairKitTables {
    pub armor: BonusSettings,
    pub vest: BonusSettings,
    pub headwear: BonusSettings,
    pub weapon: BonusSettings,
}

impl Default for RepairKitTables {
    fn default() -> Self {
        Self {
            armor: BonusSettings::default_armor(),
            vest: BonusSettings::default_armor(),
            headwear: BonusSettings::default_armor(),
            weapon: BonusSettings::default_weapon(),
        }
    }
}

impl RepairKitTables {
    /// Bonus table used when a kit repair buffs an item of this class.
    ///
    /// Face covers and visors borrow the headwear table.
    pub fn table_for(&self, class: ItemClass) -> Option<&BonusSettings> {
        match class {
            ItemClass::Armor => Some(&self.armor),
            ItemClass::Vest => Some(&self.vest),
            ItemClass::Headwear | ItemClass::FaceCover | ItemClass::Visor => Some(&self.headwear),
            ItemClass::Weapon => Some(&self.weapon),
            ItemClass::Other => None,
        }
    }
}

/// Server-side repair settings the extension reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairRuntimeConfig {
    /// Armor skill XP per repair point restored with a kit
    pub armor_kit_skill_point_gain_per_repair_point_multiplier: f64,
    pub repair_kit: RepairKitTables,
}

impl Default for RepairRuntimeConfig {
    fn default() -> Self {
        Self {
            armor_kit_skill_point_gain_per_repair_point_multiplier: 0.05,
            repair_kit: RepairKitTables::default(),
        }
    }
}

/// Point armor, vest and headwear at the config's `armors` table and weapon
/// at its `weapon` table
pub fn apply_repair_kit_settings(cfg: &BuffConfigFile, repair: &mut RepairRuntimeConfig) {
    let tables = &mut repair.repair_kit;
    tables.armor = cfg.repair_kit.armors.clone();
    tables.vest = cfg.repair_kit.armors.clone();
    tables.headwear = cfg.repair_kit.armors.clone();
    tables.weapon = cfg.repair_kit.weapon.clone();
}

/// Everything the repair extension consults while serving repairs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveSettings {
    pub skills: LiveSkillSettings,
    pub repair: RepairRuntimeConfig,
}

impl LiveSettings {
    /// Merge a loaded config file into these settings
    pub fn apply(&mut self, cfg: &BuffConfigFile) -> ApplyReport {
        let report = apply_buff_settings(&cfg.buff_settings, &mut self.skills);
        apply_repair_kit_settings(cfg, &mut self.repair);
        report
    }
}
