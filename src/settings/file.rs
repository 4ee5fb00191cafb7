//! Shape of the buff config file
//!
//! Key spellings follow the file on disk: PascalCase for the buff chance
//! block, camelCase for `repairKit`. Bonus tables also accept the camelCase
//! spellings used by the server's own repair config.

use crate::items::Rarity;
use crate::random::WeightTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root of `buffs.jsonc`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffConfigFile {
    #[serde(rename = "BuffSettings")]
    pub buff_settings: BuffConfig,
    #[serde(rename = "repairKit")]
    pub repair_kit: RepairKitConfig,
}

/// Buff chance tuning shared by every repair skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuffConfig {
    /// Chance added per skill level (scaled by the durability multiplier)
    pub common_buff_chance_level_bonus: f64,
    /// Base chance before skill level is considered
    pub common_buff_min_chance_value: f64,
    pub current_durability_loss_to_remove_buff: f64,
    pub max_durability_loss_to_remove_buff: f64,
    #[serde(rename = "RareBuffChanceCoff")]
    pub rare_buff_chance_coefficient: f64,
    /// Restored durability fraction at which the level bonus is fully earned
    pub received_durability_max_percent: f64,
}

impl BuffConfig {
    /// Validate values the buff formula divides by or treats as chances
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            (
                "CommonBuffChanceLevelBonus",
                self.common_buff_chance_level_bonus,
            ),
            ("CommonBuffMinChanceValue", self.common_buff_min_chance_value),
            (
                "CurrentDurabilityLossToRemoveBuff",
                self.current_durability_loss_to_remove_buff,
            ),
            (
                "MaxDurabilityLossToRemoveBuff",
                self.max_durability_loss_to_remove_buff,
            ),
            ("RareBuffChanceCoff", self.rare_buff_chance_coefficient),
            (
                "ReceivedDurabilityMaxPercent",
                self.received_durability_max_percent,
            ),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        if self.received_durability_max_percent <= 0.0 {
            return Err(format!(
                "ReceivedDurabilityMaxPercent must be > 0, got {}",
                self.received_durability_max_percent
            ));
        }

        Ok(())
    }
}

/// Repair-kit bonus tables as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairKitConfig {
    /// Shared by armor, vests and headwear
    pub armors: BonusSettings,
    pub weapon: BonusSettings,
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    #[serde(alias = "Min")]
    pub min: f64,
    #[serde(alias = "Max")]
    pub max: f64,
}

impl MinMax {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Value and activation ranges for one bonus type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusValues {
    #[serde(
        rename = "valuesMinMax",
        alias = "ValuesMinMax",
        alias = "valueRange"
    )]
    pub values_min_max: MinMax,
    /// Buff stays active above this percent of the item's durability
    #[serde(
        rename = "activeDurabilityPercentMinMax",
        alias = "ActiveDurabilityPercentMinMax",
        alias = "activeDurabilityPercentRange"
    )]
    pub active_durability_percent_min_max: MinMax,
}

/// Bonus table for one equipment class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusSettings {
    #[serde(rename = "RarityWeight", alias = "rarityWeight")]
    pub rarity_weight: WeightTable,
    #[serde(rename = "BonusTypeWeight", alias = "bonusTypeWeight")]
    pub bonus_type_weight: WeightTable,
    #[serde(rename = "Common", alias = "common", default)]
    pub common: HashMap<String, BonusValues>,
    #[serde(rename = "Rare", alias = "rare", default)]
    pub rare: HashMap<String, BonusValues>,
}

impl BonusSettings {
    /// Bonus values for one rarity tier
    pub fn tier(&self, rarity: Rarity) -> &HashMap<String, BonusValues> {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Rare => &self.rare,
        }
    }

    /// Stock armor table: damage reduction only
    pub fn default_armor() -> Self {
        Self {
            rarity_weight: WeightTable::new().with("Common", 5.0).with("Rare", 1.0),
            bonus_type_weight: WeightTable::new().with("DamageReduction", 1.0),
            common: HashMap::from([(
                "DamageReduction".to_string(),
                BonusValues {
                    values_min_max: MinMax::new(1.0, 3.0),
                    active_durability_percent_min_max: MinMax::new(5.0, 25.0),
                },
            )]),
            rare: HashMap::from([(
                "DamageReduction".to_string(),
                BonusValues {
                    values_min_max: MinMax::new(3.0, 5.0),
                    active_durability_percent_min_max: MinMax::new(5.0, 15.0),
                },
            )]),
        }
    }

    /// Stock weapon table: spread and malfunction protection
    pub fn default_weapon() -> Self {
        let common = BonusValues {
            values_min_max: MinMax::new(1.0, 5.0),
            active_durability_percent_min_max: MinMax::new(5.0, 25.0),
        };
        let rare = BonusValues {
            values_min_max: MinMax::new(5.0, 10.0),
            active_durability_percent_min_max: MinMax::new(5.0, 15.0),
        };

        Self {
            rarity_weight: WeightTable::new().with("Common", 5.0).with("Rare", 1.0),
            bonus_type_weight: WeightTable::new()
                .with("WeaponSpread", 1.0)
                .with("MalfunctionProtections", 1.0),
            common: HashMap::from([
                ("WeaponSpread".to_string(), common),
                ("MalfunctionProtections".to_string(), common),
            ]),
            rare: HashMap::from([
                ("WeaponSpread".to_string(), rare),
                ("MalfunctionProtections".to_string(), rare),
            ]),
        }
    }
}
