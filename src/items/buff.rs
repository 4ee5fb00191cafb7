//! Repair buffs attached to an item's current state

use crate::core::RepairError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rarity tier of a buff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
        }
    }
}

impl FromStr for Rarity {
    type Err = RepairError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Common" => Ok(Rarity::Common),
            "Rare" => Ok(Rarity::Rare),
            other => Err(RepairError::InvalidConfiguration(format!(
                "unknown buff rarity '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stat a buff modifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusType {
    /// Armor: less damage taken
    DamageReduction,
    /// Weapon: fewer malfunctions
    MalfunctionProtections,
    /// Weapon: tighter spread
    WeaponSpread,
    /// Weapon: more damage
    WeaponDamage,
}

impl BonusType {
    pub const ALL: [BonusType; 4] = [
        BonusType::DamageReduction,
        BonusType::MalfunctionProtections,
        BonusType::WeaponSpread,
        BonusType::WeaponDamage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BonusType::DamageReduction => "DamageReduction",
            BonusType::MalfunctionProtections => "MalfunctionProtections",
            BonusType::WeaponSpread => "WeaponSpread",
            BonusType::WeaponDamage => "WeaponDamage",
        }
    }
}

impl FromStr for BonusType {
    type Err = RepairError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        BonusType::ALL
            .into_iter()
            .find(|bonus| bonus.label() == label)
            .ok_or_else(|| {
                RepairError::InvalidConfiguration(format!("unknown bonus type '{}'", label))
            })
    }
}

impl fmt::Display for BonusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Temporary stat modifier on a repaired item.
///
/// The buff stays active while the item's durability is at or above
/// `threshold_durability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub rarity: Rarity,
    pub bonus_type: BonusType,
    pub value: f64,
    pub threshold_durability: f64,
}
