//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item template identifier (database id of the item's static definition)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Inventory item instance identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Player skills this extension reads or levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillId {
    LightVests,
    HeavyVests,
    WeaponTreatment,
}

impl SkillId {
    /// Every skill whose buff settings are tracked in live settings
    pub const ALL: [SkillId; 3] = [
        SkillId::LightVests,
        SkillId::HeavyVests,
        SkillId::WeaponTreatment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillId::LightVests => "LightVests",
            SkillId::HeavyVests => "HeavyVests",
            SkillId::WeaponTreatment => "WeaponTreatment",
        }
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base class of an item template, as far as repairs care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    Armor,
    Vest,
    Headwear,
    FaceCover,
    Visor,
    Weapon,
    Other,
}

impl ItemClass {
    /// Armor-like classes: eligible for armor XP and armor buffs
    pub fn is_armor_like(&self) -> bool {
        matches!(
            self,
            ItemClass::Armor
                | ItemClass::Vest
                | ItemClass::Headwear
                | ItemClass::FaceCover
                | ItemClass::Visor
        )
    }

    /// Face covers and visors are gated on vest skill level
    pub fn is_face_cover_like(&self) -> bool {
        matches!(self, ItemClass::FaceCover | ItemClass::Visor)
    }
}

/// Armor weight class from the item template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArmorType {
    Heavy,
    Light,
    #[default]
    None,
}

impl ArmorType {
    /// Vest skill that governs repairs of this armor type.
    ///
    /// Anything that is not `Heavy` (including items without an armor type)
    /// levels `LightVests`.
    pub fn governing_skill(&self) -> SkillId {
        match self {
            ArmorType::Heavy => SkillId::HeavyVests,
            ArmorType::Light | ArmorType::None => SkillId::LightVests,
        }
    }
}
