//! Item templates and repaired item state

use crate::core::{ArmorType, ItemClass, ItemId, TemplateId};
use crate::items::Buff;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static item definition from the item database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: TemplateId,
    pub class: ItemClass,
    #[serde(default)]
    pub armor_type: ArmorType,
    pub max_durability: f64,
}

impl ItemTemplate {
    pub fn new(id: impl Into<TemplateId>, class: ItemClass, max_durability: f64) -> Self {
        Self {
            id: id.into(),
            class,
            armor_type: ArmorType::None,
            max_durability,
        }
    }

    pub fn with_armor_type(mut self, armor_type: ArmorType) -> Self {
        self.armor_type = armor_type;
        self
    }
}

/// Read-only template lookup
pub trait ItemCatalog {
    fn template(&self, id: &TemplateId) -> Option<&ItemTemplate>;
}

impl ItemCatalog for HashMap<TemplateId, ItemTemplate> {
    fn template(&self, id: &TemplateId) -> Option<&ItemTemplate> {
        self.get(id)
    }
}

/// Build a catalog keyed by template id
pub fn catalog_from(templates: impl IntoIterator<Item = ItemTemplate>) -> HashMap<TemplateId, ItemTemplate> {
    templates
        .into_iter()
        .map(|template| (template.id.clone(), template))
        .collect()
}

/// Current state of an inventory item after the base repair ran
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairedItem {
    pub id: ItemId,
    pub template_id: TemplateId,
    /// Current durability
    pub durability: f64,
    /// Current durability cap (drops as the item wears)
    pub max_durability: f64,
    #[serde(default)]
    pub buff: Option<Buff>,
}

impl RepairedItem {
    pub fn new(id: ItemId, template_id: TemplateId, durability: f64) -> Self {
        Self {
            id,
            template_id,
            durability,
            max_durability: durability,
            buff: None,
        }
    }

    /// Attach a buff, replacing any previous one. Returns the replaced buff.
    pub fn attach_buff(&mut self, buff: Buff) -> Option<Buff> {
        self.buff.replace(buff)
    }
}
