//! Item-side data: templates, repaired item state and buffs

pub mod buff;
pub mod template;

pub use buff::{BonusType, Buff, Rarity};
pub use template::{catalog_from, ItemCatalog, ItemTemplate, RepairedItem};
