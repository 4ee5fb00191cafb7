pub mod error;
pub mod types;

pub use error::{RepairError, Result};
pub use types::{ArmorType, ItemClass, ItemId, SkillId, TemplateId};
