//! Result of the base repair, as handed over by the repair pipeline

use crate::core::TemplateId;
use crate::items::RepairedItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairOutcome {
    pub repaired_item: RepairedItem,
    /// Durability points restored. The base repair should always set this;
    /// `None` is treated as an error by the buff and XP paths.
    pub repair_points: Option<f64>,
    pub repaired_by_kit: bool,
}

impl RepairOutcome {
    pub fn by_kit(repaired_item: RepairedItem, repair_points: f64) -> Self {
        Self {
            repaired_item,
            repair_points: Some(repair_points),
            repaired_by_kit: true,
        }
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.repaired_item.template_id
    }
}
