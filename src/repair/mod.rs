//! Buff and bonus-XP decisions for finished repairs
//!
//! Consumes the [`RepairOutcome`] produced by the base repair and decides
//! whether the item earns a buff and the player earns extra armor XP.

pub mod eligibility;
pub mod instantiate;
pub mod outcome;
pub mod pipeline;
pub mod skill_points;

pub use eligibility::{
    buff_probability, durability_multiplier, evaluate, restored_fraction, BuffDecision, Rejection,
    FACE_COVER_MIN_PROGRESS,
};
pub use instantiate::{apply_buff, instantiate};
pub use outcome::RepairOutcome;
pub use pipeline::{RepairEnhancement, RepairEnhancer};
pub use skill_points::{award_skill_points, compute_bonus_xp};
