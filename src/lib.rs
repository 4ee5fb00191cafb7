//! Repair Expansion - buffs and bonus XP for kit repairs
//!
//! When a player repairs armor with a kit, the server may grant extra armor
//! skill XP and roll a temporary buff onto the item. This crate owns those
//! decisions: config loading and merging ([`settings`]), weighted draws
//! ([`random`]) and the per-repair pipeline ([`repair`]).

pub mod core;
pub mod items;
pub mod random;
pub mod repair;
pub mod settings;
pub mod skills;
