//! Roll a concrete buff from a bonus table

use crate::core::{RepairError, Result};
use crate::items::{BonusType, Buff, Rarity, RepairedItem};
use crate::random::{percent_of_value, sample_weighted, uniform_inclusive};
use crate::settings::BonusSettings;
use rand::Rng;

/// Decimal places kept on a buff's threshold durability
const THRESHOLD_DECIMALS: u32 = 0;

/// Draw rarity, bonus type, value and activation threshold.
///
/// Rarity and bonus type are drawn independently. The threshold is a
/// percentage of `current_durability`.
pub fn instantiate(
    bonus: &BonusSettings,
    current_durability: f64,
    rng: &mut impl Rng,
) -> Result<Buff> {
    let rarity_label = sample_weighted(&bonus.rarity_weight, rng)?;
    let bonus_label = sample_weighted(&bonus.bonus_type_weight, rng)?;

    let rarity: Rarity = rarity_label.parse()?;
    let bonus_type: BonusType = bonus_label.parse()?;

    let values = bonus.tier(rarity).get(bonus_label).ok_or_else(|| {
        RepairError::InvalidConfiguration(format!(
            "{} bonus table has a weight but no values for {}",
            rarity, bonus_label
        ))
    })?;

    let value = uniform_inclusive(values.values_min_max.min, values.values_min_max.max, rng)?;

    let active = values.active_durability_percent_min_max;
    let threshold_percent = uniform_inclusive(active.min, active.max, rng)?;

    Ok(Buff {
        rarity,
        bonus_type,
        value,
        threshold_durability: percent_of_value(
            threshold_percent,
            current_durability,
            THRESHOLD_DECIMALS,
        ),
    })
}

/// Roll a buff for `item` and attach it, replacing any previous buff
pub fn apply_buff<'a>(
    bonus: &BonusSettings,
    item: &'a mut RepairedItem,
    rng: &mut impl Rng,
) -> Result<&'a Buff> {
    let buff = instantiate(bonus, item.durability, rng)?;
    Ok(&*item.buff.insert(buff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemId, TemplateId};
    use crate::random::WeightTable;
    use crate::settings::{BonusValues, MinMax};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn values(value: (f64, f64), active: (f64, f64)) -> BonusValues {
        BonusValues {
            values_min_max: MinMax::new(value.0, value.1),
            active_durability_percent_min_max: MinMax::new(active.0, active.1),
        }
    }

    fn table() -> BonusSettings {
        BonusSettings {
            rarity_weight: WeightTable::new().with("Common", 3.0).with("Rare", 1.0),
            bonus_type_weight: WeightTable::new()
                .with("DamageReduction", 1.0)
                .with("WeaponSpread", 1.0),
            common: HashMap::from([
                ("DamageReduction".to_string(), values((1.0, 3.0), (5.0, 25.0))),
                ("WeaponSpread".to_string(), values((2.0, 4.0), (10.0, 20.0))),
            ]),
            rare: HashMap::from([
                ("DamageReduction".to_string(), values((3.0, 5.0), (5.0, 15.0))),
                ("WeaponSpread".to_string(), values((6.0, 8.0), (10.0, 12.0))),
            ]),
        }
    }

    #[test]
    fn test_buff_within_configured_ranges() {
        let table = table();
        let durability = 80.0;
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..500 {
            let buff = instantiate(&table, durability, &mut rng).unwrap();
            assert!(table.rarity_weight.contains(buff.rarity.label()));
            assert!(table.bonus_type_weight.contains(buff.bonus_type.label()));

            let entry = table.tier(buff.rarity)[buff.bonus_type.label()];
            assert!(entry.values_min_max.contains(buff.value));

            let active = entry.active_durability_percent_min_max;
            let low = percent_of_value(active.min, durability, 0);
            let high = percent_of_value(active.max, durability, 0);
            assert!(buff.threshold_durability >= low && buff.threshold_durability <= high);
            assert_eq!(buff.threshold_durability.fract(), 0.0);
        }
    }

    #[test]
    fn test_both_rarities_drawn() {
        let table = table();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let rarities: Vec<Rarity> = (0..200)
            .map(|_| instantiate(&table, 50.0, &mut rng).unwrap().rarity)
            .collect();
        assert!(rarities.contains(&Rarity::Common));
        assert!(rarities.contains(&Rarity::Rare));
    }

    #[test]
    fn test_lowest_roll_picks_minimums() {
        let mut rng = StepRng::new(0, 0);
        let buff = instantiate(&table(), 80.0, &mut rng).unwrap();

        assert_eq!(buff.rarity, Rarity::Common);
        assert_eq!(buff.bonus_type, BonusType::DamageReduction);
        assert_eq!(buff.value, 1.0);
        // 5% of 80
        assert_eq!(buff.threshold_durability, 4.0);
    }

    #[test]
    fn test_weighted_type_without_values_is_invalid() {
        let mut table = table();
        table.rare.remove("DamageReduction");
        table.rarity_weight = WeightTable::new().with("Rare", 1.0);
        table.bonus_type_weight = WeightTable::new().with("DamageReduction", 1.0);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            instantiate(&table, 50.0, &mut rng),
            Err(RepairError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unknown_bonus_type_is_invalid() {
        let mut table = table();
        table.bonus_type_weight = WeightTable::new().with("Stamina", 1.0);
        table
            .common
            .insert("Stamina".to_string(), values((1.0, 2.0), (5.0, 10.0)));

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(instantiate(&table, 50.0, &mut rng).is_err());
    }

    #[test]
    fn test_overflowing_value_range_is_invalid() {
        let mut table = table();
        table.rarity_weight = WeightTable::new().with("Common", 1.0);
        table.bonus_type_weight = WeightTable::new().with("DamageReduction", 1.0);
        table.common.insert(
            "DamageReduction".to_string(),
            values((-1e308, 1e308), (5.0, 25.0)),
        );

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            instantiate(&table, 50.0, &mut rng),
            Err(RepairError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_apply_buff_overwrites_previous() {
        let table = table();
        let mut item = RepairedItem::new(ItemId::new("i1"), TemplateId::new("vest"), 60.0);
        item.buff = Some(Buff {
            rarity: Rarity::Rare,
            bonus_type: BonusType::WeaponDamage,
            value: 99.0,
            threshold_durability: 1.0,
        });

        let mut rng = StepRng::new(0, 0);
        let buff = apply_buff(&table, &mut item, &mut rng).unwrap().clone();

        assert_eq!(item.buff, Some(buff));
        assert_eq!(item.buff.as_ref().map(|b| b.bonus_type), Some(BonusType::DamageReduction));
    }
}
