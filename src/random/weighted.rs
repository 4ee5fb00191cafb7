//! Weighted label tables and sampling
//!
//! Rarity and bonus-type draws both come from a label → weight table in the
//! config file. Entries keep document order so a fixed random source always
//! walks the same sequence.

use crate::core::{RepairError, Result};
use rand::Rng;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label → weight mapping with stable insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    entries: Vec<(String, f64)>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, weight: f64) -> Self {
        self.insert(label, weight);
        self
    }

    /// Insert or replace a weight. A replaced label keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, weight: f64) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = weight,
            None => self.entries.push((label, weight)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, w)| *w)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, w)| (l.as_str(), *w))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights after validation.
    ///
    /// Fails if the table is empty, holds a negative or non-finite weight, or
    /// has no strictly positive weight.
    pub fn checked_total(&self) -> Result<f64> {
        if self.entries.is_empty() {
            return Err(RepairError::InvalidConfiguration(
                "weight table is empty".into(),
            ));
        }

        let mut total = 0.0;
        for (label, weight) in &self.entries {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(RepairError::InvalidConfiguration(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    label, weight
                )));
            }
            total += weight;
        }

        if !total.is_finite() {
            return Err(RepairError::InvalidConfiguration(
                "weight table total overflows".into(),
            ));
        }
        if total <= 0.0 {
            return Err(RepairError::InvalidConfiguration(
                "weight table has no positive weight".into(),
            ));
        }

        Ok(total)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = WeightTable::new();
        for (label, weight) in iter {
            table.insert(label, weight);
        }
        table
    }
}

impl Serialize for WeightTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(l, w)| (l, w)))
    }
}

impl<'de> Deserialize<'de> for WeightTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct WeightTableVisitor;

        impl<'de> Visitor<'de> for WeightTableVisitor {
            type Value = WeightTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of label to numeric weight")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<WeightTable, A::Error> {
                let mut table = WeightTable::new();
                while let Some((label, weight)) = map.next_entry::<String, f64>()? {
                    table.insert(label, weight);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(WeightTableVisitor)
    }
}

/// Draw one label with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, total)` and walks the table in insertion
/// order until the running total exceeds `r`.
pub fn sample_weighted<'a>(weights: &'a WeightTable, rng: &mut impl Rng) -> Result<&'a str> {
    let total = weights.checked_total()?;
    let roll = rng.gen_range(0.0..total);

    let mut running = 0.0;
    for (label, weight) in weights.iter() {
        running += weight;
        if running > roll {
            return Ok(label);
        }
    }

    // Rounding can leave the running total a hair below the roll
    weights
        .iter()
        .filter(|(_, weight)| *weight > 0.0)
        .last()
        .map(|(label, _)| label)
        .ok_or_else(|| RepairError::InvalidConfiguration("weight table has no positive weight".into()))
}
