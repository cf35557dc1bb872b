//! Immutable weighted lookup tables.

use std::collections::BTreeMap;

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use thiserror::Error;

/// Reasons a weighted table cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightTableError {
    #[error("{table} table has no entries")]
    Empty { table: &'static str },
    #[error("{table} table has an invalid weight {weight} for '{entry}'")]
    InvalidWeight {
        table: &'static str,
        entry: String,
        weight: f64,
    },
    #[error("{table} table weights sum to zero")]
    ZeroTotal { table: &'static str },
}

/// A fixed set of values sampled in proportion to their weights.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Clone + std::fmt::Display> WeightedTable<T> {
    /// Builds a table, rejecting empty lists, negative or non-finite weights,
    /// and lists whose weights sum to zero.
    pub fn new(
        table: &'static str,
        entries: impl IntoIterator<Item = (T, f64)>,
    ) -> Result<Self, WeightTableError> {
        let (values, weights): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();

        if values.is_empty() {
            return Err(WeightTableError::Empty { table });
        }
        if let Some((value, weight)) = values
            .iter()
            .zip(&weights)
            .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
        {
            return Err(WeightTableError::InvalidWeight {
                table,
                entry: value.to_string(),
                weight: *weight,
            });
        }

        let index =
            WeightedIndex::new(&weights).map_err(|_| WeightTableError::ZeroTotal { table })?;

        Ok(Self { values, index })
    }

    /// Builds a table from a configuration map (iteration order of the map).
    pub fn from_map(
        table: &'static str,
        weights: &BTreeMap<T, f64>,
    ) -> Result<Self, WeightTableError>
    where
        T: Ord,
    {
        Self::new(table, weights.iter().map(|(k, w)| (k.clone(), *w)))
    }
}

impl<T: Clone> WeightedTable<T> {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)].clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
