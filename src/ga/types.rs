//! Binary chromosome representation.
//!
//! A [`Chromosome`] is a selection vector over the items of a
//! [`KnapsackInstance`](crate::KnapsackInstance): gene `i` set means item `i`
//! is packed. Chromosomes are always owned; operators never alias a parent.

use rand::Rng;
use std::fmt;

/// A candidate knapsack solution encoded as one binary gene per item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// The empty selection (every gene 0) over `len` items.
    pub fn zeros(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    /// Draws every gene independently and uniformly from {0, 1}.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Returns whether item `index` is selected.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn is_selected(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Sets gene `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, selected: bool) {
        self.genes[index] = selected;
    }

    /// Flips gene `index` (0 ↔ 1).
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of all selected items, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// Number of selected items.
    pub fn count_selected(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Genes as `0`/`1` values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self { genes }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}
