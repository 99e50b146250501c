//! Remaining-ship multiset shared by the heat-map strategies.

use alloc::vec::Vec;

use crate::config::fleet_lengths;

/// Multiset of opponent ship lengths not yet known to be sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipsLeft {
    lengths: Vec<usize>,
}

impl ShipsLeft {
    /// The standard fleet, `[5, 4, 3, 3, 2]`.
    pub fn standard() -> Self {
        Self::from_lengths(fleet_lengths())
    }

    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        Self {
            lengths: lengths.into_iter().collect(),
        }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Sum of remaining lengths.
    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Remove one ship of exactly `length`. Returns `false` if none is left.
    pub fn retire(&mut self, length: usize) -> bool {
        match self.lengths.iter().position(|&l| l == length) {
            Some(idx) => {
                self.lengths.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Put a previously retired length back.
    pub fn restore(&mut self, length: usize) {
        self.lengths.push(length);
    }

    /// The single remaining length that fits in `size`, if exactly one ship
    /// (counting duplicates) is no longer than `size`.
    pub fn unique_fit(&self, size: usize) -> Option<usize> {
        let mut fits = self.lengths.iter().filter(|&&l| l <= size);
        match (fits.next(), fits.next()) {
            (Some(&len), None) => Some(len),
            _ => None,
        }
    }
}

impl Default for ShipsLeft {
    fn default() -> Self {
        Self::standard()
    }
}
