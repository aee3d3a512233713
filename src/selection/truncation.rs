use std::cmp::Ordering;

use crate::error::{CmaError, Result};
use crate::selection::selection_strategy::SelectionStrategy;

/// Truncation selection for minimization.
///
/// Offspring are ranked by fitness in ascending order and the best
/// `num_to_select` are kept. The sort is stable, so equal fitness values keep
/// their sampling order. NaN fitness ranks behind every number.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncationSelection;

impl TruncationSelection {
    fn compare(a: f64, b: f64) -> Ordering {
        a.partial_cmp(&b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        })
    }
}

impl SelectionStrategy for TruncationSelection {
    fn select(&self, fitness: &[f64], num_to_select: usize) -> Result<Vec<usize>> {
        if fitness.is_empty() {
            return Err(CmaError::EmptyPopulation);
        }

        if num_to_select > fitness.len() {
            return Err(CmaError::InvalidConfiguration(format!(
                "Cannot select {} individuals out of {}",
                num_to_select,
                fitness.len()
            )));
        }

        let mut ranked: Vec<usize> = (0..fitness.len()).collect();
        ranked.sort_by(|&a, &b| Self::compare(fitness[a], fitness[b]));
        ranked.truncate(num_to_select);

        Ok(ranked)
    }
}
