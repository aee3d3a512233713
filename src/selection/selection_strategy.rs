use std::fmt::Debug;

use crate::error::Result;

/// Trait for selection strategies of an evolution strategy.
///
/// A selection strategy looks at the fitness of a sampled generation and
/// decides which offspring survive. It returns offspring indices rather than
/// the individuals themselves, as the caller also needs the mutation steps
/// that produced each survivor.
///
/// # Examples
///
/// ```
/// use cmaes_elementary::selection::{SelectionStrategy, TruncationSelection};
/// use cmaes_elementary::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3];
///
///     let selected = TruncationSelection.select(&fitness, 2)?;
///
///     assert_eq!(selected, vec![2, 0]);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` offspring indices, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fitness slice is empty
    /// - More individuals are requested than are available
    fn select(&self, fitness: &[f64], num_to_select: usize) -> Result<Vec<usize>>;
}
