//! # Optimizer
//!
//! The `Optimizer` trait defines the interface of a strategy that can be
//! plugged into the evolution driver: it creates a state from an initial
//! population and advances that state one generation at a time.
pub mod cmaes;
pub mod config;
pub mod state;

use std::fmt::Debug;

use nalgebra::{DMatrix, DVector};

use crate::{error::Result, evolution::Objective, rng::RandomNumberGenerator};

/// Read access the driver needs on any strategy state.
pub trait OptimizerState: Debug + Clone {
    /// Best fitness of the current parent population.
    fn value(&self) -> f64;

    /// Best individual of the current parent population.
    fn fittest(&self) -> &DVector<f64>;

    /// Number of completed generations.
    fn generation(&self) -> usize;

    /// The shape matrix the strategy factorizes each generation, for
    /// strategies that adapt one.
    fn shape_matrix(&self) -> Option<DMatrix<f64>> {
        None
    }
}

/// # Optimizer
///
/// A minimizing strategy over real vectors.
pub trait Optimizer
where
    Self: Debug + Clone + Send + Sync,
{
    type Config: Debug + Clone;
    type State: OptimizerState;

    /// Creates the state of a new run.
    ///
    /// ## Parameters
    ///
    /// - `config`: The strategy parameters.
    /// - `objective`: The function to be minimized.
    /// - `initial_population`: Candidate solutions fixing the problem dimension.
    ///
    /// ## Errors
    ///
    /// This method fails if the configuration is invalid or the initial
    /// population is empty or of inconsistent dimension.
    fn create_state<O: Objective>(
        &self,
        config: &Self::Config,
        objective: &O,
        initial_population: &[DVector<f64>],
    ) -> Result<Self::State>;

    /// Performs one generation, mutating `state` and overwriting `population`
    /// with the selected parents, best first.
    ///
    /// ## Returns
    ///
    /// `true` if the run must terminate because of an unrecoverable numeric
    /// failure or a `config` that does not match `state`, in which case
    /// `state` is left untouched. `false` otherwise.
    fn advance_generation<O: Objective>(
        &self,
        objective: &O,
        state: &mut Self::State,
        population: &mut Vec<DVector<f64>>,
        config: &Self::Config,
        rng: &mut RandomNumberGenerator,
    ) -> bool;

    /// Number of individuals kept in the population buffer between generations.
    fn population_size(&self, config: &Self::Config) -> usize;

    /// Default parameters of the strategy.
    fn default_options() -> Self::Config;
}

pub use cmaes::Cmaes;
pub use config::{CmaesConfig, CmaesConfigBuilder, TimeConstants};
pub use state::CmaesState;
