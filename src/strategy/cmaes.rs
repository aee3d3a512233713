//! # Cmaes
//!
//! The elementary (mu/mu_I, lambda) CMA-ES. Each generation samples `lambda`
//! offspring around the parent from `N(parent, sigma^2 C)`, keeps the best
//! `mu`, moves the parent to their mean and adapts `C` and `sigma` from two
//! exponentially smoothed evolution paths.
//!
//! ## Example
//!
//! ```rust
//! use cmaes_elementary::{
//!     rng::RandomNumberGenerator,
//!     strategy::{Cmaes, CmaesConfig, Optimizer},
//! };
//! use nalgebra::DVector;
//!
//! let sphere = |x: &DVector<f64>| x.norm_squared();
//! let config = CmaesConfig::new(1, 4);
//! let cmaes = Cmaes::default();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! let initial = vec![DVector::from_vec(vec![1.0, -1.0])];
//! let mut state = cmaes.create_state(&config, &sphere, &initial).unwrap();
//! let mut population = initial.clone();
//!
//! let terminate =
//!     cmaes.advance_generation(&sphere, &mut state, &mut population, &config, &mut rng);
//! assert!(!terminate);
//! assert_eq!(population.len(), 1);
//! ```

use nalgebra::{Cholesky, DVector};
use tracing::{debug, error};

use super::{config::CmaesConfig, state::CmaesState, Optimizer};
use crate::{
    error::{CmaError, OptionExt, Result},
    evolution::Objective,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TruncationSelection},
};

#[derive(Debug, Clone, Default)]
pub struct Cmaes {
    selection: TruncationSelection,
}

impl Cmaes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Optimizer for Cmaes {
    type Config = CmaesConfig;
    type State = CmaesState;

    fn create_state<O: Objective>(
        &self,
        config: &CmaesConfig,
        _objective: &O,
        initial_population: &[DVector<f64>],
    ) -> Result<CmaesState> {
        config.validate()?;

        let seed = initial_population
            .first()
            .ok_or_else_cma(|| CmaError::EmptyPopulation)?;
        let dimension = seed.len();

        if dimension == 0 {
            return Err(CmaError::InvalidConfiguration(
                "Individuals must have at least one component".to_string(),
            ));
        }

        if let Some(other) = initial_population.iter().find(|x| x.len() != dimension) {
            return Err(CmaError::DimensionMismatch {
                expected: dimension,
                found: other.len(),
            });
        }

        let constants = config.resolve(dimension);
        debug!(
            dimension,
            mu = config.get_mu(),
            lambda = config.get_lambda(),
            tau = constants.tau,
            tau_c = constants.tau_c,
            tau_sigma = constants.tau_sigma,
            "created CMA-ES state"
        );

        Ok(CmaesState::new(config.get_mu(), seed, constants))
    }

    fn advance_generation<O: Objective>(
        &self,
        objective: &O,
        state: &mut CmaesState,
        population: &mut Vec<DVector<f64>>,
        config: &CmaesConfig,
        rng: &mut RandomNumberGenerator,
    ) -> bool {
        let n = state.dimension;
        let mu = config.get_mu();
        let lambda = config.get_lambda();

        if let Err(e) = config.validate() {
            error!(
                generation = state.generation,
                error = %e,
                "invalid configuration, terminating"
            );
            return true;
        }

        if mu != state.fitpop.len() {
            error!(
                generation = state.generation,
                mu,
                parents = state.fitpop.len(),
                "configuration does not match the state, terminating"
            );
            return true;
        }

        // Round-off from the rank-one update leaves C slightly asymmetric.
        let symmetric = state.symmetrized_covariance();
        let factor = match Cholesky::new(symmetric.clone()) {
            Some(cholesky) if symmetric.iter().all(|v| v.is_finite()) => cholesky.l(),
            _ => {
                error!(
                    generation = state.generation,
                    matrix = %symmetric,
                    "covariance matrix is not positive-definite, terminating"
                );
                return true;
            }
        };

        let mut offspring = Vec::with_capacity(lambda);
        let mut normals = Vec::with_capacity(lambda);
        let mut steps = Vec::with_capacity(lambda);
        let mut fitness = Vec::with_capacity(lambda);

        for _ in 0..lambda {
            let normal = rng.fetch_standard_normal(n);
            let step = &factor * &normal * state.sigma;
            let child = &state.parent + &step;

            fitness.push(objective.evaluate(&child));
            offspring.push(child);
            normals.push(normal);
            steps.push(step);
        }

        let selected = match self.selection.select(&fitness, mu) {
            Ok(selected) => selected,
            Err(e) => {
                error!(generation = state.generation, error = %e, "selection failed, terminating");
                return true;
            }
        };

        population.clear();
        state.fitpop.clear();
        let mut mean_step = DVector::zeros(n);
        let mut mean_normal = DVector::zeros(n);
        for &idx in &selected {
            population.push(offspring[idx].clone());
            state.fitpop.push(fitness[idx]);
            mean_step += &steps[idx];
            mean_normal += &normals[idx];
        }
        mean_step /= mu as f64;
        mean_normal /= mu as f64;

        let mu = mu as f64;
        let (tau, tau_c, tau_sigma) = (state.tau, state.tau_c, state.tau_sigma);

        state.parent += &mean_step;

        let path_gain = (mu / tau * (2.0 - 1.0 / tau)).sqrt() / state.sigma;
        state.path = &state.path * (1.0 - 1.0 / tau) + &mean_step * path_gain;

        state.covariance =
            symmetric * (1.0 - 1.0 / tau_c) + (&state.path * state.path.transpose()) / tau_c;

        let sigma_gain = (mu / tau_sigma * (2.0 - 1.0 / tau_sigma)).sqrt();
        state.sigma_path = &state.sigma_path * (1.0 - 1.0 / tau_sigma) + &mean_normal * sigma_gain;

        let n = n as f64;
        state.sigma *= ((state.sigma_path.norm_squared() - n) / (2.0 * n * n.sqrt())).exp();

        state.fittest = population[0].clone();
        state.generation += 1;

        debug!(
            generation = state.generation,
            sigma = state.sigma,
            best = state.fitpop[0],
            "advanced CMA-ES generation"
        );

        false
    }

    fn population_size(&self, config: &CmaesConfig) -> usize {
        config.get_mu()
    }

    fn default_options() -> CmaesConfig {
        CmaesConfig::default()
    }
}
