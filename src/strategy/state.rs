use nalgebra::{DMatrix, DVector};

use super::{config::TimeConstants, OptimizerState};

/// The evolving search distribution of one CMA-ES run.
///
/// A state is created once by [`Cmaes::create_state`](super::Cmaes) and then
/// mutated in place once per generation. It is owned by the loop driving the
/// run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct CmaesState {
    /// Problem dimension `N`.
    pub dimension: usize,
    /// Distribution mean, the current best estimate of the optimum.
    pub parent: DVector<f64>,
    /// Covariance shape matrix `C`.
    pub covariance: DMatrix<f64>,
    /// Global step size.
    pub sigma: f64,
    /// Evolution path of the covariance matrix (`s`).
    pub path: DVector<f64>,
    /// Evolution path of the step size (`s_sigma`), in standardized coordinates.
    pub sigma_path: DVector<f64>,
    /// Fitness of the current parent population, best first.
    pub fitpop: Vec<f64>,
    /// Best member of the current parent population.
    pub fittest: DVector<f64>,
    /// Resolved time constant of `path`.
    pub tau: f64,
    /// Resolved time constant of `covariance`.
    pub tau_c: f64,
    /// Resolved time constant of `sigma_path`.
    pub tau_sigma: f64,
    /// Number of completed generations.
    pub generation: usize,
}

impl CmaesState {
    pub(crate) fn new(mu: usize, seed: &DVector<f64>, constants: TimeConstants) -> Self {
        let dimension = seed.len();
        Self {
            dimension,
            parent: seed.clone(),
            covariance: DMatrix::identity(dimension, dimension),
            sigma: 1.0,
            path: DVector::zeros(dimension),
            sigma_path: DVector::zeros(dimension),
            fitpop: vec![f64::INFINITY; mu],
            fittest: seed.clone(),
            tau: constants.tau,
            tau_c: constants.tau_c,
            tau_sigma: constants.tau_sigma,
            generation: 0,
        }
    }

    /// `(C + C^T) / 2`, the matrix whose Cholesky factor drives sampling.
    pub fn symmetrized_covariance(&self) -> DMatrix<f64> {
        (&self.covariance + self.covariance.transpose()) * 0.5
    }
}

impl OptimizerState for CmaesState {
    fn value(&self) -> f64 {
        self.fitpop.first().copied().unwrap_or(f64::INFINITY)
    }

    fn fittest(&self) -> &DVector<f64> {
        &self.fittest
    }

    fn generation(&self) -> usize {
        self.generation
    }

    fn shape_matrix(&self) -> Option<DMatrix<f64>> {
        Some(self.symmetrized_covariance())
    }
}
