use nalgebra::DVector;
use tracing::{info, warn};

use super::{
    objective::Objective,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{CmaError, Result},
    rng::RandomNumberGenerator,
    strategy::{Optimizer, OptimizerState},
};

/// Represents the result of a run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<State> {
    /// The best individual seen during the whole run.
    pub best: DVector<f64>,
    /// The objective value of `best`.
    pub fitness: f64,
    /// Number of completed generations.
    pub generations: usize,
    /// Whether the run stopped on the absolute tolerance.
    pub converged: bool,
    /// The final strategy state.
    pub state: State,
}

/// Drives an optimizer over multiple generations against an objective.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Opt, Obj>
where
    Opt: Optimizer,
    Obj: Objective,
{
    optimizer: Opt,
    objective: Obj,
}

impl<Opt, Obj> EvolutionLauncher<Opt, Obj>
where
    Opt: Optimizer,
    Obj: Objective,
{
    /// Creates a new `EvolutionLauncher` instance with the specified optimizer and objective.
    pub fn new(optimizer: Opt, objective: Obj) -> Self {
        Self {
            optimizer,
            objective,
        }
    }

    /// Minimizes the objective starting from `initial_population`.
    ///
    /// # Arguments
    ///
    /// * `options` - Options controlling the run.
    /// * `config` - Parameters of the optimizer.
    /// * `initial_population` - Starting candidates; the first one seeds the search.
    /// * `rng` - The random source used for sampling.
    ///
    /// # Returns
    ///
    /// The best individual seen over all generations. The best fitness is
    /// tracked across generations and never worsens, even though the parent
    /// population of a single generation may.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The number of generations or the tolerance in options is invalid
    /// - The optimizer rejects the configuration or the initial population
    /// - The covariance matrix collapses (a hard failure of the run)
    /// - A generation produces a NaN best fitness
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        config: &Opt::Config,
        initial_population: Vec<DVector<f64>>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Opt::State>> {
        if options.get_num_generations() == 0 {
            return Err(CmaError::InvalidConfiguration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if let Some(tolerance) = options.get_abs_tolerance() {
            if tolerance.is_nan() || tolerance < 0.0 {
                return Err(CmaError::InvalidConfiguration(format!(
                    "Absolute tolerance must be non-negative, got {}",
                    tolerance
                )));
            }
        }

        let mut state =
            self.optimizer
                .create_state(config, &self.objective, &initial_population)?;

        let mut population = initial_population;
        population.truncate(self.optimizer.population_size(config));

        let mut best = state.fittest().clone();
        let mut best_fitness = self.objective.evaluate(&best);
        let mut converged = false;

        info!(
            max_generations = options.get_num_generations(),
            dimension = best.len(),
            "starting evolution"
        );

        for generation in 0..options.get_num_generations() {
            let previous = state.value();

            if self.optimizer.advance_generation(
                &self.objective,
                &mut state,
                &mut population,
                config,
                rng,
            ) {
                let matrix = state
                    .shape_matrix()
                    .map(|m| m.to_string())
                    .unwrap_or_default();
                warn!(generation, "numeric collapse, aborting run");
                return Err(CmaError::NumericCollapse { generation, matrix });
            }

            let current = state.value();
            if current.is_nan() {
                return Err(CmaError::InvalidNumericValue(format!(
                    "Best fitness is NaN in generation {}",
                    generation
                )));
            }

            if current < best_fitness || best_fitness.is_nan() {
                best = state.fittest().clone();
                best_fitness = current;
            }

            match options.get_log_level() {
                LogLevel::Minimal => info!(generation, current, best = best_fitness, "generation"),
                LogLevel::Verbose => info!(
                    generation,
                    current,
                    best = best_fitness,
                    fittest = ?state.fittest().as_slice(),
                    "generation"
                ),
                LogLevel::None => {}
            }

            if let Some(tolerance) = options.get_abs_tolerance() {
                if (previous - current).abs() <= tolerance {
                    converged = true;
                    break;
                }
            }
        }

        info!(
            generations = state.generation(),
            best = best_fitness,
            converged,
            "evolution finished"
        );

        Ok(EvolutionResult {
            best,
            fitness: best_fitness,
            generations: state.generation(),
            converged,
            state,
        })
    }
}
