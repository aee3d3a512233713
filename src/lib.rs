pub mod error;
pub mod evolution;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{CmaError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, Objective};
pub use strategy::{Cmaes, CmaesConfig, CmaesState, Optimizer};

pub use nalgebra::{DMatrix, DVector};
