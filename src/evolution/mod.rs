pub mod launcher;
pub mod objective;
pub mod options;

pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use objective::Objective;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
