//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct controls how long the
//! [`EvolutionLauncher`](super::EvolutionLauncher) drives a run and how much
//! it reports while doing so.
//!
//! ## Example
//!
//! ```rust
//! use cmaes_elementary::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Verbose, Some(1e-12));
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The maximum number of generations.
//! - `log_level`: How much progress is reported through `tracing`.
//! - `abs_tolerance`: Stop once the best parent fitness changes by no more than
//!   this amount between two generations. `None` disables the check.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    /// Every generation, including the fittest individual.
    Verbose,
    /// One event per generation with the fitness values only.
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    abs_tolerance: Option<f64>,
}

impl EvolutionOptions {
    pub fn new(num_generations: usize, log_level: LogLevel, abs_tolerance: Option<f64>) -> Self {
        Self {
            num_generations,
            log_level,
            abs_tolerance,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_abs_tolerance(&self) -> Option<f64> {
        self.abs_tolerance
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the absolute fitness tolerance.
    pub fn set_abs_tolerance(&mut self, abs_tolerance: Option<f64>) {
        self.abs_tolerance = abs_tolerance;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cmaes_elementary::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(500)
    ///     .log_level(LogLevel::Minimal)
    ///     .abs_tolerance(1e-10)
    ///     .build();
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 1000,
            log_level: LogLevel::None,
            abs_tolerance: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    abs_tolerance: Option<f64>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the absolute fitness tolerance.
    pub fn abs_tolerance(mut self, value: f64) -> Self {
        self.abs_tolerance = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(1000),
            log_level: self.log_level.unwrap_or(LogLevel::None),
            abs_tolerance: self.abs_tolerance,
        }
    }
}
