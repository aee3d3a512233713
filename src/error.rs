//! # Error Types
//!
//! This module defines the error types for the CMA-ES library. It provides
//! specific error variants for the failure scenarios that may occur while a
//! strategy state is created or while a run is driven to completion.
//!
//! Numeric collapse of the covariance matrix inside a single generation is
//! reported by [`Optimizer::advance_generation`](crate::strategy::Optimizer::advance_generation)
//! as a boolean termination flag. The driver turns that flag into
//! [`CmaError::NumericCollapse`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use cmaes_elementary::error::{CmaError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use cmaes_elementary::error::{CmaError, OptionExt};
//!
//! fn first_fitness(fitness: &[f64]) -> cmaes_elementary::error::Result<f64> {
//!     fitness.first().copied().ok_or_else_cma(|| CmaError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the CMA-ES library.
#[derive(Error, Debug)]
pub enum CmaError {
    /// Error that occurs when an invalid configuration is provided,
    /// most notably when the parent count is not smaller than the offspring count.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error that occurs when the initial population is empty.
    #[error("Empty population error: Cannot create a strategy state from an empty population")]
    EmptyPopulation,

    /// Error that occurs when individuals of different lengths are mixed.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Error that occurs when the symmetrized covariance matrix is no longer
    /// positive-definite and the run cannot continue.
    #[error("Numeric collapse in generation {generation}: not positive-definite\n{matrix}")]
    NumericCollapse { generation: usize, matrix: String },

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for CMA-ES operations.
pub type Result<T> = std::result::Result<T, CmaError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use cmaes_elementary::error::ResultExt;
///
/// fn parse_lambda(raw: &str) -> cmaes_elementary::error::Result<usize> {
///     raw.parse::<usize>().context("Failed to parse offspring count")
/// }
///
/// assert!(parse_lambda("12").is_ok());
/// assert!(parse_lambda("twelve").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `CmaError` carrying the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| CmaError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, CmaError>` using
    /// a closure to generate the error.
    fn ok_or_else_cma<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> CmaError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_cma<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> CmaError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = CmaError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3, found 2");
    }

    #[test]
    fn test_context_wraps_source_error() {
        let result: Result<u32> = "abc".parse::<u32>().context("Failed to parse");
        match result {
            Err(CmaError::Other(msg)) => assert!(msg.starts_with("Failed to parse: ")),
            _ => panic!("Expected Other error"),
        }
    }

    #[test]
    fn test_option_ext() {
        let none: Option<f64> = None;
        assert!(matches!(
            none.ok_or_else_cma(|| CmaError::EmptyPopulation),
            Err(CmaError::EmptyPopulation)
        ));
        assert_eq!(Some(1.5).ok_or_else_cma(|| CmaError::EmptyPopulation).ok(), Some(1.5));
    }
}
