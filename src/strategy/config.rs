//! # CmaesConfig
//!
//! The `CmaesConfig` struct fixes the population sizes and the adaptation time
//! constants of the CMA-ES strategy.
//!
//! ## Example
//!
//! ```rust
//! use cmaes_elementary::strategy::CmaesConfig;
//!
//! // Two parents out of eight offspring, time constants derived from the dimension
//! let config = CmaesConfig::new(2, 8);
//!
//! // Explicit time constants through the builder
//! let tuned = CmaesConfig::builder()
//!     .mu(1)
//!     .lambda(4)
//!     .tau(2.0_f64.sqrt())
//!     .tau_c(4.0)
//!     .tau_sigma(2.0_f64.sqrt())
//!     .build();
//! ```
//!
//! ## Fields
//!
//! - `mu`: The number of parents selected each generation.
//! - `lambda`: The number of offspring sampled each generation. Must exceed `mu`.
//! - `tau`: Time constant of the covariance evolution path. Defaults to `sqrt(N)`.
//! - `tau_c`: Time constant of the covariance matrix. Defaults to `N^2`.
//! - `tau_sigma`: Time constant of the step-size path. Defaults to `sqrt(N)`.
//!
//! A time constant left unset is resolved against the problem dimension `N`
//! when the strategy state is created.

use crate::error::{CmaError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CmaesConfig {
    mu: usize,
    lambda: usize,
    tau: Option<f64>,
    tau_c: Option<f64>,
    tau_sigma: Option<f64>,
}

/// Time constants resolved for a concrete problem dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeConstants {
    pub tau: f64,
    pub tau_c: f64,
    pub tau_sigma: f64,
}

impl CmaesConfig {
    /// Creates a configuration with the given population sizes and all
    /// time constants left to their dimension-dependent defaults.
    pub fn new(mu: usize, lambda: usize) -> Self {
        Self {
            mu,
            lambda,
            tau: None,
            tau_c: None,
            tau_sigma: None,
        }
    }

    pub fn get_mu(&self) -> usize {
        self.mu
    }

    pub fn get_lambda(&self) -> usize {
        self.lambda
    }

    pub fn get_tau(&self) -> Option<f64> {
        self.tau
    }

    pub fn get_tau_c(&self) -> Option<f64> {
        self.tau_c
    }

    pub fn get_tau_sigma(&self) -> Option<f64> {
        self.tau_sigma
    }

    /// Checks the population sizes and any explicitly given time constant.
    ///
    /// # Errors
    ///
    /// Returns [`CmaError::InvalidConfiguration`] if `mu` is zero, if `mu` is
    /// not strictly smaller than `lambda`, or if a time constant is not a
    /// finite positive number.
    pub fn validate(&self) -> Result<()> {
        if self.mu == 0 {
            return Err(CmaError::InvalidConfiguration(
                "Number of parents cannot be zero".to_string(),
            ));
        }

        if self.mu >= self.lambda {
            return Err(CmaError::InvalidConfiguration(format!(
                "Number of parents ({}) must be smaller than number of offspring ({})",
                self.mu, self.lambda
            )));
        }

        for (name, value) in [
            ("tau", self.tau),
            ("tau_c", self.tau_c),
            ("tau_sigma", self.tau_sigma),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(CmaError::InvalidConfiguration(format!(
                        "Time constant {} must be a finite positive number, got {}",
                        name, v
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolves unset time constants against the problem dimension.
    pub fn resolve(&self, dimension: usize) -> TimeConstants {
        let n = dimension as f64;
        TimeConstants {
            tau: self.tau.unwrap_or_else(|| n.sqrt()),
            tau_c: self.tau_c.unwrap_or(n * n),
            tau_sigma: self.tau_sigma.unwrap_or_else(|| n.sqrt()),
        }
    }

    /// Returns a builder for creating a `CmaesConfig` instance.
    pub fn builder() -> CmaesConfigBuilder {
        CmaesConfigBuilder::default()
    }
}

impl Default for CmaesConfig {
    fn default() -> Self {
        Self::new(1, 4)
    }
}

/// Builder for `CmaesConfig`.
#[derive(Debug, Clone, Default)]
pub struct CmaesConfigBuilder {
    mu: Option<usize>,
    lambda: Option<usize>,
    tau: Option<f64>,
    tau_c: Option<f64>,
    tau_sigma: Option<f64>,
}

impl CmaesConfigBuilder {
    /// Sets the number of parents.
    pub fn mu(mut self, value: usize) -> Self {
        self.mu = Some(value);
        self
    }

    /// Sets the number of offspring.
    pub fn lambda(mut self, value: usize) -> Self {
        self.lambda = Some(value);
        self
    }

    /// Sets the time constant of the covariance evolution path.
    pub fn tau(mut self, value: f64) -> Self {
        self.tau = Some(value);
        self
    }

    /// Sets the time constant of the covariance matrix.
    pub fn tau_c(mut self, value: f64) -> Self {
        self.tau_c = Some(value);
        self
    }

    /// Sets the time constant of the step-size evolution path.
    pub fn tau_sigma(mut self, value: f64) -> Self {
        self.tau_sigma = Some(value);
        self
    }

    /// Builds the `CmaesConfig` instance.
    pub fn build(self) -> CmaesConfig {
        CmaesConfig {
            mu: self.mu.unwrap_or(1),
            lambda: self.lambda.unwrap_or(4),
            tau: self.tau,
            tau_c: self.tau_c,
            tau_sigma: self.tau_sigma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_mu_not_below_lambda() {
        assert!(CmaesConfig::new(4, 4).validate().is_err());
        assert!(CmaesConfig::new(5, 4).validate().is_err());
        assert!(CmaesConfig::new(3, 4).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_parents() {
        match CmaesConfig::new(0, 4).validate() {
            Err(CmaError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("cannot be zero"))
            }
            _ => panic!("Expected InvalidConfiguration error"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_time_constants() {
        let config = CmaesConfig::builder().tau_c(0.0).build();
        assert!(config.validate().is_err());

        let config = CmaesConfig::builder().tau(f64::NAN).build();
        assert!(config.validate().is_err());

        let config = CmaesConfig::builder().tau_sigma(-1.0).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = CmaesConfig::new(2, 6).resolve(9);

        assert_eq!(resolved.tau, 3.0);
        assert_eq!(resolved.tau_c, 81.0);
        assert_eq!(resolved.tau_sigma, 3.0);
    }

    #[test]
    fn test_resolve_keeps_explicit_values() {
        let config = CmaesConfig::builder().tau(1.5).tau_c(4.0).build();
        let resolved = config.resolve(16);

        assert_eq!(resolved.tau, 1.5);
        assert_eq!(resolved.tau_c, 4.0);
        assert_eq!(resolved.tau_sigma, 4.0);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(CmaesConfig::builder().build(), CmaesConfig::default());
    }
}
