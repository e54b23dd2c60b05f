use thiserror::Error;

/// Configuration for the random descent optimiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_steps: usize,
    seed: Option<u64>,
}

/// Errors that can occur when validating a random descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_steps must be positive")]
    ZeroSteps,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1000).unwrap()
    }
}

impl Config {
    /// Creates a new config with the given sweep budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero.
    pub fn new(max_steps: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }

        Ok(Self {
            max_steps,
            seed: None,
        })
    }

    /// Seeds the sweep-order generator so runs are reproducible.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Returns the maximum number of sweeps per run.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the sweep-order seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget() {
        let config = Config::default();
        assert_eq!(config.max_steps(), 1000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn zero_steps_rejected() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn seed_is_kept() {
        let config = Config::new(5).unwrap().with_seed(42);
        assert_eq!(config.max_steps(), 5);
        assert_eq!(config.seed(), Some(42));
    }
}
