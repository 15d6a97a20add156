//! Sample configuration.
//!
//! Values are read from environment variables (optionally seeded from a
//! `.env` file) once at startup. Both values are optional and fall back to
//! the defaults below.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Default starting value when `HALVING_START` is not set.
pub const DEFAULT_START: i32 = 20;

/// Default number of extra halvings when `HALVING_STEPS` is not set.
pub const DEFAULT_STEPS: usize = 5;

/// Errors raised while loading [`HalvingConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has a value that cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
    /// An environment variable is set but is not valid Unicode.
    #[error("Environment variable {0} is not valid Unicode")]
    NotUnicode(String),
}

/// Configuration of the halving run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalvingConfig {
    /// The value the first chain starts from.
    pub start: i32,
    /// How many more times the first result is halved.
    pub steps: usize,
}

impl Default for HalvingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_STEPS)
    }
}

impl HalvingConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(start: i32, steps: usize) -> Self {
        Self { start, steps }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HALVING_START`: starting value (optional, default: 20)
    /// - `HALVING_STEPS`: extra halvings (optional, default: 5)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable does not parse and
    /// [`ConfigError::NotUnicode`] if it is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let start = get_optional_env_parsed("HALVING_START", DEFAULT_START)?;
        let steps = get_optional_env_parsed("HALVING_STEPS", DEFAULT_STEPS)?;

        Ok(Self::new(start, steps))
    }
}

fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key.to_string())),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("{raw:?}: {error}"),
    })
}
