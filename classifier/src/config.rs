use std::{env, fmt::Display, num::NonZeroUsize, path::PathBuf, str::FromStr};

use log::warn;

use crate::error::{ConfigErr, Result};

pub const SEED: &str = "PERCEPTRON_SEED";
pub const ITERATIONS: &str = "PERCEPTRON_ITERATIONS";
pub const LEARNING_RATE: &str = "PERCEPTRON_LEARNING_RATE";
pub const TRIALS: &str = "PERCEPTRON_TRIALS";
pub const OUTPUT: &str = "PERCEPTRON_OUTPUT";

const DEFAULT_ITERATIONS: usize = 1000;
const DEFAULT_LEARNING_RATE: f32 = 0.1;
const DEFAULT_TRIALS: usize = 100;
const DEFAULT_OUTPUT: &str = "result.png";

/// Immutable parameters of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Seed of the random source, the wall clock is used when missing.
    pub seed: Option<u64>,
    pub iterations: usize,
    /// Allowed range: `0 < learning_rate <= 1`.
    pub learning_rate: f32,
    pub trials: NonZeroUsize,
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            iterations: DEFAULT_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            trials: NonZeroUsize::new(DEFAULT_TRIALS).unwrap_or(NonZeroUsize::MIN),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RunConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Returns
    /// The defaults overridden by any `PERCEPTRON_*` variable set, or an error if one of them
    /// holds an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from the defaults and the values `lookup` finds.
    ///
    /// # Arguments
    /// * `lookup` - Gives the value of a key, if any.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = read(&lookup, SEED)? {
            config.seed = Some(seed);
        }

        if let Some(iterations) = read(&lookup, ITERATIONS)? {
            config.iterations = iterations;
        }

        if let Some(learning_rate) = read::<f32, _>(&lookup, LEARNING_RATE)? {
            if !(learning_rate > 0. && learning_rate <= 1.) {
                return Err(ConfigErr::Invalid {
                    key: LEARNING_RATE,
                    value: learning_rate.to_string(),
                    reason: "must be in (0, 1]".to_string(),
                });
            }

            config.learning_rate = learning_rate;
        }

        if let Some(trials) = read(&lookup, TRIALS)? {
            config.trials = trials;
        }

        if let Some(output) = read_raw(&lookup, OUTPUT) {
            config.output = PathBuf::from(output);
        }

        Ok(config)
    }
}

fn read_raw<F>(lookup: &F, key: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;

    if value.trim().is_empty() {
        warn!(key = key; "ignoring empty configuration value");
        return None;
    }

    Some(value)
}

fn read<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = read_raw(lookup, key) else {
        return Ok(None);
    };

    match value.trim().parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigErr::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
