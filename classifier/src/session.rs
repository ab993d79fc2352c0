use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use perceptron::{
    Result,
    arch::Perceptron,
    sampling::{PointSampler, Source},
    target::{LineBounds, LinearTarget},
    training::{Trainer, TrainingReport},
    verification::{Renderer, Verification, Verifier},
};

use crate::RunConfig;

/// The perceptron classifies points of the plane, one input per coordinate.
pub const INPUTS: usize = 2;

/// Everything a finished run produced.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub target: LinearTarget,
    pub perceptron: Perceptron,
    pub training: TrainingReport,
    pub verification: Verification,
}

/// A single run: set up a line and a perceptron, train it, then verify it.
#[derive(Debug)]
pub struct Session {
    config: RunConfig,
}

impl Session {
    /// Creates a new `Session`.
    ///
    /// # Arguments
    /// * `config` - The parameters of the run.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the setup, training and verification phases in order, every random draw coming
    /// from `source`.
    ///
    /// # Arguments
    /// * `source` - The single source of randomness of the run.
    /// * `renderer` - Receives the verification drawing.
    ///
    /// # Returns
    /// The outcome of the run, or an error if the drawing couldn't be saved.
    pub fn run<S, R>(&self, source: &mut S, renderer: R) -> Result<Outcome>
    where
        S: Source + ?Sized,
        R: Renderer,
    {
        let target = LinearTarget::random(source, &LineBounds::default());
        info!(a = target.gradient(), b = target.offset(); "separation line set up");

        let mut perceptron = Perceptron::new(INPUTS, source);

        let trainer = Trainer::new(target, PointSampler::default());
        let training = trainer.train(
            &mut perceptron,
            self.config.iterations,
            self.config.learning_rate,
            source,
        )?;

        let verifier = Verifier::new(target, PointSampler::default());
        let verification =
            verifier.verify(&perceptron, self.config.trials.get(), source, renderer)?;

        Ok(Outcome {
            target,
            perceptron,
            training,
            verification,
        })
    }
}

/// A seed taken from the wall clock, in nanoseconds since the Unix epoch.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
