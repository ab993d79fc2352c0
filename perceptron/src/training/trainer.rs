use log::{debug, info};

use crate::{
    Result,
    arch::Perceptron,
    sampling::{PointSampler, Source},
    target::LinearTarget,
};

/// Counts gathered while training.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingReport {
    pub iterations: usize,
    /// The iterations in which the perceptron answered wrong and had to adjust.
    pub mistakes: usize,
}

/// Trains perceptrons against a known separation line by throwing random points at them and
/// telling them how far off they are.
#[derive(Clone, Debug)]
pub struct Trainer {
    target: LinearTarget,
    sampler: PointSampler,
}

impl Trainer {
    /// Creates a new `Trainer`.
    ///
    /// # Arguments
    /// * `target` - The line that labels the points.
    /// * `sampler` - Where training points are drawn from.
    pub fn new(target: LinearTarget, sampler: PointSampler) -> Self {
        Self { target, sampler }
    }

    /// Runs `iterations` rounds of the delta rule on `perceptron`.
    ///
    /// # Arguments
    /// * `perceptron` - The perceptron to train, it must take two inputs.
    /// * `iterations` - The amount of points to present.
    /// * `learning_rate` - The size of every adjustment.
    /// * `source` - The source of randomness for the points.
    ///
    /// # Returns
    /// A report of the training or an error if the perceptron doesn't take points as input.
    pub fn train<S: Source + ?Sized>(
        &self,
        perceptron: &mut Perceptron,
        iterations: usize,
        learning_rate: f32,
        source: &mut S,
    ) -> Result<TrainingReport> {
        let mut report = TrainingReport {
            iterations,
            mistakes: 0,
        };

        for i in 0..iterations {
            let point = self.sampler.sample(source);
            let inputs = point.inputs();

            let actual = perceptron.process(&inputs)?;
            let expected = self.target.is_above(point);
            let delta = expected - actual;

            debug!(
                iteration = i,
                x = point.x,
                y = point.y,
                expected = expected,
                actual = actual,
                delta = delta;
                "training sample"
            );

            if delta != 0 {
                report.mistakes += 1;
            }

            perceptron.adjust(&inputs, delta, learning_rate)?;
        }

        info!(
            iterations = report.iterations,
            mistakes = report.mistakes;
            "training finished"
        );

        Ok(report)
    }
}
