use log::{debug, info};

use super::Renderer;
use crate::{
    Result,
    arch::Perceptron,
    sampling::{PointSampler, Source},
    target::LinearTarget,
};

/// The outcome of a verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verification {
    pub correct: usize,
    pub trials: usize,
}

impl Verification {
    /// The share of correct answers as an integer percentage, rounded down.
    pub fn percentage(&self) -> usize {
        if self.trials == 0 {
            return 0;
        }

        self.correct * 100 / self.trials
    }
}

/// Checks how well a trained perceptron classifies fresh points. There is no feedback, the
/// perceptron is only read.
#[derive(Clone, Debug)]
pub struct Verifier {
    target: LinearTarget,
    sampler: PointSampler,
}

impl Verifier {
    /// The amount of trials used when none is configured.
    pub const DEFAULT_TRIALS: usize = 100;

    /// Creates a new `Verifier`.
    ///
    /// # Arguments
    /// * `target` - The line that labels the points.
    /// * `sampler` - Where the verification points are drawn from.
    pub fn new(target: LinearTarget, sampler: PointSampler) -> Self {
        Self { target, sampler }
    }

    /// Classifies `trials` random points, drawing each one with the perceptron's answer, then
    /// draws the separation line and saves the drawing.
    ///
    /// # Arguments
    /// * `perceptron` - The perceptron under test.
    /// * `trials` - The amount of points to classify.
    /// * `source` - The source of randomness for the points.
    /// * `renderer` - Where the points and the line are drawn.
    ///
    /// # Returns
    /// The amount of correct answers, or an error if the perceptron doesn't take points as
    /// input or the drawing couldn't be saved.
    pub fn verify<S, R>(
        &self,
        perceptron: &Perceptron,
        trials: usize,
        source: &mut S,
        mut renderer: R,
    ) -> Result<Verification>
    where
        S: Source + ?Sized,
        R: Renderer,
    {
        let mut correct = 0;

        for i in 0..trials {
            let point = self.sampler.sample(source);

            let result = perceptron.process(&point.inputs())?;
            let expected = self.target.is_above(point);
            if result == expected {
                correct += 1;
            }

            debug!(
                trial = i,
                x = point.x,
                y = point.y,
                result = result,
                expected = expected;
                "classified"
            );
            renderer.draw_point(point.x, point.y, result == 1);
        }

        renderer.draw_linear_function(self.target.gradient(), self.target.offset());
        renderer.save()?;

        let verification = Verification { correct, trials };
        info!(
            correct = verification.correct,
            trials = verification.trials;
            "verification finished"
        );

        Ok(verification)
    }
}
