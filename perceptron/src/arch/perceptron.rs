use ndarray::{Array1, ArrayView1};

use super::activations::Step;
use crate::{MlErr, Result, sampling::Source};

/// A single neuron linear classifier: a weighted sum of its inputs plus a bias, fed through a
/// Heaviside step.
#[derive(Clone, Debug)]
pub struct Perceptron {
    weights: Array1<f32>,
    bias: f32,
    act_fn: Step,
}

impl Perceptron {
    /// Creates a new `Perceptron` with `n` inputs.
    ///
    /// Weights (in input order) and then the bias are sampled uniformly from `[-1, 1)`.
    ///
    /// # Arguments
    /// * `n` - The amount of inputs.
    /// * `source` - The source of randomness.
    pub fn new<S: Source + ?Sized>(n: usize, source: &mut S) -> Self {
        let weights = (0..n).map(|_| source.uniform_f32(-1., 1.)).collect();
        let bias = source.uniform_f32(-1., 1.);
        Self::from_parts(weights, bias)
    }

    /// Creates a new `Perceptron` with the given parameters.
    pub fn from_parts(weights: Vec<f32>, bias: f32) -> Self {
        Self {
            weights: Array1::from(weights),
            bias,
            act_fn: Step::heaviside(),
        }
    }

    /// Returns the amount of inputs this perceptron takes.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Weighs the inputs, sums them up on top of the bias and runs the result through the step.
    ///
    /// # Arguments
    /// * `inputs` - One value per weight.
    ///
    /// # Returns
    /// `1` if the weighted sum is non negative, `0` otherwise, or an error if the amount of
    /// inputs doesn't match the amount of weights.
    pub fn process(&self, inputs: &[f32]) -> Result<i32> {
        self.check_dim(inputs)?;

        let sum = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias, |sum, (w, x)| sum + x * w);

        Ok(self.act_fn.f(sum))
    }

    /// Applies the delta rule: every weight moves by `input * delta * learning_rate` and the
    /// bias by `delta * learning_rate`.
    ///
    /// # Arguments
    /// * `inputs` - The inputs the perceptron was wrong (or right) about.
    /// * `delta` - The expected answer minus the actual one.
    /// * `learning_rate` - The size of the step.
    ///
    /// # Returns
    /// An error if the amount of inputs doesn't match the amount of weights, in which case
    /// nothing is modified.
    pub fn adjust(&mut self, inputs: &[f32], delta: i32, learning_rate: f32) -> Result<()> {
        self.check_dim(inputs)?;

        let delta = delta as f32;
        for (w, x) in self.weights.iter_mut().zip(inputs) {
            *w += x * delta * learning_rate;
        }
        self.bias += delta * learning_rate;

        Ok(())
    }

    fn check_dim(&self, inputs: &[f32]) -> Result<()> {
        if inputs.len() != self.dim() {
            return Err(MlErr::DimensionMismatch {
                what: "perceptron inputs",
                got: inputs.len(),
                expected: self.dim(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{RandSource, ScriptedSource};

    #[test]
    fn new_draws_weights_then_bias() {
        let mut source = ScriptedSource::new([0.25, -0.5, 0.75], []);
        let p = Perceptron::new(2, &mut source);

        assert_eq!(p.dim(), 2);
        assert_eq!(p.weights().to_vec(), [0.25, -0.5]);
        assert_eq!(p.bias(), 0.75);
        assert!(source.is_exhausted());
    }

    #[test]
    fn new_samples_in_unit_range() {
        let mut source = RandSource::seeded(11);

        for _ in 0..100 {
            let p = Perceptron::new(5, &mut source);
            assert_eq!(p.dim(), 5);
            assert!(p.weights().iter().all(|w| (-1. ..1.).contains(w)));
            assert!((-1. ..1.).contains(&p.bias()));
        }
    }

    #[test]
    fn process_is_binary() {
        let mut source = RandSource::seeded(5);
        let p = Perceptron::new(2, &mut source);

        for x in (-101..=100).step_by(7) {
            for y in (-101..=100).step_by(7) {
                let out = p.process(&[x as f32, y as f32]).unwrap();
                assert!(out == 0 || out == 1, "{out}");
            }
        }
    }

    #[test]
    fn process_is_deterministic() {
        let p = Perceptron::from_parts(vec![0.3, -0.7], 0.1);
        let before = p.clone();

        let first = p.process(&[12., 4.]).unwrap();
        for _ in 0..10 {
            assert_eq!(p.process(&[12., 4.]).unwrap(), first);
        }

        assert_eq!(p.weights(), before.weights());
        assert_eq!(p.bias(), before.bias());
    }

    #[test]
    fn process_zero_sum_is_above() {
        // 0.5 * 4 - 1 * 2 + 0 == 0
        let p = Perceptron::from_parts(vec![0.5, -1.], 0.);
        assert_eq!(p.process(&[4., 2.]).unwrap(), 1);

        let p = Perceptron::from_parts(vec![1., 1.], -3.);
        assert_eq!(p.process(&[1., 2.]).unwrap(), 1);
        assert_eq!(p.process(&[1., 1.]).unwrap(), 0);
    }

    #[test]
    fn process_dimension_mismatch() {
        let p = Perceptron::from_parts(vec![0.5, -1.], 0.);

        let err = p.process(&[1., 2., 3.]).unwrap_err();
        assert!(matches!(
            err,
            MlErr::DimensionMismatch {
                got: 3,
                expected: 2,
                ..
            }
        ));
        assert!(p.process(&[1.]).is_err());
    }

    #[test]
    fn adjust_zero_delta_is_noop() {
        let mut p = Perceptron::from_parts(vec![0.3, -0.7], 0.1);
        p.adjust(&[55., -23.], 0, 0.1).unwrap();

        assert_eq!(p.weights().to_vec(), [0.3, -0.7]);
        assert_eq!(p.bias(), 0.1);
    }

    #[test]
    fn adjust_follows_delta_rule() {
        let rate = 0.1;
        let inputs = [37., -91.];

        for delta in [-1, 1] {
            let mut p = Perceptron::from_parts(vec![0.3, -0.7], 0.1);
            p.adjust(&inputs, delta, rate).unwrap();

            let d = delta as f32;
            assert_eq!(p.weights()[0], 0.3 + inputs[0] * d * rate);
            assert_eq!(p.weights()[1], -0.7 + inputs[1] * d * rate);
            assert_eq!(p.bias(), 0.1 + d * rate);
        }
    }

    #[test]
    fn adjust_dimension_mismatch_leaves_state() {
        let mut p = Perceptron::from_parts(vec![0.3, -0.7], 0.1);

        assert!(p.adjust(&[1.], 1, 0.1).is_err());
        assert_eq!(p.weights().to_vec(), [0.3, -0.7]);
        assert_eq!(p.bias(), 0.1);
    }
}
