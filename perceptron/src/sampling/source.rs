use rand::{Rng, SeedableRng, rngs::StdRng};

/// A `Source` hands out the random numbers consumed by a run.
///
/// Every draw of a run (the separation line, the initial parameters and every sample point)
/// goes through a single source in call order, so fixing the source fixes the run.
pub trait Source {
    /// Samples a float uniformly from `[low, high)`.
    fn uniform_f32(&mut self, low: f32, high: f32) -> f32;

    /// Samples an integer uniformly from `[low, high]`.
    fn uniform_i32(&mut self, low: i32, high: i32) -> i32;
}

/// A `Source` backed by a `rand` generator.
pub struct RandSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandSource<R> {
    /// Creates a new `RandSource`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandSource<StdRng> {
    /// Creates a new `RandSource` over a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Source for RandSource<R> {
    fn uniform_f32(&mut self, low: f32, high: f32) -> f32 {
        self.rng.random_range(low..high)
    }

    fn uniform_i32(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..=high)
    }
}

/// A `Source` replaying fixed values, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    floats: std::collections::VecDeque<f32>,
    ints: std::collections::VecDeque<i32>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new<F, I>(floats: F, ints: I) -> Self
    where
        F: IntoIterator<Item = f32>,
        I: IntoIterator<Item = i32>,
    {
        Self {
            floats: floats.into_iter().collect(),
            ints: ints.into_iter().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.floats.is_empty() && self.ints.is_empty()
    }
}

#[cfg(test)]
impl Source for ScriptedSource {
    fn uniform_f32(&mut self, low: f32, high: f32) -> f32 {
        let value = self.floats.pop_front().expect("no scripted floats left");
        assert!((low..high).contains(&value), "{value} not in [{low}, {high})");
        value
    }

    fn uniform_i32(&mut self, low: i32, high: i32) -> i32 {
        let value = self.ints.pop_front().expect("no scripted ints left");
        assert!((low..=high).contains(&value), "{value} not in [{low}, {high}]");
        value
    }
}
