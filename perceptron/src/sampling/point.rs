use std::ops::RangeInclusive;

use super::Source;
use crate::{MlErr, Result};

/// A point of the plane, the perceptron's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point as perceptron inputs, `[x, y]`.
    pub fn inputs(&self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

/// Samples points with both coordinates drawn uniformly from the same inclusive range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSampler {
    bounds: RangeInclusive<i32>,
}

impl PointSampler {
    /// The coordinate range used when none is given.
    pub const DEFAULT_BOUNDS: RangeInclusive<i32> = -101..=100;

    /// Creates a new `PointSampler`.
    ///
    /// # Arguments
    /// * `bounds` - The inclusive range of both coordinates.
    ///
    /// # Returns
    /// The sampler or an error if `bounds` is empty.
    pub fn new(bounds: RangeInclusive<i32>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(MlErr::EmptyRange {
                what: "point coordinates",
                low: *bounds.start(),
                high: *bounds.end(),
            });
        }

        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> &RangeInclusive<i32> {
        &self.bounds
    }

    /// Draws a point, `x` first.
    pub fn sample<S: Source + ?Sized>(&self, source: &mut S) -> Point {
        let (low, high) = (*self.bounds.start(), *self.bounds.end());
        let x = source.uniform_i32(low, high);
        let y = source.uniform_i32(low, high);
        Point::new(x, y)
    }
}

impl Default for PointSampler {
    fn default() -> Self {
        Self {
            bounds: Self::DEFAULT_BOUNDS,
        }
    }
}
