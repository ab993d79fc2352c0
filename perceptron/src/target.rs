use std::ops::RangeInclusive;

use crate::{
    MlErr, Result,
    sampling::{Point, Source},
};

/// The separation line `y = a*x + b` the perceptron has to learn. Vertical lines are ruled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearTarget {
    a: i32,
    b: i32,
}

impl LinearTarget {
    /// Creates a new `LinearTarget`.
    ///
    /// # Arguments
    /// * `a` - The gradient of the line.
    /// * `b` - The offset of the line.
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Draws a random line, the gradient first and then the offset.
    pub fn random<S: Source + ?Sized>(source: &mut S, bounds: &LineBounds) -> Self {
        let a = source.uniform_i32(*bounds.gradient().start(), *bounds.gradient().end());
        let b = source.uniform_i32(*bounds.offset().start(), *bounds.offset().end());
        Self::new(a, b)
    }

    pub fn gradient(&self) -> i32 {
        self.a
    }

    pub fn offset(&self) -> i32 {
        self.b
    }

    pub fn evaluate(&self, x: i32) -> i32 {
        self.a * x + self.b
    }

    /// Returns `1` if the point lies strictly above the line, `0` otherwise (points on the line
    /// count as below).
    pub fn is_above(&self, point: Point) -> i32 {
        (point.y > self.evaluate(point.x)) as i32
    }
}

/// The inclusive ranges random lines are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBounds {
    gradient: RangeInclusive<i32>,
    offset: RangeInclusive<i32>,
}

impl LineBounds {
    /// Creates a new `LineBounds`.
    ///
    /// # Arguments
    /// * `gradient` - The inclusive range of `a`.
    /// * `offset` - The inclusive range of `b`.
    ///
    /// # Returns
    /// The bounds or an error if either range is empty.
    pub fn new(gradient: RangeInclusive<i32>, offset: RangeInclusive<i32>) -> Result<Self> {
        for (what, range) in [("line gradient", &gradient), ("line offset", &offset)] {
            if range.is_empty() {
                return Err(MlErr::EmptyRange {
                    what,
                    low: *range.start(),
                    high: *range.end(),
                });
            }
        }

        Ok(Self { gradient, offset })
    }

    pub fn gradient(&self) -> &RangeInclusive<i32> {
        &self.gradient
    }

    pub fn offset(&self) -> &RangeInclusive<i32> {
        &self.offset
    }
}

impl Default for LineBounds {
    fn default() -> Self {
        Self {
            gradient: -6..=5,
            offset: -51..=50,
        }
    }
}
