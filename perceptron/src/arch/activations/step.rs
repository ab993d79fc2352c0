/// A step activation: `top` at or above the threshold, `bottom` below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    top: i32,
    bottom: i32,
    tresh: f32,
}

impl Step {
    fn new(top: i32, bottom: i32, tresh: f32) -> Self {
        Self { top, bottom, tresh }
    }

    /// The Heaviside step function: 0 for negative input, 1 otherwise.
    pub fn heaviside() -> Self {
        Self::new(1, 0, 0.)
    }

    pub fn f(&self, z: f32) -> i32 {
        if z >= self.tresh {
            self.top
        } else {
            self.bottom
        }
    }
}
