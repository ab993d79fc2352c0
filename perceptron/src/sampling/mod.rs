mod point;
mod source;

pub use point::{Point, PointSampler};
pub use source::{RandSource, Source};

#[cfg(test)]
pub(crate) use source::ScriptedSource;
