pub mod arch;
pub mod error;
pub mod sampling;
pub mod target;
pub mod training;
pub mod verification;

pub use error::{MlErr, Result};
