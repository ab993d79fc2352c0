mod renderer;
mod verifier;

pub use renderer::Renderer;
pub use verifier::{Verification, Verifier};

#[cfg(test)]
pub(crate) use renderer::{Drawn, Recorder};
