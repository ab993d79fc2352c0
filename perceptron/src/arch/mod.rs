pub mod activations;
mod perceptron;

pub use perceptron::Perceptron;
