use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire perceptron crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The perceptron crate's error type.
#[derive(Debug)]
pub enum MlErr {
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyRange {
        what: &'static str,
        low: i32,
        high: i32,
    },
    Render(io::Error),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "dimension mismatch for {what}: got {got} inputs, expected {expected}"
            ),
            MlErr::EmptyRange { what, low, high } => {
                write!(f, "empty range for {what}: [{low}, {high}]")
            }
            MlErr::Render(e) => write!(f, "failed to render the result: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MlErr {
    fn from(value: io::Error) -> Self {
        Self::Render(value)
    }
}

/// Boundary conversion for binaries.
impl From<MlErr> for io::Error {
    fn from(value: MlErr) -> Self {
        match value {
            MlErr::Render(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
