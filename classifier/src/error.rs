use std::{error::Error, fmt, io};

/// The configuration module's result type.
pub type Result<T> = std::result::Result<T, ConfigErr>;

/// Configuration failures.
#[derive(Debug)]
pub enum ConfigErr {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Invalid { key, value, reason } => {
                write!(f, "invalid value {value:?} for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigErr {}

/// Boundary conversion for binaries.
impl From<ConfigErr> for io::Error {
    fn from(value: ConfigErr) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, value)
    }
}
