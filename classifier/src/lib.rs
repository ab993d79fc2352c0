pub mod config;
pub mod error;
pub mod session;

pub use config::RunConfig;
pub use error::ConfigErr;
pub use session::{Outcome, Session};
