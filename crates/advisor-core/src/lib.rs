pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use types::{Category, CategoryAction};
