pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{LocationsFile, NamedLocation};
pub use domain::{Location, ValueObject};
pub use utils::error::{LocationError, Result};
