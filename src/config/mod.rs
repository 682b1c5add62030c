#[cfg(feature = "cli")]
pub mod cli;
pub mod locations_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, OutputFormat};
pub use locations_file::{LocationsFile, NamedLocation};
