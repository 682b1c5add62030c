use crate::config::NamedLocation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Parser)]
#[command(name = "drone-location")]
#[command(about = "Validate geographic coordinates for drone delivery")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a single coordinate
    Check {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        altitude: f64,

        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a "latitude,longitude,altitude" string
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate every entry of a TOML locations file
    File {
        path: String,

        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Renders resolved locations: `name: lat, lon, alt` lines or a pretty JSON array.
    pub fn render(self, locations: &[NamedLocation]) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(locations
                .iter()
                .map(|entry| format!("{}: {}", entry.name, entry.location))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(locations)?),
        }
    }
}

impl Command {
    pub fn output(&self) -> OutputFormat {
        match self {
            Command::Check { output, .. }
            | Command::Parse { output, .. }
            | Command::File { output, .. } => *output,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::File { path, .. } = &self.command {
            validate_path("file.path", path)?;
        }
        Ok(())
    }
}
