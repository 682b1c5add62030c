use crate::domain::Location;
use crate::utils::error::{LocationError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// A TOML document listing named coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsFile {
    pub meta: MetaConfig,
    #[serde(default)]
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaConfig {
    pub name: String,
    pub description: Option<String>,
}

/// Unvalidated entry as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

/// A validated location together with its name in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedLocation {
    pub name: String,
    pub location: Location,
}

impl LocationsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LocationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Validates every entry and returns the constructed locations in file order.
    pub fn resolve(&self) -> Result<Vec<NamedLocation>> {
        validate_non_empty_string("meta.name", &self.meta.name)?;

        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(self.locations.len());

        for (index, entry) in self.locations.iter().enumerate() {
            validate_non_empty_string(&format!("locations[{}].name", index), &entry.name)?;

            if !seen.insert(entry.name.as_str()) {
                return Err(LocationError::DuplicateLocation {
                    name: entry.name.clone(),
                });
            }

            let location =
                Location::new(entry.latitude, entry.longitude, entry.altitude.unwrap_or(0.0))
                    .map_err(|e| LocationError::InvalidEntry {
                        name: entry.name.clone(),
                        source: Box::new(e),
                    })?;

            resolved.push(NamedLocation {
                name: entry.name.clone(),
                location,
            });
        }

        tracing::debug!(
            "Resolved {} locations from '{}'",
            resolved.len(),
            self.meta.name
        );
        Ok(resolved)
    }
}

impl Validate for LocationsFile {
    fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }
}
