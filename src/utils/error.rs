use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("{field} must be between {min} and {max} degrees, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Cannot parse location from '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid entry locations[{name}]: {source}")]
    InvalidEntry {
        name: String,
        #[source]
        source: Box<LocationError>,
    },

    #[error("Duplicate location name: {name}")]
    DuplicateLocation { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity. Never 0.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl LocationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LocationError::OutOfRange { .. }
            | LocationError::NonFinite { .. }
            | LocationError::Parse { .. } => ErrorCategory::Validation,
            LocationError::ConfigValidationError { .. }
            | LocationError::InvalidEntry { .. }
            | LocationError::DuplicateLocation { .. } => ErrorCategory::Configuration,
            LocationError::IoError(_) | LocationError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocationError::OutOfRange { .. }
            | LocationError::NonFinite { .. }
            | LocationError::Parse { .. }
            | LocationError::ConfigValidationError { .. }
            | LocationError::InvalidEntry { .. }
            | LocationError::DuplicateLocation { .. } => ErrorSeverity::High,
            LocationError::SerializationError(_) => ErrorSeverity::Medium,
            LocationError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    /// Short message for end users, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LocationError::OutOfRange {
                field, min, max, ..
            } => format!("Invalid {}: must be between {} and {} degrees", field, min, max),
            LocationError::NonFinite { field, .. } => {
                format!("Invalid {}: must be a finite number", field)
            }
            LocationError::Parse { input, .. } => {
                format!("'{}' is not a valid location", input)
            }
            LocationError::ConfigValidationError { field, .. } => {
                format!("The locations file has an invalid value in '{}'", field)
            }
            LocationError::InvalidEntry { name, source } => {
                format!("Location '{}': {}", name, source.user_friendly_message())
            }
            LocationError::DuplicateLocation { name } => {
                format!("Location '{}' is defined more than once", name)
            }
            LocationError::IoError(_) => "Could not read or write a file".to_string(),
            LocationError::SerializationError(_) => "Could not format the output".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LocationError::OutOfRange { field, .. } if *field == "latitude" => {
                "Latitude is measured in degrees north (positive) or south (negative) of the equator"
            }
            LocationError::OutOfRange { .. } => {
                "Longitude is measured in degrees east (positive) or west (negative) of Greenwich"
            }
            LocationError::NonFinite { .. } => "Use a finite value such as 0 or 120.5",
            LocationError::Parse { .. } => {
                "Use the form 'latitude,longitude,altitude', e.g. '47.6,-122.3,56'"
            }
            LocationError::ConfigValidationError { .. } => {
                "Check the locations file against the documented TOML layout"
            }
            LocationError::InvalidEntry { source, .. } => source.recovery_suggestion(),
            LocationError::DuplicateLocation { .. } => "Give every location a unique name",
            LocationError::IoError(_) => "Check that the path exists and is readable",
            LocationError::SerializationError(_) => "Retry with --output text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_field_and_range() {
        let err = LocationError::OutOfRange {
            field: "latitude",
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(
            err.to_string(),
            "latitude must be between -90 and 90 degrees, got 91"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().starts_with("Latitude"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: LocationError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_severity_exit_codes() {
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_per_category() {
        let validation = LocationError::NonFinite {
            field: "altitude",
            value: f64::NAN,
        };
        assert_eq!(validation.category(), ErrorCategory::Validation);
        assert_eq!(validation.exit_code(), 1);

        let duplicate = LocationError::DuplicateLocation {
            name: "hub".to_string(),
        };
        assert_eq!(duplicate.category(), ErrorCategory::Configuration);
        assert_eq!(duplicate.exit_code(), 1);

        let serialization: LocationError = serde_json::from_str::<f64>("not json")
            .unwrap_err()
            .into();
        assert_eq!(serialization.category(), ErrorCategory::System);
        assert_eq!(serialization.exit_code(), 2);
    }

    #[test]
    fn test_invalid_entry_keeps_field_hint() {
        let err = LocationError::InvalidEntry {
            name: "dateline".to_string(),
            source: Box::new(LocationError::OutOfRange {
                field: "longitude",
                value: -181.0,
                min: -180.0,
                max: 180.0,
            }),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().starts_with("Longitude"));
        assert_eq!(
            err.to_string(),
            "Invalid entry locations[dateline]: longitude must be between -180 and 180 degrees, got -181"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
