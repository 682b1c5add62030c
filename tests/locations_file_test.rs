use drone_location::utils::validation::Validate;
use drone_location::{LocationError, LocationsFile};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let toml_content = r#"
[meta]
name = "seattle-depots"
description = "Pickup points"

[[locations]]
name = "harbor"
latitude = 47.60
longitude = -122.34
altitude = 4.0

[[locations]]
name = "hill"
latitude = 47.63
longitude = -122.31
"#;

    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let file = LocationsFile::from_file(temp_file.path()).unwrap();
    assert_eq!(file.meta.name, "seattle-depots");
    assert_eq!(file.meta.description.as_deref(), Some("Pickup points"));

    let resolved = file.resolve().unwrap();
    let names: Vec<&str> = resolved.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["harbor", "hill"]);
    assert_eq!(resolved[1].location.altitude(), 0.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = LocationsFile::from_file("/nonexistent/drone-location/locations.toml");
    assert!(matches!(result, Err(LocationError::IoError(_))));
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("DRONE_LOCATION_TEST_META_NAME", "from-env");

    let toml_content = r#"
[meta]
name = "${DRONE_LOCATION_TEST_META_NAME}"
"#;

    let file = LocationsFile::from_toml_str(toml_content).unwrap();
    assert_eq!(file.meta.name, "from-env");
    assert!(file.resolve().unwrap().is_empty());

    std::env::remove_var("DRONE_LOCATION_TEST_META_NAME");
}

#[test]
fn test_empty_names_rejected() {
    let no_meta_name = LocationsFile::from_toml_str("[meta]\nname = \"  \"\n").unwrap();
    assert!(no_meta_name.validate().is_err());

    let blank_entry = r#"
[meta]
name = "x"

[[locations]]
name = ""
latitude = 0.0
longitude = 0.0
"#;
    let file = LocationsFile::from_toml_str(blank_entry).unwrap();
    assert!(matches!(
        file.validate(),
        Err(LocationError::ConfigValidationError { field, .. }) if field == "locations[0].name"
    ));
}

#[test]
fn test_out_of_range_longitude_entry() {
    let content = r#"
[meta]
name = "x"

[[locations]]
name = "dateline"
latitude = 0.0
longitude = -181.0
"#;
    let file = LocationsFile::from_toml_str(content).unwrap();
    let err = file.resolve().unwrap_err();
    assert!(err.to_string().contains("locations[dateline]"));
    assert!(err.to_string().contains("longitude must be between -180 and 180"));
    assert!(err.recovery_suggestion().starts_with("Longitude"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_non_finite_altitude_entry_rejected() {
    let content = r#"
[meta]
name = "x"

[[locations]]
name = "sky"
latitude = 0.0
longitude = 0.0
altitude = inf
"#;
    let file = LocationsFile::from_toml_str(content).unwrap();
    assert!(matches!(
        file.resolve(),
        Err(LocationError::InvalidEntry { name, .. }) if name == "sky"
    ));
}
