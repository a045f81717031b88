use std::fs;
use tempfile::TempDir;

use shot_caddie::{CaddieEngine, CaddieError, ShotFile, ShotSource};

fn write_shot(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_end_to_end_from_shot_file() {
    let dir = TempDir::new().unwrap();
    let path = write_shot(
        &dir,
        "shot.toml",
        r#"
rangefinder_distance = 150
temperature_fahrenheit = 75
elevation_feet = 0
wind_speed_mph = 0
wind_direction = "calm"
lie_quality = "normal-fairway"
surface_moisture = "dry"
turf_firmness = "normal"
landing_slope = "flat"
"#,
    );

    let shot = ShotFile::from_path(&path).unwrap();
    let engine = CaddieEngine::new(shot);
    let estimate = engine.run().unwrap();

    assert_eq!(estimate.adjusted_distance, 162);
    assert_eq!(estimate.carry_distance, 150);
    assert_eq!(estimate.runout_distance, 12);
}

#[test]
fn test_shot_file_with_ui_style_labels() {
    let dir = TempDir::new().unwrap();
    let path = write_shot(
        &dir,
        "shot.toml",
        r#"
rangefinder_distance = 150
temperature_fahrenheit = 75
elevation_feet = 0
wind_speed_mph = 10
wind_direction = "Straight In (Headwind)"
lie_quality = "Normal Fairway"
surface_moisture = "Dry"
turf_firmness = "Normal"
landing_slope = "Flat"
"#,
    );

    let estimate = CaddieEngine::new(ShotFile::from_path(&path).unwrap())
        .run()
        .unwrap();
    assert_eq!(estimate.adjusted_distance, 152);
}

#[test]
fn test_missing_field_is_reported_before_any_computation() {
    let dir = TempDir::new().unwrap();
    let path = write_shot(
        &dir,
        "shot.toml",
        r#"
rangefinder_distance = 150
temperature_fahrenheit = 75
elevation_feet = 0
wind_speed_mph = 0
wind_direction = "calm"
lie_quality = "normal-fairway"
surface_moisture = "dry"
turf_firmness = "normal"
"#,
    );

    let err = ShotFile::from_path(&path).unwrap().load().unwrap_err();
    assert_eq!(err.to_string(), "Missing required field: landing_slope");
}

#[test]
fn test_out_of_range_file_value_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_shot(
        &dir,
        "shot.toml",
        r#"
rangefinder_distance = 150
temperature_fahrenheit = 140
elevation_feet = 0
wind_speed_mph = 0
wind_direction = "calm"
lie_quality = "normal-fairway"
surface_moisture = "dry"
turf_firmness = "normal"
landing_slope = "flat"
"#,
    );

    let err = CaddieEngine::new(ShotFile::from_path(&path).unwrap())
        .run()
        .unwrap_err();
    assert_eq!(err.to_string(), "Temperature must be -50 to 120°F");
}

#[test]
fn test_unknown_labels_read_as_neutral() {
    let dir = TempDir::new().unwrap();
    let path = write_shot(
        &dir,
        "shot.toml",
        r#"
rangefinder_distance = 150
temperature_fahrenheit = 75
elevation_feet = 0
wind_speed_mph = 25
wind_direction = "swirling"
lie_quality = "cart path"
surface_moisture = "Normal"
turf_firmness = "spongy"
landing_slope = "sidehill"
"#,
    );

    // Every unknown label resolves to a no-effect value, so this is the
    // baseline shot despite the 25 mph of unattributed wind.
    let estimate = CaddieEngine::new(ShotFile::from_path(&path).unwrap())
        .run()
        .unwrap();
    assert_eq!(estimate.adjusted_distance, 162);
}

#[test]
fn test_nonexistent_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ShotFile::from_path(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, CaddieError::Io(_)));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_shot(&dir, "shot.toml", "rangefinder_distance = =");
    let err = ShotFile::from_path(&path).unwrap_err();
    assert!(matches!(err, CaddieError::TomlParse(_)));
}
