//! Content domain: tests for movement.ron parsing and validation.

use std::path::Path;

use super::{ContentLoadError, load_movement_tuning, parse_movement_tuning};
use crate::movement::{GameLayer, GroundPolicy, MovementTuning, TuningError};

#[test]
fn test_parse_full_file() {
    let ron = r#"(
        schema_version: 1,
        tuning: (
            speed: 5.0,
            jump_height: 4.0,
            jump_peak_duration: 1.0,
            fall_multiplier: 3.0,
            ground_layer: Ground,
            air_drag: 10.0,
            air_acceleration: 20.0,
            max_air_speed: 6.0,
            slope_angle: 0.5,
            ground_policy: LayerOnly,
            cancel_ascent_on_landing: true,
            gravity: 9.81,
        ),
    )"#;

    let tuning = parse_movement_tuning("movement.ron", ron).unwrap();
    assert_eq!(tuning.speed, 5.0);
    assert_eq!(tuning.jump_peak_duration, 1.0);
    assert_eq!(tuning.ground_layer, GameLayer::Ground);
    assert_eq!(tuning.ground_policy, GroundPolicy::LayerOnly);
    assert!(tuning.cancel_ascent_on_landing);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let ron = "(schema_version: 1, tuning: (speed: 100.0))";

    let tuning = parse_movement_tuning("movement.ron", ron).unwrap();
    let defaults = MovementTuning::default();
    assert_eq!(tuning.speed, 100.0);
    assert_eq!(tuning.jump_height, defaults.jump_height);
    assert_eq!(tuning.ground_policy, GroundPolicy::SlopeFiltered);
}

#[test]
fn test_zero_peak_duration_is_rejected() {
    let ron = "(schema_version: 1, tuning: (jump_peak_duration: 0.0))";

    let err = parse_movement_tuning("movement.ron", ron).unwrap_err();
    assert!(matches!(
        err,
        ContentLoadError::Invalid {
            source: TuningError::NonPositivePeakDuration(_),
            ..
        }
    ));
}

#[test]
fn test_unknown_schema_version_is_rejected() {
    let err = parse_movement_tuning("movement.ron", "(schema_version: 7)").unwrap_err();
    assert!(matches!(err, ContentLoadError::Schema { found: 7, .. }));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let err = parse_movement_tuning("movement.ron", "(schema_version: ").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(!err.is_missing());
}

#[test]
fn test_missing_file_is_reported_as_missing() {
    let err = load_movement_tuning(Path::new("does/not/exist/movement.ron")).unwrap_err();
    assert!(err.is_missing());
}

#[test]
fn test_shipped_movement_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/movement.ron");
    let tuning = load_movement_tuning(&path).unwrap();
    assert_eq!(tuning.validate(), Ok(()));
}
