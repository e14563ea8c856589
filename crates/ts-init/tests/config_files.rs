//! YAML/JSON round trips through the file system.

use ts_core::{Real, StateVector};
use ts_init::{
    InitError, OperatingPoints, OperatingTrajectories, OperatingTrajectory, load_json, load_yaml,
    save_json, save_yaml,
};

fn v(values: &[Real]) -> StateVector {
    StateVector::from_vec(values.to_vec())
}

fn switched() -> OperatingPoints {
    OperatingPoints::from_trajectory(
        vec![0.0, 1.0, 1.0, 2.0],
        vec![v(&[0.0, 1.0]), v(&[1.0, 1.0]), v(&[1.0, -1.0]), v(&[2.0, -1.0])],
        vec![v(&[0.5]), v(&[0.5]), v(&[-0.5]), v(&[-0.5])],
    )
    .unwrap()
}

#[test]
fn yaml_roundtrip_preserves_switches() {
    let path = std::env::temp_dir().join("ts_init_roundtrip_switched.yaml");
    let points = switched();
    save_yaml(&path, &points).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, points);
    assert_eq!(loaded.switching_times(), vec![1.0]);
}

#[test]
fn json_roundtrip_point() {
    let path = std::env::temp_dir().join("ts_init_roundtrip_point.json");
    let points = OperatingPoints::from_point(v(&[1.0, -1.0]), v(&[0.0, 0.0]));
    save_json(&path, &points).unwrap();
    let loaded = load_json(&path).unwrap();

    let mut out = OperatingTrajectory::new();
    loaded
        .trajectories(&v(&[0.0, 0.0]), 2.0, 5.0, &mut out, false)
        .unwrap();
    assert_eq!(out.time, vec![2.0, 5.0]);
    assert_eq!(out.state, vec![v(&[1.0, -1.0]); 2]);
}

#[test]
fn invalid_file_is_a_config_error() {
    let path = std::env::temp_dir().join("ts_init_invalid.yaml");
    std::fs::write(
        &path,
        "mode: trajectory\nsamples:\n  - { t: 0.0, state: [0.0], input: [0.0] }\n  - { t: 1.0, state: [0.0, 1.0], input: [0.0] }\n",
    )
    .unwrap();
    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(
        err,
        InitError::SampleDimension {
            what: "state",
            index: 1,
            ..
        }
    ));
    assert!(err.is_config());
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("ts_init_does_not_exist.yaml");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(load_yaml(&path), Err(InitError::Io(_))));
}
