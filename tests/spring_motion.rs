//! Spring motion tests.

use approx::assert_abs_diff_eq;
use nalgebra::point;
use spring_motion::{
    MotionState, Spring, SpringParameters, fph,
    io::{parse_ron_file, write_ron_file},
    quantities::Position,
    sampling::sample_trajectory,
};
use std::fs;

fn decaying_parameters() -> SpringParameters {
    SpringParameters::new(
        point![2.0, 4.0, -1.0],
        point![-1.0, 0.0, 0.5],
        1.5,
        0.3,
        4.0,
    )
}

#[test]
fn spring_should_replay_identical_trajectory_after_reset() {
    let mut spring = Spring::from_parameters(decaying_parameters());
    let first_run = sample_trajectory(&mut spring, 0.05, 3.0).unwrap();

    spring.reset();
    assert_eq!(spring.state(), MotionState::AtRest);

    let second_run = sample_trajectory(&mut spring, 0.05, 3.0).unwrap();
    assert_eq!(first_run, second_run);
}

#[test]
fn spring_should_settle_at_equilibrium_position() {
    let parameters = decaying_parameters();
    let mut spring = Spring::from_parameters(parameters);
    let samples = sample_trajectory(&mut spring, 0.1, 200.0).unwrap();

    assert_abs_diff_eq!(
        samples.last().unwrap().position,
        parameters.equilibrium_position,
        epsilon = 1e-9
    );
}

#[test]
fn spring_should_oscillate_along_line_through_pull_and_equilibrium_positions() {
    let parameters = decaying_parameters();
    let axis = (parameters.pull_position - parameters.equilibrium_position).normalize();
    let mut spring = Spring::from_parameters(parameters);

    for sample in sample_trajectory(&mut spring, 0.01, 5.0).unwrap() {
        let offset = sample.position - parameters.equilibrium_position;
        let off_axis = offset - offset.dot(&axis) * axis;
        assert_abs_diff_eq!(off_axis.norm(), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn spring_should_stay_within_growing_amplitude_cap() {
    let parameters = SpringParameters::new(point![1.0, 0.0, 0.0], Position::origin(), 1.0, 2.0, 3.0);
    let mut spring = Spring::from_parameters(parameters);

    for sample in sample_trajectory(&mut spring, 0.01, 10.0).unwrap() {
        assert!(nalgebra::distance(&sample.position, &Position::origin()) <= 3.0 + 1e-12);
    }
    assert_eq!(parameters.compute_amplitude_envelope(10.0), 3.0);
}

#[test]
fn parameters_should_survive_ron_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("spring.ron");
    let parameters = decaying_parameters();

    write_ron_file(&parameters, &file_path).unwrap();

    assert_eq!(SpringParameters::from_ron_file(&file_path).unwrap(), parameters);
    assert_eq!(parse_ron_file::<SpringParameters>(&file_path).unwrap(), parameters);
}

#[test]
fn loading_parameters_should_fail_for_non_finite_values() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("spring.ron");
    let parameters = SpringParameters {
        frequency: fph::INFINITY,
        ..SpringParameters::default()
    };

    write_ron_file(&parameters, &file_path).unwrap();

    assert!(parse_ron_file::<SpringParameters>(&file_path).is_ok());
    assert!(SpringParameters::from_ron_file(&file_path).is_err());
}

#[test]
fn loading_parameters_should_fail_for_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("spring.ron");
    fs::write(&file_path, "(frequency: 1.0, decay_rate: 0.5)").unwrap();

    assert!(SpringParameters::from_ron_file(&file_path).is_err());
}
