#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use ladderx::{
    analyze, Frame, InputError, LadderParameters, DEFAULT_FRAME_COUNT, FALLBACK_ANGLE_DEGREES,
};

fn shallow_ladder() -> LadderParameters {
    LadderParameters::new(20.0, 5.0, 1500.0, 1.0).expect("valid shallow configuration")
}

fn steep_ladder() -> LadderParameters {
    LadderParameters::new(60.0, 5.0, 1500.0, 1.0).expect("valid steep configuration")
}

#[test]
fn shallow_ladder_overwhelms_available_friction() {
    let run = analyze(shallow_ladder());
    let report = run.report();

    // Torque balance about the wall contact: required = (W / 2) * cot(theta).
    let theta = 20.0_f64.to_radians();
    let expected = 750.0 * theta.cos() / theta.sin();
    assert_relative_eq!(report.required_friction, expected, epsilon = 1.0e-9);
    assert!(report.required_friction > 2000.0);

    assert_relative_eq!(report.max_friction, 1500.0, epsilon = 1.0e-12);
    assert!(!report.is_stable);
}

#[test]
fn steep_ladder_holds_with_friction_to_spare() {
    let run = analyze(steep_ladder());
    let report = run.report();

    let theta = 60.0_f64.to_radians();
    let expected = 750.0 * theta.cos() / theta.sin();
    assert_relative_eq!(report.required_friction, expected, epsilon = 1.0e-9);
    assert_relative_eq!(report.required_friction, 433.0127, epsilon = 1.0e-3);

    assert_relative_eq!(report.max_friction, 1500.0, epsilon = 1.0e-12);
    assert!(report.is_stable);
}

#[test]
fn stability_is_monotonic_in_the_friction_coefficient() {
    let mut was_stable = false;
    for mu in [0.0, 0.5, 1.0, 1.5, 2.0, 3.0] {
        let params = LadderParameters::new(25.0, 5.0, 1500.0, mu).expect("valid configuration");
        let stable = analyze(params).report().is_stable;
        // Once stable, raising mu must never flip the verdict back.
        assert!(stable || !was_stable);
        was_stable = stable;
    }
    assert!(was_stable);
}

#[test]
fn stable_sweep_ends_at_the_input_angle() {
    let run = analyze(steep_ladder());
    let frames: Vec<Frame> = run.animation().collect();

    assert_eq!(frames.len(), DEFAULT_FRAME_COUNT);
    assert_relative_eq!(
        frames[0].pose,
        60.0_f64.to_radians() / DEFAULT_FRAME_COUNT as f64,
        epsilon = 1.0e-12
    );
    assert_relative_eq!(
        frames.last().expect("sweep is non-empty").pose,
        60.0_f64.to_radians(),
        epsilon = 1.0e-12
    );
}

#[test]
fn unstable_sweep_collapses_regardless_of_input_angle() {
    let run = analyze(shallow_ladder());
    let last = run.animation().last().expect("sweep is non-empty");
    assert_relative_eq!(
        last.pose,
        FALLBACK_ANGLE_DEGREES.to_radians(),
        epsilon = 1.0e-12
    );
}

#[test]
fn every_frame_satisfies_the_geometry_identities() {
    let run = analyze(steep_ladder());
    let length = run.parameters().length();

    for frame in run.animation() {
        assert_relative_eq!(frame.top.x, length * frame.pose.cos(), epsilon = 1.0e-12);
        assert_relative_eq!(frame.top.y, length * frame.pose.sin(), epsilon = 1.0e-12);
        assert_relative_eq!(frame.center_of_gravity.x, frame.top.x / 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(frame.center_of_gravity.y, frame.top.y / 2.0, epsilon = 1.0e-12);
        assert_eq!(frame.bounds.x_min, -1.0);
        assert_eq!(frame.bounds.x_max, length + 1.0);
        assert_eq!(frame.bounds.y_min, 0.0);
        assert_eq!(frame.bounds.y_max, length + 1.0);
    }
}

#[test]
fn rejected_inputs_never_start_a_run() {
    let error = LadderParameters::new(190.0, 5.0, 1500.0, 1.0)
        .expect_err("angle beyond vertical plane rejected");
    assert_eq!(
        error,
        InputError::AngleOutOfRange {
            angle_degrees: 190.0
        }
    );

    let error =
        LadderParameters::new(30.0, -5.0, 1500.0, 1.0).expect_err("negative length rejected");
    assert_eq!(error, InputError::NonPositiveLength { length: -5.0 });
}

#[test]
fn rerunning_identical_inputs_reproduces_the_run() {
    let first = analyze(steep_ladder());
    let second = analyze(steep_ladder());
    assert_eq!(first.report(), second.report());

    let first_frames: Vec<Frame> = first.animation().collect();
    let second_frames: Vec<Frame> = second.animation().collect();
    assert_eq!(first_frames, second_frames);
}
