use katzenbaum::animate::motion::{
    self, ARM_AMPLITUDE, ARM_BASE_ANGLE, BOB_AMPLITUDE, HEAD_TRACK_YAW, TAIL_FLICK_AMPLITUDE,
    TAIL_FLICK_FREQUENCY, TAIL_FLICK_PHASE, TAIL_SWEEP_AMPLITUDE, TAIL_SWEEP_FREQUENCY,
    TREE_SPIN_RATE,
};

const EPS: f32 = 1e-4;

#[test]
fn body_bob_stays_within_amplitude() {
    for i in 0..10_000 {
        let t = i as f32 * 0.013;
        let bob = motion::body_bob(t);
        assert!(
            bob.abs() <= BOB_AMPLITUDE + EPS,
            "bob {} exceeds amplitude at t={}",
            bob,
            t
        );
    }
}

#[test]
fn smoothing_approaches_target_monotonically() {
    let target = 0.8;
    let mut current = 0.0;
    let factor = motion::smoothing_factor(8.0, 1.0 / 60.0);
    let mut last_distance = (target - current) as f32;
    for _ in 0..600 {
        current = motion::lerp_toward(current, target, factor);
        let distance = target - current;
        assert!(distance >= -EPS, "smoothing overshot the target");
        assert!(
            distance <= last_distance + EPS,
            "distance to target increased"
        );
        last_distance = distance;
    }
    assert!((target - current).abs() < 0.01);
}

#[test]
fn smoothing_never_overshoots_for_any_valid_factor() {
    for factor in [0.05, 0.3, 0.7, 1.0] {
        let mut current = -1.0;
        for _ in 0..200 {
            current = motion::lerp_toward(current, 1.0, factor);
            assert!(current <= 1.0 + EPS);
        }
    }
}

#[test]
fn rest_pose_at_time_zero() {
    assert!(motion::body_bob(0.0).abs() < EPS);
    assert!(motion::body_roll(0.0).abs() < EPS);
    assert!((motion::arm_angle(0.0) - ARM_BASE_ANGLE).abs() < EPS);

    let (yaw, pitch) = motion::head_target(0.0, [0.0, 0.0]);
    assert!(yaw.abs() < EPS);
    assert!(pitch.abs() < EPS);

    // The flick runs on its own phase, so the tail is not exactly zero at
    // t=0; it must equal the flick term alone.
    let expected = TAIL_FLICK_AMPLITUDE * TAIL_FLICK_PHASE.sin();
    assert!((motion::tail_angle(0.0) - expected).abs() < EPS);
}

#[test]
fn tail_reaches_peak_sweep_at_quarter_period() {
    let t = std::f32::consts::FRAC_PI_2 / TAIL_SWEEP_FREQUENCY;
    let flick = TAIL_FLICK_AMPLITUDE * (TAIL_FLICK_FREQUENCY * t + TAIL_FLICK_PHASE).sin();
    let sweep = motion::tail_angle(t) - flick;
    assert!(
        (sweep - TAIL_SWEEP_AMPLITUDE).abs() < EPS,
        "sweep component {} should peak at {}",
        sweep,
        TAIL_SWEEP_AMPLITUDE
    );
}

#[test]
fn head_tracks_pointer_direction() {
    let (yaw_left, _) = motion::head_target(0.0, [-1.0, 0.0]);
    let (yaw_right, _) = motion::head_target(0.0, [1.0, 0.0]);
    assert!((yaw_left + HEAD_TRACK_YAW).abs() < EPS);
    assert!((yaw_right - HEAD_TRACK_YAW).abs() < EPS);
}

#[test]
fn tree_angle_is_elapsed_time_only() {
    // The spin is an absolute function of elapsed time; whatever step sizes
    // led up to an elapsed total, the angle is (rate * total) mod tau.
    for total in [0.0, 0.016, 3.2, 37.5, 1000.5] {
        let expected = (TREE_SPIN_RATE * total) % std::f32::consts::TAU;
        assert!((motion::tree_angle(total) - expected).abs() < EPS);
        assert!(motion::tree_angle(total) >= 0.0);
        assert!(motion::tree_angle(total) < std::f32::consts::TAU);
    }
}

#[test]
fn tree_angle_wraps_at_full_turn() {
    let period = std::f32::consts::TAU / TREE_SPIN_RATE;
    let a = motion::tree_angle(3.2);
    let b = motion::tree_angle(3.2 + period);
    assert!((a - b).abs() < 1e-3);
}

#[test]
fn arm_swing_stays_around_base_angle() {
    for i in 0..5_000 {
        let t = i as f32 * 0.017;
        let angle = motion::arm_angle(t);
        assert!(angle >= ARM_BASE_ANGLE - ARM_AMPLITUDE - EPS);
        assert!(angle <= ARM_BASE_ANGLE + ARM_AMPLITUDE + EPS);
    }
}
