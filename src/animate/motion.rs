//! Pure per-frame motion functions.
//!
//! Everything here is a total function of elapsed time (and, for smoothing,
//! the previous value). The animator calls these each frame and writes the
//! results onto arena nodes; keeping the math free of scene state makes the
//! waveforms directly testable.

/// Vertical bob of the cat's body, metres around the rest height.
pub const BOB_AMPLITUDE: f32 = 0.06;
pub const BOB_FREQUENCY: f32 = 1.8;

/// Side-to-side roll of the body, radians.
pub const ROLL_AMPLITUDE: f32 = 0.05;
pub const ROLL_FREQUENCY: f32 = 1.3;

/// Tail sweep (slow, wide) and flick (fast, narrow), radians.
pub const TAIL_SWEEP_AMPLITUDE: f32 = 0.45;
pub const TAIL_SWEEP_FREQUENCY: f32 = 1.1;
pub const TAIL_FLICK_AMPLITUDE: f32 = 0.12;
pub const TAIL_FLICK_FREQUENCY: f32 = 4.7;
pub const TAIL_FLICK_PHASE: f32 = 0.9;

/// Arm swing around its resting pose, radians.
pub const ARM_BASE_ANGLE: f32 = 0.5;
pub const ARM_AMPLITUDE: f32 = 0.18;
pub const ARM_FREQUENCY: f32 = 2.3;

/// Idle head wander and how strongly the head follows the pointer.
pub const HEAD_IDLE_AMPLITUDE: f32 = 0.10;
pub const HEAD_IDLE_FREQUENCY: f32 = 0.7;
pub const HEAD_TRACK_YAW: f32 = 0.45;
pub const HEAD_TRACK_PITCH: f32 = 0.25;
pub const HEAD_SMOOTHING_RATE: f32 = 8.0;

/// Pendant swing around both horizontal axes, radians.
pub const PENDANT_AMPLITUDE_X: f32 = 0.16;
pub const PENDANT_FREQUENCY_X: f32 = 1.9;
pub const PENDANT_AMPLITUDE_Z: f32 = 0.11;
pub const PENDANT_FREQUENCY_Z: f32 = 2.6;

/// Angular velocity of the tree sculpture, radians per second.
pub const TREE_SPIN_RATE: f32 = 0.25;

/// Exponential step toward `target`. `factor` is the fraction of the
/// remaining distance covered this frame, in `(0, 1]`; the result never
/// overshoots the target.
pub fn lerp_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// Frame-rate independent smoothing factor for [`lerp_toward`]: covers the
/// same fraction of remaining distance per second regardless of `dt`.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

pub fn body_bob(elapsed: f32) -> f32 {
    BOB_AMPLITUDE * (BOB_FREQUENCY * elapsed).sin()
}

pub fn body_roll(elapsed: f32) -> f32 {
    ROLL_AMPLITUDE * (ROLL_FREQUENCY * elapsed).sin()
}

/// Two superposed sinusoids: a wide sweep with a fast flick on top.
pub fn tail_angle(elapsed: f32) -> f32 {
    TAIL_SWEEP_AMPLITUDE * (TAIL_SWEEP_FREQUENCY * elapsed).sin()
        + TAIL_FLICK_AMPLITUDE * (TAIL_FLICK_FREQUENCY * elapsed + TAIL_FLICK_PHASE).sin()
}

pub fn arm_angle(elapsed: f32) -> f32 {
    ARM_BASE_ANGLE + ARM_AMPLITUDE * (ARM_FREQUENCY * elapsed).sin()
}

/// Where the head wants to look: idle wander plus pointer tracking.
/// `pointer` is normalized to `[-1, 1]` on both axes.
pub fn head_target(elapsed: f32, pointer: [f32; 2]) -> (f32, f32) {
    let idle = HEAD_IDLE_AMPLITUDE * (HEAD_IDLE_FREQUENCY * elapsed).sin();
    let yaw = idle + pointer[0] * HEAD_TRACK_YAW;
    let pitch = pointer[1] * HEAD_TRACK_PITCH;
    (yaw, pitch)
}

/// Swing angles for one pendant; `phase` desynchronizes instances.
pub fn pendant_swing(elapsed: f32, phase: f32) -> (f32, f32) {
    (
        PENDANT_AMPLITUDE_X * (PENDANT_FREQUENCY_X * elapsed + phase).sin(),
        PENDANT_AMPLITUDE_Z * (PENDANT_FREQUENCY_Z * elapsed + phase * 1.7).sin(),
    )
}

/// Absolute rotation of the tree sculpture after `elapsed` seconds.
///
/// Computed from elapsed time rather than accumulated per frame, so the
/// angle is invariant under the frame rate.
pub fn tree_angle(elapsed: f32) -> f32 {
    (TREE_SPIN_RATE * elapsed) % std::f32::consts::TAU
}
