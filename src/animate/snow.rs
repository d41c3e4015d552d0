//! Snow particle integration.
//!
//! Each snowflake is one arena node plus a small persistent particle state:
//! fall speed, drift phase, and scale. Particles fall and drift every frame
//! and are recycled to the spawn height once they cross the floor bound;
//! none are ever destroyed.

use cgmath::Vector3;

use crate::scatter::Scatter;

/// Height a recycled flake respawns at.
pub const RESPAWN_HEIGHT: f32 = 10.0;
/// Flakes below this height are recycled.
pub const FLOOR_BOUND: f32 = -3.0;
/// Horizontal spawn extent on both x and z.
pub const SPAWN_EXTENT: f32 = 6.0;

pub const MIN_FALL_SPEED: f32 = 0.6;
pub const MAX_FALL_SPEED: f32 = 1.4;
pub const DRIFT_AMPLITUDE: f32 = 0.35;
pub const DRIFT_FREQUENCY: f32 = 0.8;

/// Per-flake persistent state.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vector3<f32>,
    pub speed: f32,
    pub drift_phase: f32,
    pub scale: f32,
}

impl Particle {
    /// Fresh flake somewhere inside the spawn volume.
    pub fn spawn(scatter: &mut Scatter) -> Self {
        Self {
            position: Vector3::new(
                scatter.range(-SPAWN_EXTENT, SPAWN_EXTENT),
                scatter.range(FLOOR_BOUND, RESPAWN_HEIGHT),
                scatter.range(-SPAWN_EXTENT, SPAWN_EXTENT),
            ),
            speed: scatter.range(MIN_FALL_SPEED, MAX_FALL_SPEED),
            drift_phase: scatter.range(0.0, std::f32::consts::TAU),
            scale: scatter.range(0.5, 1.2),
        }
    }

    /// Integrate one frame: downward fall plus lateral sinusoidal drift,
    /// with wraparound back to the spawn height once the floor bound is
    /// crossed.
    pub fn step(&mut self, elapsed: f32, dt: f32, scatter: &mut Scatter) {
        self.position.y -= self.speed * dt;
        self.position.x +=
            (DRIFT_FREQUENCY * elapsed + self.drift_phase).cos() * DRIFT_AMPLITUDE * dt;
        if self.position.y < FLOOR_BOUND {
            self.position.y = RESPAWN_HEIGHT;
            self.position.x = scatter.range(-SPAWN_EXTENT, SPAWN_EXTENT);
            self.position.z = scatter.range(-SPAWN_EXTENT, SPAWN_EXTENT);
        }
    }
}
