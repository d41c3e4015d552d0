//! Per-frame animation.
//!
//! The [`Animator`] is the single writer of the scene arena. Once per frame
//! it recomputes the cat's pose, the pendant swings, the sculpture spin, the
//! blush intensity and the snow positions from elapsed time and pointer
//! input, then writes the results onto the nodes addressed by
//! [`SceneHandles`]. Rest poses are captured at construction so every
//! animated value is an offset from the composed scene, not an accumulation.

pub mod blush;
pub mod motion;
pub mod snow;

use cgmath::{Point3, Rad, Rotation3};

use crate::data_structures::{arena::SceneArena, instance::Transform};
use crate::scatter::Scatter;
use crate::scene::{SceneHandles, palette};

use self::blush::Blush;

/// Everything the host loop supplies per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Seconds since animation start, monotonically increasing.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Pointer position normalized to `[-1, 1]` on both axes, `[0, 0]`
    /// when the pointer is absent.
    pub pointer: [f32; 2],
}

/// How far the cheeks swell at full blush, as a scale factor.
const CHEEK_SWELL: f32 = 0.35;

/// Local rest transforms of all animated nodes, captured after compose.
struct RestPose {
    cat_root: Transform,
    head: Transform,
    tail: Transform,
    arms: [Transform; 2],
    cheeks: [Transform; 2],
    pendants: Vec<Transform>,
}

impl RestPose {
    fn capture(handles: &SceneHandles, arena: &SceneArena) -> Self {
        let local = |id| arena.node(id).local.clone();
        Self {
            cat_root: local(handles.cat.root),
            head: local(handles.cat.head),
            tail: local(handles.cat.tail),
            arms: handles.cat.arms.map(local),
            cheeks: handles.cat.cheeks.map(local),
            pendants: handles.pendants.iter().map(|p| local(p.pivot)).collect(),
        }
    }
}

pub struct Animator {
    handles: SceneHandles,
    rest: RestPose,
    head_yaw: f32,
    head_pitch: f32,
    blush: Blush,
    scatter: Scatter,
}

impl Animator {
    pub fn new(handles: SceneHandles, arena: &SceneArena, scatter: Scatter) -> Self {
        let rest = RestPose::capture(&handles, arena);
        Self {
            handles,
            rest,
            head_yaw: 0.0,
            head_pitch: 0.0,
            blush: Blush::new(),
            scatter,
        }
    }

    pub fn handles(&self) -> &SceneHandles {
        &self.handles
    }

    pub fn blush(&self) -> &Blush {
        &self.blush
    }

    /// Register a click on the head at time `now` (seconds of elapsed time).
    pub fn head_clicked(&mut self, now: f32) {
        self.blush.trigger(now);
    }

    /// World-space bounding sphere of the head, for click picking.
    pub fn head_sphere(&self, arena: &SceneArena) -> (Point3<f32>, f32) {
        let world = arena.world(self.handles.cat.head);
        (
            Point3::new(world.position.x, world.position.y, world.position.z),
            self.handles.cat.head_radius,
        )
    }

    /// Advance one frame and write the new pose into the arena. The caller
    /// runs the arena's world pass afterwards.
    pub fn update(&mut self, arena: &mut SceneArena, input: &FrameInput) {
        let t = input.elapsed;

        // Body bob and roll around the composed rest pose.
        let body = arena.local_mut(self.handles.cat.root);
        body.position = self.rest.cat_root.position + cgmath::Vector3::unit_y() * motion::body_bob(t);
        body.rotation =
            self.rest.cat_root.rotation * cgmath::Quaternion::from_angle_z(Rad(motion::body_roll(t)));

        // Head: smoothed blend of idle wander and pointer tracking.
        let (target_yaw, target_pitch) = motion::head_target(t, input.pointer);
        let factor = motion::smoothing_factor(motion::HEAD_SMOOTHING_RATE, input.dt);
        self.head_yaw = motion::lerp_toward(self.head_yaw, target_yaw, factor);
        self.head_pitch = motion::lerp_toward(self.head_pitch, target_pitch, factor);
        let head = arena.local_mut(self.handles.cat.head);
        head.rotation = self.rest.head.rotation
            * cgmath::Quaternion::from_angle_y(Rad(self.head_yaw))
            * cgmath::Quaternion::from_angle_x(Rad(self.head_pitch));

        // Tail sweep plus flick, one superposed angle around the up axis.
        let tail = arena.local_mut(self.handles.cat.tail);
        tail.rotation =
            self.rest.tail.rotation * cgmath::Quaternion::from_angle_y(Rad(motion::tail_angle(t)));

        // Arms swing mirrored around their base angle.
        for (i, (&arm, rest)) in self
            .handles
            .cat
            .arms
            .iter()
            .zip(&self.rest.arms)
            .enumerate()
        {
            let side = if i == 0 { -1.0 } else { 1.0 };
            let local = arena.local_mut(arm);
            local.rotation = rest.rotation
                * cgmath::Quaternion::from_angle_z(Rad(side * motion::arm_angle(t)));
        }

        // Blush drives cheek tint, opacity and swell together.
        let level = self.blush.update(t, input.dt);
        let color = palette::lerp_color(palette::CHEEK_REST, palette::CHEEK_BLUSH, level);
        for (&cheek, rest) in self.handles.cat.cheeks.iter().zip(&self.rest.cheeks) {
            let node = arena.node_mut(cheek);
            node.color = color;
            node.local.scale = rest.scale * (1.0 + CHEEK_SWELL * level);
        }

        // Pendants, each on its own phase.
        for (pendant, rest) in self.handles.pendants.iter().zip(&self.rest.pendants) {
            let (swing_x, swing_z) = motion::pendant_swing(t, pendant.phase);
            let local = arena.local_mut(pendant.pivot);
            local.rotation = rest.rotation
                * cgmath::Quaternion::from_angle_x(Rad(swing_x))
                * cgmath::Quaternion::from_angle_z(Rad(swing_z));
        }

        // Sculpture spin is absolute in elapsed time, not accumulated.
        arena.local_mut(self.handles.tree_spin).rotation =
            cgmath::Quaternion::from_angle_y(Rad(motion::tree_angle(t)));

        // Snow falls, drifts, and wraps.
        for flake in &mut self.handles.snow {
            flake.particle.step(t, input.dt, &mut self.scatter);
            arena.local_mut(flake.node).position = flake.particle.position;
        }
    }
}
