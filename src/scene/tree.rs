//! The apple-tree ribbon sculpture.
//!
//! A conical helix of "peel" winds up to an apple at the top; decorations
//! hang from pivots placed along the same parametric curve. The ribbon
//! geometry gets a one-time clay wobble so it reads hand-modelled rather
//! than machined.

use cgmath::Vector3;

use crate::data_structures::{
    arena::{Node, NodeId, SceneArena},
    instance::Transform,
    mesh::{Geometry, MeshBank, MeshId},
};
use crate::scatter::Scatter;
use crate::scene::{Pendant, palette};

/// Where the sculpture stands, relative to the scene root.
const TREE_POSITION: [f32; 3] = [1.7, 0.0, -0.2];

const RIBBON_TURNS: f32 = 4.0;
const RIBBON_BASE_RADIUS: f32 = 1.55;
const RIBBON_HEIGHT: f32 = 3.4;
const RIBBON_TUBE_RADIUS: f32 = 0.09;
const RIBBON_SAMPLES: usize = 220;
/// How much of the base radius is gone at the top of the helix.
const RIBBON_TAPER: f32 = 0.92;

/// Clay wobble, tuned until the ribbon stopped looking extruded.
const WOBBLE_AMPLITUDE: f32 = 0.018;
const WOBBLE_FREQUENCY: f32 = 9.0;

const PENDANT_COUNT: usize = 9;
/// Outward offset of pendant pivots from the ribbon curve. Tuned by visual
/// inspection; treat as opaque configuration.
const PENDANT_OFFSET: f32 = 0.22;
const PENDANT_DROP: f32 = 0.26;
const PENDANT_RADIUS: f32 = 0.11;

/// Apple profile as `[radius, height]` pairs, revolved around y.
const APPLE_PROFILE: [[f32; 2]; 8] = [
    [0.00, 0.00],
    [0.20, 0.02],
    [0.34, 0.10],
    [0.42, 0.28],
    [0.40, 0.48],
    [0.28, 0.62],
    [0.12, 0.66],
    [0.00, 0.62],
];

/// Stem profile, a thin revolved sliver.
const STEM_PROFILE: [[f32; 2]; 4] = [[0.0, 0.0], [0.030, 0.0], [0.035, 0.18], [0.0, 0.20]];

/// Point on the helix at parameter `t` in `[0, 1]`.
fn ribbon_point(t: f32) -> Vector3<f32> {
    let angle = t * RIBBON_TURNS * std::f32::consts::TAU;
    let radius = RIBBON_BASE_RADIUS * (1.0 - RIBBON_TAPER * t);
    Vector3::new(radius * angle.cos(), RIBBON_HEIGHT * t, radius * angle.sin())
}

pub(crate) fn build(
    arena: &mut SceneArena,
    bank: &mut MeshBank,
    parent: NodeId,
    sphere: MeshId,
    scatter: &mut Scatter,
) -> (NodeId, Vec<Pendant>) {
    let spin = arena.add(
        Some(parent),
        Node::pivot(Transform::at(
            TREE_POSITION[0],
            TREE_POSITION[1],
            TREE_POSITION[2],
        )),
    );

    let path: Vec<Vector3<f32>> = (0..=RIBBON_SAMPLES)
        .map(|i| ribbon_point(i as f32 / RIBBON_SAMPLES as f32))
        .collect();
    let mut ribbon = Geometry::tube(&path, RIBBON_TUBE_RADIUS, 10);
    ribbon.clay_wobble(WOBBLE_AMPLITUDE, WOBBLE_FREQUENCY);
    let ribbon = bank.register(ribbon);
    arena.add(
        Some(spin),
        Node::shape(Transform::new(), ribbon, palette::PEEL_GOLD),
    );

    let apple = bank.register(Geometry::lathe(&APPLE_PROFILE, 32));
    arena.add(
        Some(spin),
        Node::shape(
            Transform::at(0.0, RIBBON_HEIGHT + 0.04, 0.0),
            apple,
            palette::APPLE_RED,
        ),
    );
    let stem = bank.register(Geometry::lathe(&STEM_PROFILE, 12));
    arena.add(
        Some(spin),
        Node::shape(
            Transform::at(0.0, RIBBON_HEIGHT + 0.66, 0.0),
            stem,
            palette::APPLE_STEM,
        ),
    );

    let pendants = (0..PENDANT_COUNT)
        .map(|k| {
            let t = (k + 1) as f32 / (PENDANT_COUNT + 1) as f32;
            let point = ribbon_point(t);
            let radial = Vector3::new(point.x, 0.0, point.z);
            let outward = if radial.x == 0.0 && radial.z == 0.0 {
                Vector3::new(1.0, 0.0, 0.0)
            } else {
                radial / (radial.x * radial.x + radial.z * radial.z).sqrt()
            };
            let pivot_pos = point + outward * PENDANT_OFFSET;
            let pivot = arena.add(
                Some(spin),
                Node::pivot(Transform::at(pivot_pos.x, pivot_pos.y, pivot_pos.z)),
            );
            let mut bauble = Transform::at(0.0, -PENDANT_DROP, 0.0);
            bauble.scale = [PENDANT_RADIUS; 3].into();
            arena.add(
                Some(pivot),
                Node::shape(bauble, sphere, palette::PENDANTS[k % palette::PENDANTS.len()]),
            );
            Pendant {
                pivot,
                phase: scatter.range(0.0, std::f32::consts::TAU),
            }
        })
        .collect();

    (spin, pendants)
}
