//! The cat, assembled from scaled spheres and cones.
//!
//! All placement values are tuned by eye against the tree so the pair reads
//! as one tableau from the default camera.

use cgmath::{Deg, Rotation3};

use crate::data_structures::{
    arena::{Node, NodeId, SceneArena},
    instance::Transform,
    mesh::{Geometry, MeshBank, MeshId},
};
use crate::scene::{CatHandles, palette};

/// Where the cat sits, relative to the scene root.
const CAT_POSITION: [f32; 3] = [-1.7, 0.0, 0.3];
/// The cat faces the tree slightly.
const CAT_FACING_DEG: f32 = -24.0;

const HEAD_RADIUS: f32 = 0.45;
const TAIL_SEGMENTS: usize = 3;

pub(crate) fn build(
    arena: &mut SceneArena,
    bank: &mut MeshBank,
    parent: NodeId,
    sphere: MeshId,
) -> CatHandles {
    let mut base = Transform::at(CAT_POSITION[0], CAT_POSITION[1], CAT_POSITION[2]);
    base.rotation = cgmath::Quaternion::from_angle_y(Deg(CAT_FACING_DEG));
    let root = arena.add(Some(parent), Node::pivot(base));

    let mut body = Transform::at(0.0, 0.55, 0.0);
    body.scale = [0.62, 0.55, 0.58].into();
    arena.add(Some(root), Node::shape(body, sphere, palette::CAT_CREAM));

    let head = arena.add(Some(root), Node::pivot(Transform::at(0.0, 1.18, 0.0)));
    let mut skull = Transform::new();
    skull.scale = [HEAD_RADIUS; 3].into();
    arena.add(Some(head), Node::shape(skull, sphere, palette::CAT_CREAM));

    let ear = bank.register(Geometry::cone(0.5, 1.0, 12));
    for side in [-1.0f32, 1.0] {
        let mut t = Transform::at(side * 0.26, 0.30, 0.0);
        t.scale = [0.17, 0.24, 0.17].into();
        t.rotation = cgmath::Quaternion::from_angle_z(Deg(side * -16.0));
        arena.add(Some(head), Node::shape(t, ear, palette::CAT_EAR_PINK));
    }

    let cheeks = [-1.0f32, 1.0].map(|side| {
        let mut t = Transform::at(side * 0.24, -0.08, 0.36);
        t.scale = [0.10, 0.08, 0.05].into();
        arena.add(
            Some(head),
            Node::shape(t, sphere, palette::CHEEK_REST).translucent(),
        )
    });

    let tail = arena.add(Some(root), Node::pivot(Transform::at(0.0, 0.45, -0.50)));
    for i in 0..TAIL_SEGMENTS {
        let along = i as f32;
        let mut t = Transform::at(0.0, 0.10 * along, -0.20 * (along + 1.0));
        t.scale = [0.13 - 0.025 * along; 3].into();
        arena.add(Some(tail), Node::shape(t, sphere, palette::CAT_TAIL));
    }

    let arms = [-1.0f32, 1.0].map(|side| {
        let pivot = arena.add(
            Some(root),
            Node::pivot(Transform::at(side * 0.52, 0.74, 0.12)),
        );
        let mut t = Transform::at(0.0, -0.24, 0.0);
        t.scale = [0.13, 0.30, 0.13].into();
        arena.add(Some(pivot), Node::shape(t, sphere, palette::CAT_CREAM));
        pivot
    });

    CatHandles {
        root,
        head,
        head_radius: HEAD_RADIUS,
        tail,
        arms,
        cheeks,
    }
}
