//! Scene composition.
//!
//! Builds the whole greeting tableau once, from literal constants: the
//! ground, the cat, the apple-tree ribbon sculpture, and the snow field.
//! Composition returns the arena plus [`SceneHandles`], the `(NodeId,
//! attribute)` addresses the animator is allowed to mutate each frame.

pub mod cat;
pub mod palette;
pub mod snow;
pub mod tree;

use crate::animate::snow::Particle;
use crate::data_structures::{
    arena::{Node, NodeId, SceneArena},
    instance::Transform,
    mesh::{Geometry, MeshBank},
};
use crate::scatter::Scatter;

/// Radius of the snowy ground disk.
const GROUND_RADIUS: f32 = 7.5;

/// One hanging decoration: the pivot the swing is applied to, and its
/// per-instance phase so pendants desynchronize.
pub struct Pendant {
    pub pivot: NodeId,
    pub phase: f32,
}

/// One snowflake: the rendered node and its persistent particle state.
pub struct Snowflake {
    pub node: NodeId,
    pub particle: Particle,
}

/// Animation addresses into the cat.
pub struct CatHandles {
    /// Bob and roll target.
    pub root: NodeId,
    /// Smoothed look rotation target.
    pub head: NodeId,
    /// Head bounding-sphere radius for click picking, in local units.
    pub head_radius: f32,
    pub tail: NodeId,
    pub arms: [NodeId; 2],
    pub cheeks: [NodeId; 2],
}

/// Everything the animator may touch, produced once by [`compose`].
pub struct SceneHandles {
    pub root: NodeId,
    /// Slow constant-velocity rotation target for the whole sculpture.
    pub tree_spin: NodeId,
    pub cat: CatHandles,
    pub pendants: Vec<Pendant>,
    pub snow: Vec<Snowflake>,
}

/// Build the static scene. Pure construction from constants; the only
/// randomness comes from the deterministic `scatter` stream.
pub fn compose(bank: &mut MeshBank, scatter: &mut Scatter) -> (SceneArena, SceneHandles) {
    let mut arena = SceneArena::new();
    let root = arena.add(None, Node::pivot(Transform::new()));

    let ground = bank.register(Geometry::disk(GROUND_RADIUS, 48));
    arena.add(
        Some(root),
        Node::shape(Transform::new(), ground, palette::GROUND_SNOW),
    );

    // Unit sphere shared by the cat's round parts and the pendants.
    let sphere = bank.register(Geometry::uv_sphere(1.0, 18, 24));

    let cat = cat::build(&mut arena, bank, root, sphere);
    let (tree_spin, pendants) = tree::build(&mut arena, bank, root, sphere, scatter);
    let snow = snow::build(&mut arena, bank, root, scatter);

    arena.update_world_transforms();

    (
        arena,
        SceneHandles {
            root,
            tree_spin,
            cat,
            pendants,
            snow,
        },
    )
}
