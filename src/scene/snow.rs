//! The instanced snow field.

use crate::animate::snow::Particle;
use crate::data_structures::{
    arena::{Node, NodeId, SceneArena},
    instance::Transform,
    mesh::{Geometry, MeshBank},
};
use crate::scatter::Scatter;
use crate::scene::{Snowflake, palette};

pub(crate) const FLAKE_COUNT: usize = 80;
const FLAKE_RADIUS: f32 = 0.05;

pub(crate) fn build(
    arena: &mut SceneArena,
    bank: &mut MeshBank,
    parent: NodeId,
    scatter: &mut Scatter,
) -> Vec<Snowflake> {
    // Flakes are tiny; a coarse sphere is plenty.
    let mesh = bank.register(Geometry::uv_sphere(1.0, 6, 8));
    (0..FLAKE_COUNT)
        .map(|_| {
            let particle = Particle::spawn(scatter);
            let mut t = Transform::from(particle.position);
            t.scale = [FLAKE_RADIUS * particle.scale; 3].into();
            let node = arena.add(Some(parent), Node::shape(t, mesh, palette::SNOWFLAKE));
            Snowflake { node, particle }
        })
        .collect()
}
