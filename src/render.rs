//! Render composition: batching arena nodes into instanced draws.
//!
//! Nodes sharing a mesh are collected into one batch and drawn with a single
//! instanced call. Batch membership is fixed at composition time (the scene
//! never adds or removes shapes at runtime); only the instance contents are
//! re-uploaded each frame after the animator has run.

use wgpu::util::DeviceExt;

use crate::data_structures::{
    arena::{NodeId, SceneArena, Surface},
    instance::InstanceRaw,
    mesh::{Geometry, MeshBank, MeshId},
};

/// Vertex/index buffers for one geometry.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl GpuMesh {
    pub fn from_geometry(device: &wgpu::Device, geometry: &Geometry, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_elements: geometry.indices.len() as u32,
        }
    }
}

/// One instanced draw: a mesh, the nodes rendered with it, and their
/// instance buffer.
struct Batch {
    mesh: MeshId,
    surface: Surface,
    nodes: Vec<NodeId>,
    buffer: wgpu::Buffer,
}

pub struct SceneRenderer {
    meshes: Vec<GpuMesh>,
    batches: Vec<Batch>,
    staging: Vec<InstanceRaw>,
}

impl SceneRenderer {
    pub fn new(device: &wgpu::Device, bank: &MeshBank, arena: &SceneArena) -> Self {
        let meshes = bank
            .iter()
            .map(|(id, geometry)| {
                GpuMesh::from_geometry(device, geometry, &format!("mesh {}", id.0))
            })
            .collect();

        let mut groups: Vec<(MeshId, Surface, Vec<NodeId>)> = Vec::new();
        for (node_id, node) in arena.iter() {
            let Some(mesh) = node.mesh else { continue };
            match groups
                .iter_mut()
                .find(|(m, s, _)| *m == mesh && *s == node.surface)
            {
                Some((_, _, nodes)) => nodes.push(node_id),
                None => groups.push((mesh, node.surface, vec![node_id])),
            }
        }
        let batches = groups
            .into_iter()
            .map(|(mesh, surface, nodes)| {
                let init = vec![InstanceRaw::identity(); nodes.len()];
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Instance Buffer"),
                    contents: bytemuck::cast_slice(&init),
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });
                Batch {
                    mesh,
                    surface,
                    nodes,
                    buffer,
                }
            })
            .collect();

        Self {
            meshes,
            batches,
            staging: Vec::new(),
        }
    }

    /// Write the current world transforms and tints into the instance
    /// buffers. Call after the arena's world pass, before rendering.
    pub fn upload(&mut self, queue: &wgpu::Queue, arena: &SceneArena) {
        for batch in &self.batches {
            self.staging.clear();
            self.staging.extend(batch.nodes.iter().map(|&id| {
                let node = arena.node(id);
                node.world.to_raw(node.color)
            }));
            queue.write_buffer(&batch.buffer, 0, bytemuck::cast_slice(&self.staging));
        }
    }

    /// Record instanced draws for every batch of the given surface class.
    pub fn draw<'a, 'pass>(
        &'a self,
        surface: Surface,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
        render_pass: &'pass mut wgpu::RenderPass<'a>,
    ) where
        'a: 'pass,
    {
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, light_bind_group, &[]);
        for batch in self.batches.iter().filter(|b| b.surface == surface) {
            if batch.nodes.is_empty() {
                log::warn!("you attempted to render a batch with zero instances");
                continue;
            }
            let mesh = &self.meshes[batch.mesh.0];
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, batch.buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.num_elements, 0, 0..batch.nodes.len() as u32);
        }
    }
}
