//! Procedural mesh generation.
//!
//! Every shape in the greeting scene is generated from literal constants:
//! revolved profile curves for the apple and its peel, swept tubes for the
//! ribbon, spheres and cones for the cat, a disk for the ground. Geometry is
//! built on the CPU once and uploaded as vertex/index buffers afterwards.

use cgmath::{InnerSpace, Vector3};

/// Anything that can describe its GPU vertex buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// CPU-side mesh data for one shape.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    wobbled: bool,
}

impl Geometry {
    /// Sphere from stacked rings. `rings` and `segments` control tessellation.
    pub fn uv_sphere(radius: f32, rings: u32, segments: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for ring in 0..=rings {
            let v = ring as f32 / rings as f32;
            let phi = v * std::f32::consts::PI;
            for seg in 0..=segments {
                let u = seg as f32 / segments as f32;
                let theta = u * std::f32::consts::TAU;
                let normal = [
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(MeshVertex {
                    position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                    normal,
                });
            }
        }
        let stride = segments + 1;
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * stride + seg;
                let b = a + stride;
                // Rings run top-down, so the outward-facing winding is the
                // mirror of the lathe's bottom-up one.
                indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }
        Self {
            vertices,
            indices,
            wobbled: false,
        }
    }

    /// Revolve a `[radius, height]` profile curve around the y-axis.
    ///
    /// The apple body and the peel cross-sections are defined this way; the
    /// profile starts and ends on the axis for a closed surface.
    pub fn lathe(profile: &[[f32; 2]], segments: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for point in profile {
            for seg in 0..=segments {
                let theta = seg as f32 / segments as f32 * std::f32::consts::TAU;
                vertices.push(MeshVertex {
                    position: [point[0] * theta.cos(), point[1], point[0] * theta.sin()],
                    normal: [0.0; 3],
                });
            }
        }
        let stride = segments + 1;
        for row in 0..profile.len() as u32 - 1 {
            for seg in 0..segments {
                let a = row * stride + seg;
                let b = a + stride;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
        let mut geometry = Self {
            vertices,
            indices,
            wobbled: false,
        };
        geometry.compute_normals();
        geometry
    }

    /// Sweep a circular cross-section along a sampled space curve.
    ///
    /// Frames are built from the curve tangent and a fixed up-vector, which
    /// is stable for the gently winding ribbon helix used here.
    pub fn tube(path: &[Vector3<f32>], radius: f32, ring_segments: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let up = Vector3::new(0.0, 1.0, 0.0);
        for (i, center) in path.iter().enumerate() {
            let tangent = if i + 1 < path.len() {
                (path[i + 1] - center).normalize()
            } else {
                (center - path[i - 1]).normalize()
            };
            let mut side = tangent.cross(up);
            if side.magnitude() < 1e-4 {
                side = Vector3::new(1.0, 0.0, 0.0);
            }
            let side = side.normalize();
            let binormal = side.cross(tangent).normalize();
            for seg in 0..=ring_segments {
                let theta = seg as f32 / ring_segments as f32 * std::f32::consts::TAU;
                let offset = side * theta.cos() * radius + binormal * theta.sin() * radius;
                let position = center + offset;
                vertices.push(MeshVertex {
                    position: position.into(),
                    normal: offset.normalize().into(),
                });
            }
        }
        let stride = ring_segments + 1;
        for row in 0..path.len() as u32 - 1 {
            for seg in 0..ring_segments {
                let a = row * stride + seg;
                let b = a + stride;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
        Self {
            vertices,
            indices,
            wobbled: false,
        }
    }

    /// Flat fan disk in the xz-plane, facing +y.
    pub fn disk(radius: f32, segments: u32) -> Self {
        let mut vertices = vec![MeshVertex {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
        }];
        let mut indices = Vec::new();
        for seg in 0..=segments {
            let theta = seg as f32 / segments as f32 * std::f32::consts::TAU;
            vertices.push(MeshVertex {
                position: [radius * theta.cos(), 0.0, radius * theta.sin()],
                normal: [0.0, 1.0, 0.0],
            });
        }
        for seg in 1..=segments {
            indices.extend_from_slice(&[0, seg + 1, seg]);
        }
        Self {
            vertices,
            indices,
            wobbled: false,
        }
    }

    /// Open cone with its apex on +y, used for the cat's ears.
    pub fn cone(radius: f32, height: f32, segments: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for seg in 0..=segments {
            let theta = seg as f32 / segments as f32 * std::f32::consts::TAU;
            vertices.push(MeshVertex {
                position: [radius * theta.cos(), 0.0, radius * theta.sin()],
                normal: [0.0; 3],
            });
            vertices.push(MeshVertex {
                position: [0.0, height, 0.0],
                normal: [0.0; 3],
            });
        }
        for seg in 0..segments {
            let base = seg * 2;
            indices.extend_from_slice(&[base, base + 1, base + 2]);
        }
        let mut geometry = Self {
            vertices,
            indices,
            wobbled: false,
        };
        geometry.compute_normals();
        geometry
    }

    /// Hand-modelled "clay" irregularity for the ribbon surfaces.
    ///
    /// Displaces each vertex along its normal by a trigonometric hash of its
    /// position. Guarded so it runs at most once per mesh instance; a second
    /// call is a no-op.
    pub fn clay_wobble(&mut self, amplitude: f32, frequency: f32) {
        if self.wobbled {
            return;
        }
        self.wobbled = true;
        for vertex in &mut self.vertices {
            let [x, y, z] = vertex.position;
            let noise = (x * frequency + 1.3).sin()
                * (y * frequency * 0.8 + 2.1).sin()
                * (z * frequency * 1.2 + 0.7).sin();
            for axis in 0..3 {
                vertex.position[axis] += vertex.normal[axis] * noise * amplitude;
            }
        }
    }

    pub fn is_wobbled(&self) -> bool {
        self.wobbled
    }

    /// Smooth per-vertex normals by area-weighted face accumulation.
    fn compute_normals(&mut self) {
        let mut accumulated = vec![Vector3::new(0.0f32, 0.0, 0.0); self.vertices.len()];
        for face in self.indices.chunks_exact(3) {
            let [a, b, c] = [face[0] as usize, face[1] as usize, face[2] as usize];
            let pa = Vector3::from(self.vertices[a].position);
            let pb = Vector3::from(self.vertices[b].position);
            let pc = Vector3::from(self.vertices[c].position);
            // Un-normalized cross product weighs large faces more.
            let face_normal = (pb - pa).cross(pc - pa);
            accumulated[a] += face_normal;
            accumulated[b] += face_normal;
            accumulated[c] += face_normal;
        }
        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            if normal.magnitude() > 1e-6 {
                vertex.normal = normal.normalize().into();
            }
        }
    }
}

/// Stable handle into the [`MeshBank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub(crate) usize);

/// All geometry built by the composer, addressed by [`MeshId`].
#[derive(Default)]
pub struct MeshBank {
    geometries: Vec<Geometry>,
}

impl MeshBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, geometry: Geometry) -> MeshId {
        self.geometries.push(geometry);
        MeshId(self.geometries.len() - 1)
    }

    pub fn geometry(&self, id: MeshId) -> &Geometry {
        &self.geometries[id.0]
    }

    pub fn geometry_mut(&mut self, id: MeshId) -> &mut Geometry {
        &mut self.geometries[id.0]
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &Geometry)> {
        self.geometries
            .iter()
            .enumerate()
            .map(|(i, g)| (MeshId(i), g))
    }
}
