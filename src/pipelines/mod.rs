//! Render pipeline construction.
//!
//! Two pipelines share one untextured shader: an opaque pass for most of the
//! scene and an alpha-blended pass for fading shapes (the cheek patches).

pub mod basic;
pub mod depth;
pub mod light;
pub mod transparent;

/// The pipelines owned by the context, built once at startup.
#[derive(Debug)]
pub struct Pipelines {
    pub opaque: wgpu::RenderPipeline,
    pub translucent: wgpu::RenderPipeline,
}
