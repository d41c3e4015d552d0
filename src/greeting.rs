//! The greeting itself: scene, animator, renderer and music in one bundle.
//!
//! Composition runs once when the GPU context is ready; afterwards the flow
//! only feeds [`FrameInput`]s and pointer events in.

use crate::{
    animate::{Animator, FrameInput},
    audio::{self, Music},
    camera::Ray,
    context::Context,
    data_structures::{
        arena::{SceneArena, Surface},
        mesh::MeshBank,
    },
    render::SceneRenderer,
    scatter::Scatter,
    scene,
};

pub struct Greeting {
    arena: SceneArena,
    animator: Animator,
    renderer: SceneRenderer,
    music: Music,
}

impl Greeting {
    pub fn new(ctx: &Context) -> Self {
        let mut bank = MeshBank::new();
        let mut scatter = Scatter::default();
        let (arena, handles) = scene::compose(&mut bank, &mut scatter);
        log::info!(
            "composed greeting scene: {} nodes, {} meshes",
            arena.len(),
            bank.len()
        );
        let renderer = SceneRenderer::new(&ctx.device, &bank, &arena);
        let animator = Animator::new(handles, &arena, scatter);
        let music = Music::new(audio::TRACK_URL);
        Self {
            arena,
            animator,
            renderer,
            music,
        }
    }

    /// Advance the animation and push fresh instance data to the GPU.
    pub fn update(&mut self, ctx: &Context, input: &FrameInput) {
        self.animator.update(&mut self.arena, input);
        self.arena.update_world_transforms();
        self.renderer.upload(&ctx.queue, &self.arena);
    }

    /// Resolve a pointer ray against the cat's head; a hit triggers the
    /// blush and returns true.
    pub fn click(&mut self, ray: Ray, now: f32) -> bool {
        let (center, radius) = self.animator.head_sphere(&self.arena);
        if ray.intersect_sphere(center, radius).is_some() {
            self.animator.head_clicked(now);
            true
        } else {
            false
        }
    }

    pub fn toggle_music(&mut self) {
        self.music.toggle();
    }

    pub fn music_playing(&self) -> bool {
        self.music.is_playing()
    }

    /// Record draws for one surface class into the pass.
    pub fn draw<'a, 'pass>(
        &'a self,
        surface: Surface,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
        render_pass: &'pass mut wgpu::RenderPass<'a>,
    ) where
        'a: 'pass,
    {
        self.renderer
            .draw(surface, camera_bind_group, light_bind_group, render_pass);
    }
}
