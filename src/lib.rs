//! katzenbaum
//!
//! An animated holiday greeting: a cat beside a decorated apple-tree ribbon
//! sculpture, rendered on the GPU natively or in a browser canvas. The scene
//! is composed once from literal constants; a per-frame animator then drives
//! the cat's idle motion, the hanging decorations, a click-triggered blush,
//! the sculpture's slow spin and an instanced snowfall.
//!
//! High-level modules
//! - `camera`: orbit camera, projection, view uniforms and pick rays
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: meshes, transforms and the index-addressed scene arena
//! - `scene`: composes the greeting tableau and hands out animation targets
//! - `animate`: per-frame pose, blush, spin and snow updates
//! - `render`: instanced batching of arena nodes
//! - `audio`: background music toggle with silent autoplay fallback
//! - `flow`: the winit event loop driving all of the above
//!

pub mod animate;
pub mod audio;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod greeting;
pub mod pipelines;
pub mod render;
pub mod scatter;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::dpi::PhysicalPosition;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Web entry point; the host page only needs a `<canvas id="canvas">`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = flow::run() {
        log::error!("failed to start: {e}");
    }
}
