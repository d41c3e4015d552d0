//! Engine data structures: meshes, transforms, and the scene arena.
//!
//! - `mesh` contains procedural geometry builders and the mesh bank
//! - `instance` holds node transforms and per-instance GPU data
//! - `arena` is the index-addressed scene hierarchy

pub mod arena;
pub mod instance;
pub mod mesh;
