//! Index-addressed scene arena.
//!
//! The scene hierarchy is a flat arena of nodes with parent links stored as
//! indices. Nodes are appended parent-first, so world transforms resolve in
//! a single forward pass with no recursion and no ownership cycles. The
//! animator addresses nodes it mutates through plain `NodeId`s handed out at
//! composition time.

use log::warn;

use crate::data_structures::instance::Transform;
use crate::data_structures::mesh::MeshId;

/// Stable handle to a node in the [`SceneArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena; parents always have a smaller index than
    /// their children.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Which render batch a node's mesh belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Opaque,
    /// Alpha-blended, drawn after all opaque batches.
    Translucent,
}

/// A named shape in the scene: local transform, derived world transform,
/// tint (rgb + opacity) and an optional mesh. Mesh-less nodes are grouping
/// pivots.
#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub local: Transform,
    pub(crate) world: Transform,
    pub color: [f32; 4],
    pub mesh: Option<MeshId>,
    pub surface: Surface,
}

impl Node {
    pub fn pivot(local: Transform) -> Self {
        Self {
            parent: None,
            local,
            world: Transform::new(),
            color: [1.0, 1.0, 1.0, 1.0],
            mesh: None,
            surface: Surface::Opaque,
        }
    }

    pub fn shape(local: Transform, mesh: MeshId, color: [f32; 4]) -> Self {
        Self {
            parent: None,
            local,
            world: Transform::new(),
            color,
            mesh: Some(mesh),
            surface: Surface::Opaque,
        }
    }

    pub fn translucent(mut self) -> Self {
        self.surface = Surface::Translucent;
        self
    }
}

#[derive(Default)]
pub struct SceneArena {
    nodes: Vec<Node>,
}

impl SceneArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under `parent`. Parents must already be in the arena,
    /// which keeps the arena topologically ordered for the world pass.
    pub fn add(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(NodeId(p)) = parent {
            assert!(
                p < id.0,
                "parent {} must be inserted before its child {}",
                p,
                id.0
            );
        }
        node.parent = parent;
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Mutable access to a node's local transform, the animator's main entry.
    pub fn local_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].local
    }

    /// World transform as of the last [`update_world_transforms`] pass.
    ///
    /// [`update_world_transforms`]: Self::update_world_transforms
    pub fn world(&self, id: NodeId) -> &Transform {
        &self.nodes[id.0].world
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Recompute all world transforms in one forward pass.
    ///
    /// Parents precede children by construction, so each node can read its
    /// parent's already-updated world transform.
    pub fn update_world_transforms(&mut self) {
        for i in 0..self.nodes.len() {
            match self.nodes[i].parent {
                Some(NodeId(p)) => {
                    if p >= i {
                        warn!("node {} has a forward parent link to {}, skipping", i, p);
                        continue;
                    }
                    let world = &self.nodes[p].world * &self.nodes[i].local;
                    self.nodes[i].world = world;
                }
                None => self.nodes[i].world = self.nodes[i].local.clone(),
            }
        }
    }
}
