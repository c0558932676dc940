//! Scene-graph contract used to place markers, plus an in-memory reference
//! implementation with explicit parent-relative storage.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::math::{Quat, Vec3, QUAT_IDENTITY, VEC3_ONE, VEC3_ZERO};

/// Primitive mesh used for markers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveShape {
    #[default]
    Sphere,
    Cube,
}

/// Scene operations needed to create and move markers.
/// Adapters (Bevy, custom hosts) implement this and pass it into
/// `HandVisualizer::update`.
pub trait SceneGraph {
    type Node: Copy + Eq + Debug;

    /// The visualizer's own node; markers are parented under it.
    fn root(&self) -> Self::Node;

    /// Instantiate a primitive. Assumed to always succeed.
    fn create_primitive(&mut self, shape: PrimitiveShape) -> Self::Node;

    /// Strip any collision component. Scenes without physics keep the default.
    fn remove_collider(&mut self, _node: Self::Node) {}

    fn set_local_scale(&mut self, node: Self::Node, scale: Vec3);

    fn set_parent(&mut self, node: Self::Node, parent: Self::Node);

    fn set_world_position(&mut self, node: Self::Node, position: Vec3);

    fn set_world_rotation(&mut self, node: Self::Node, rotation: Quat);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// One node of a [`MarkerArena`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// `None` for the root node.
    pub shape: Option<PrimitiveShape>,
    pub parent: Option<NodeId>,
    pub local_scale: Vec3,
    pub world_position: Vec3,
    pub world_rotation: Quat,
    pub has_collider: bool,
}

impl SceneNode {
    fn empty() -> Self {
        Self {
            shape: None,
            parent: None,
            local_scale: VEC3_ONE,
            world_position: VEC3_ZERO,
            world_rotation: QUAT_IDENTITY,
            has_collider: false,
        }
    }
}

/// Flat node storage. Node 0 is the root; primitives start at the origin with
/// identity rotation, unit scale and a collider.
#[derive(Clone, Debug)]
pub struct MarkerArena {
    nodes: Vec<SceneNode>,
}

impl Default for MarkerArena {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerArena {
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode::empty()],
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children_of(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(parent))
            .map(|(i, _)| NodeId(i as u32))
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize)
    }
}

impl SceneGraph for MarkerArena {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn create_primitive(&mut self, shape: PrimitiveShape) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            shape: Some(shape),
            has_collider: true,
            ..SceneNode::empty()
        });
        id
    }

    fn remove_collider(&mut self, node: NodeId) {
        if let Some(n) = self.node_mut(node) {
            n.has_collider = false;
        }
    }

    fn set_local_scale(&mut self, node: NodeId, scale: Vec3) {
        if let Some(n) = self.node_mut(node) {
            n.local_scale = scale;
        }
    }

    fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        if let Some(n) = self.node_mut(node) {
            n.parent = Some(parent);
        }
    }

    fn set_world_position(&mut self, node: NodeId, position: Vec3) {
        if let Some(n) = self.node_mut(node) {
            n.world_position = position;
        }
    }

    fn set_world_rotation(&mut self, node: NodeId, rotation: Quat) {
        if let Some(n) = self.node_mut(node) {
            n.world_rotation = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_primitive_defaults() {
        let mut arena = MarkerArena::new();
        let id = arena.create_primitive(PrimitiveShape::Sphere);
        assert_eq!(id, NodeId(1));
        let n = arena.node(id).unwrap();
        assert_eq!(n.shape, Some(PrimitiveShape::Sphere));
        assert!(n.has_collider);
        assert_eq!(n.world_position, VEC3_ZERO);
        assert_eq!(n.world_rotation, QUAT_IDENTITY);
        assert_eq!(n.parent, None);
    }

    #[test]
    fn children_follow_parent_links() {
        let mut arena = MarkerArena::new();
        let root = arena.root();
        let a = arena.create_primitive(PrimitiveShape::Sphere);
        let b = arena.create_primitive(PrimitiveShape::Cube);
        arena.set_parent(a, root);
        arena.set_parent(b, a);
        assert_eq!(arena.children_of(root).collect::<Vec<_>>(), vec![a]);
        assert_eq!(arena.children_of(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn position_and_rotation_are_independent() {
        let mut arena = MarkerArena::new();
        let a = arena.create_primitive(PrimitiveShape::Sphere);
        arena.set_world_position(a, [1.0, 2.0, 3.0]);
        arena.set_world_rotation(a, [0.0, 1.0, 0.0, 0.0]);
        arena.set_world_position(a, [4.0, 5.0, 6.0]);
        let n = arena.node(a).unwrap();
        assert_eq!(n.world_position, [4.0, 5.0, 6.0]);
        assert_eq!(n.world_rotation, [0.0, 1.0, 0.0, 0.0]);
    }
}
