use cgmath::{Matrix4, Vector3};

use super::components::{Material, ShadowSurface, Spotlight};
use super::graph::{NodeId, NodeProperty, SceneGraph};
use super::node::SceneNode;
use crate::assets::Model;
use crate::error::SceneError;

/// In-memory scene graph: an arena of [`SceneNode`]s addressed by [`NodeId`].
///
/// Hosts that render through their own engine implement [`SceneGraph`]
/// themselves; this implementation backs the demo and the tests.
pub struct Scene {
    nodes: Vec<SceneNode>,
    root: NodeId,
    lighting_environment: Option<String>,
}

impl Scene {
    /// Creates a scene holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode::new("root")],
            root: NodeId(0),
            lighting_environment: None,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn node_or_err(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.node_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Finds the first node with the given name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(|index| NodeId(index as u32))
    }

    /// A node is rendered only when it and all of its ancestors are visible
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.node(node_id) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Transform from node space to scene space
    pub fn world_transform(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let node = self.node(id)?;
        let local = node.local_transform();
        match node.parent {
            Some(parent) => Some(self.world_transform(parent)? * local),
            None => Some(local),
        }
    }

    pub fn lighting_environment(&self) -> Option<&str> {
        self.lighting_environment.as_deref()
    }

    /// Gets the total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            node_count: self.nodes.len(),
            visible_count: (0..self.nodes.len())
                .filter(|&index| self.is_effectively_visible(NodeId(index as u32)))
                .count(),
            light_count: self.nodes.iter().map(|node| node.lights.len()).sum(),
            model_count: self.nodes.iter().filter(|node| node.model.is_some()).count(),
            total_triangles: self
                .nodes
                .iter()
                .filter_map(|node| node.model.as_ref())
                .map(|model| model.triangle_count())
                .sum(),
        }
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node(id).and_then(|node| node.parent);
        }
        false
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph for Scene {
    fn root(&self) -> NodeId {
        self.root
    }

    fn create_node(&mut self, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode::new(name));
        id
    }

    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.node_or_err(parent)?;
        self.node_or_err(child)?;
        if self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        if let Some(old_parent) = self.nodes[child.0 as usize].parent.take() {
            self.nodes[old_parent.0 as usize]
                .children
                .retain(|&id| id != child);
        }
        self.nodes[child.0 as usize].parent = Some(parent);
        self.nodes[parent.0 as usize].children.push(child);
        Ok(())
    }

    fn property(&self, node: NodeId, property: NodeProperty) -> Option<Vector3<f32>> {
        self.node(node).map(|node| node.property(property))
    }

    fn set_property(
        &mut self,
        node: NodeId,
        property: NodeProperty,
        value: Vector3<f32>,
    ) -> Result<(), SceneError> {
        self.node_or_err(node)?.set_property(property, value);
        Ok(())
    }

    fn is_visible(&self, node: NodeId) -> Option<bool> {
        self.node(node).map(|node| node.visible)
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> Result<(), SceneError> {
        self.node_or_err(node)?.visible = visible;
        Ok(())
    }

    fn attach_light(&mut self, node: NodeId, light: Spotlight) -> Result<(), SceneError> {
        self.node_or_err(node)?.lights.push(light);
        Ok(())
    }

    fn attach_surface(&mut self, node: NodeId, surface: ShadowSurface) -> Result<(), SceneError> {
        self.node_or_err(node)?.surfaces.push(surface);
        Ok(())
    }

    fn attach_model(
        &mut self,
        node: NodeId,
        model: Model,
        material: Option<Material>,
    ) -> Result<(), SceneError> {
        let node = self.node_or_err(node)?;
        node.model = Some(model);
        node.material = material;
        Ok(())
    }

    fn set_lighting_environment(&mut self, asset: &str) {
        self.lighting_environment = Some(asset.to_string());
    }
}

/// Scene statistics for debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub visible_count: usize,
    pub light_count: usize,
    pub model_count: usize,
    pub total_triangles: usize,
}
