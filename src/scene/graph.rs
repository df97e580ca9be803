//! Scene graph capability trait
//!
//! The binding core never owns node memory. It talks to whatever scene graph
//! the host renders through this trait and refers to nodes by [`NodeId`].

use std::fmt;

use cgmath::Vector3;

use super::components::{Material, ShadowSurface, Spotlight};
use crate::assets::Model;
use crate::error::SceneError;

/// Opaque handle to a node in the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Animatable transform properties of a node.
///
/// Rotation is stored as Euler angles in radians (x = pitch, y = yaw, z = roll).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeProperty {
    Position,
    Rotation,
    Scale,
}

/// Mutations the binding core and the scene assembly need from a scene graph.
///
/// Implementations are driven from the control thread only, so no method
/// takes care of synchronisation.
///
/// ## Examples
///
/// ```
/// use cgmath::Vector3;
/// use haggis_ar::scene::{Scene, SceneGraph};
///
/// let mut scene = Scene::new();
/// let node = scene.create_node("marker");
/// scene.set_position(node, Vector3::new(0.0, 0.0, -1.0)).unwrap();
/// scene.set_visible(node, false).unwrap();
/// assert_eq!(scene.is_visible(node), Some(false));
/// ```
pub trait SceneGraph {
    /// Root node every other node hangs from.
    fn root(&self) -> NodeId;

    /// Create a detached node. Use [`SceneGraph::add_child`] to place it.
    fn create_node(&mut self, name: &str) -> NodeId;

    /// Re-parent `child` under `parent`. Fails with [`SceneError::Cycle`]
    /// when `parent` is `child` or one of its descendants.
    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError>;

    /// Read a transform property, `None` for unknown nodes.
    fn property(&self, node: NodeId, property: NodeProperty) -> Option<Vector3<f32>>;

    /// Write a transform property immediately.
    fn set_property(
        &mut self,
        node: NodeId,
        property: NodeProperty,
        value: Vector3<f32>,
    ) -> Result<(), SceneError>;

    /// Visibility flag of the node itself (ancestors not considered).
    fn is_visible(&self, node: NodeId) -> Option<bool>;

    fn set_visible(&mut self, node: NodeId, visible: bool) -> Result<(), SceneError>;

    fn attach_light(&mut self, node: NodeId, light: Spotlight) -> Result<(), SceneError>;

    fn attach_surface(&mut self, node: NodeId, surface: ShadowSurface) -> Result<(), SceneError>;

    fn attach_model(
        &mut self,
        node: NodeId,
        model: Model,
        material: Option<Material>,
    ) -> Result<(), SceneError>;

    /// Name of the radiance map used for image based lighting.
    fn set_lighting_environment(&mut self, asset: &str);

    fn position(&self, node: NodeId) -> Option<Vector3<f32>> {
        self.property(node, NodeProperty::Position)
    }

    fn set_position(&mut self, node: NodeId, position: Vector3<f32>) -> Result<(), SceneError> {
        self.set_property(node, NodeProperty::Position, position)
    }

    fn rotation(&self, node: NodeId) -> Option<Vector3<f32>> {
        self.property(node, NodeProperty::Rotation)
    }

    fn set_rotation(&mut self, node: NodeId, rotation: Vector3<f32>) -> Result<(), SceneError> {
        self.set_property(node, NodeProperty::Rotation, rotation)
    }

    fn scale(&self, node: NodeId) -> Option<Vector3<f32>> {
        self.property(node, NodeProperty::Scale)
    }

    fn set_scale(&mut self, node: NodeId, scale: Vector3<f32>) -> Result<(), SceneError> {
        self.set_property(node, NodeProperty::Scale, scale)
    }
}
