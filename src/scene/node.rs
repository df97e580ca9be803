use cgmath::{Euler, Matrix4, Rad, SquareMatrix, Vector3};

use super::components::{Material, ShadowSurface, Spotlight};
use super::graph::{NodeId, NodeProperty};
use crate::assets::Model;

/// A node stored in the in-memory [`Scene`](super::Scene) arena.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub position: Vector3<f32>,
    /// Euler angles in radians
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub visible: bool,
    pub lights: Vec<Spotlight>,
    pub surfaces: Vec<ShadowSurface>,
    pub model: Option<Model>,
    pub material: Option<Material>,
}

impl SceneNode {
    /// Create a visible node with identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            visible: true,
            lights: Vec::new(),
            surfaces: Vec::new(),
            model: None,
            material: None,
        }
    }

    pub fn property(&self, property: NodeProperty) -> Vector3<f32> {
        match property {
            NodeProperty::Position => self.position,
            NodeProperty::Rotation => self.rotation,
            NodeProperty::Scale => self.scale,
        }
    }

    pub fn set_property(&mut self, property: NodeProperty, value: Vector3<f32>) {
        match property {
            NodeProperty::Position => self.position = value,
            NodeProperty::Rotation => self.rotation = value,
            NodeProperty::Scale => self.scale = value,
        }
    }

    /// Local transform relative to the parent node
    pub fn local_transform(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from(Euler {
            x: Rad(self.rotation.x),
            y: Rad(self.rotation.y),
            z: Rad(self.rotation.z),
        });
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s // Order matters: T * R * S
    }

    /// Reset position, rotation and scale to identity
    pub fn reset_transform(&mut self) {
        self.position = Vector3::new(0.0, 0.0, 0.0);
        self.rotation = Vector3::new(0.0, 0.0, 0.0);
        self.scale = Vector3::new(1.0, 1.0, 1.0);
    }

    /// True when the local transform is the identity matrix
    pub fn has_identity_transform(&self) -> bool {
        self.local_transform() == Matrix4::identity()
    }
}
