use cgmath::Vector3;

use super::target::MarkerId;

/// Lifecycle event an anchor is delivered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorEvent {
    Found,
    Updated,
    Removed,
}

/// A posed detection of a marker, valid only for the callback delivering it.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: MarkerId,
    pub position: Vector3<f32>,
    /// Euler angles in radians; y is the heading (yaw)
    pub rotation: Vector3<f32>,
    pub event: AnchorEvent,
}

impl Anchor {
    pub fn new(
        id: impl Into<MarkerId>,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        event: AnchorEvent,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            rotation,
            event,
        }
    }

    pub fn found(id: impl Into<MarkerId>, position: Vector3<f32>, rotation: Vector3<f32>) -> Self {
        Self::new(id, position, rotation, AnchorEvent::Found)
    }

    pub fn updated(id: impl Into<MarkerId>, position: Vector3<f32>, rotation: Vector3<f32>) -> Self {
        Self::new(id, position, rotation, AnchorEvent::Updated)
    }

    pub fn removed(id: impl Into<MarkerId>) -> Self {
        Self::new(
            id,
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            AnchorEvent::Removed,
        )
    }

    /// Heading only: pitch and roll are dropped since the marker lies flat.
    pub fn yaw_only_rotation(&self) -> Vector3<f32> {
        Vector3::new(0.0, self.rotation.y, 0.0)
    }
}
